//! Console trace of a search result.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};

use crate::board::{Board, Cell};
use crate::search::{SearchOutcome, SearchResult, SearchStats, Solution};

pub fn write_board<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    for cell in board.cells() {
        let symbol = cell.symbol();
        if !color {
            queue!(out, Print(symbol))?;
            continue;
        }
        match cell {
            Cell::White => queue!(out, PrintStyledContent(symbol.white().bold()))?,
            Cell::Black => queue!(out, PrintStyledContent(symbol.dark_grey().bold()))?,
            Cell::Empty => queue!(out, PrintStyledContent(symbol.dim()))?,
        }
    }
    writeln!(out)
}

pub fn write_solution<W: Write>(out: &mut W, solution: &Solution, color: bool) -> io::Result<()> {
    writeln!(out, "Printing Solution Path")?;
    for (i, step) in solution.path.iter().enumerate() {
        match step.via {
            None => writeln!(out, "Initial State:")?,
            Some(_) => {
                writeln!(out, "Move {}:", i)?;
                writeln!(out, "Heuristic Cost: {}", step.h)?;
            }
        }
        write_board(out, &step.board, color)?;
    }
    writeln!(out, "Total Cost: {}", solution.total_cost)
}

pub fn write_stats<W: Write>(out: &mut W, stats: &SearchStats) -> io::Result<()> {
    writeln!(
        out,
        "Expanded {} boards (generated {}, skipped {} visited, discarded {} stale, frontier peak {}).",
        stats.expanded,
        stats.generated,
        stats.skipped_visited,
        stats.stale_discarded,
        stats.frontier_high_water
    )
}

pub fn write_result<W: Write>(out: &mut W, result: &SearchResult, color: bool) -> io::Result<()> {
    match &result.outcome {
        SearchOutcome::Solved(solution) => write_solution(out, solution, color)?,
        SearchOutcome::Unsolvable => writeln!(out, "No Solution Found")?,
        SearchOutcome::BudgetExhausted => {
            writeln!(out, "No Solution Found (expansion budget exhausted)")?
        }
    }
    write_stats(out, &result.stats)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_board, SearchPolicy};

    fn render(result: &SearchResult) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, result, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_board_uses_symbols() {
        let mut buf = Vec::new();
        write_board(&mut buf, &Board::reference(), false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "BBB_WWW\n");
    }

    #[test]
    fn solution_trace_lists_every_step() {
        let board: Board = "WB_WWBB".parse().unwrap();
        let text = render(&search_board(&board, &SearchPolicy::default()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Printing Solution Path");
        assert_eq!(lines[1], "Initial State:");
        assert_eq!(lines[2], "WB_WWBB");
        assert_eq!(lines[3], "Move 1:");
        assert_eq!(lines[4], "Heuristic Cost: 2");
        assert_eq!(lines[6], "Move 2:");
        assert!(lines.contains(&"Total Cost: 3"));
        assert!(lines.last().unwrap().starts_with("Expanded "));
    }

    #[test]
    fn unsolvable_prints_sentinel() {
        let policy = SearchPolicy::default().with_moves(&[]);
        let text = render(&search_board(&Board::reference(), &policy));
        assert!(text.starts_with("No Solution Found\n"));
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let policy = SearchPolicy::default().with_max_expansions(1);
        let text = render(&search_board(&Board::reference(), &policy));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "No Solution Found (expansion budget exhausted)");
        assert!(lines[1].starts_with("Expanded 1 boards"));
    }

    #[test]
    fn colored_board_still_contains_symbols() {
        let mut buf = Vec::new();
        write_board(&mut buf, &Board::reference(), true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('B') && text.contains('W') && text.contains('_'));
        assert!(text.contains('\u{1b}'), "styled output should carry escape codes");
    }
}
