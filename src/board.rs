use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::moves::Move;

/// Number of cells on the track.
pub const BOARD_LEN: usize = 7;

/// Tile multiset of the reference puzzle: three of each colour and one gap.
const REFERENCE_TILES: [Cell; BOARD_LEN] = [
    Cell::Black,
    Cell::Black,
    Cell::Black,
    Cell::Empty,
    Cell::White,
    Cell::White,
    Cell::White,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    /// Digit used in canonical keys.
    pub fn key_char(&self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::White => '1',
            Cell::Black => '2',
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    /// Accepts both the rendered symbols and the key digits.
    pub fn from_char(c: char) -> Result<Self, BoardError> {
        match c {
            '_' | '0' => Ok(Cell::Empty),
            'W' | 'w' | '1' => Ok(Cell::White),
            'B' | 'b' | '2' => Ok(Cell::Black),
            other => Err(BoardError::InvalidSymbol(other)),
        }
    }
}

/// A valid arrangement: exactly `BOARD_LEN` cells with a single gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: [Cell; BOARD_LEN],
    empty: usize,
}

impl Board {
    /// Validates `cells` and caches the position of the gap.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, BoardError> {
        let cells: [Cell; BOARD_LEN] = cells
            .try_into()
            .map_err(|_| BoardError::WrongLength(cells.len()))?;

        let empties = cells.iter().filter(|&&c| c == Cell::Empty).count();
        match empties {
            0 => return Err(BoardError::NoEmpty),
            1 => {}
            n => return Err(BoardError::MultipleEmpty(n)),
        }

        let empty = cells
            .iter()
            .position(|&c| c == Cell::Empty)
            .ok_or(BoardError::NoEmpty)?;

        Ok(Self { cells, empty })
    }

    /// The puzzle's reference start position, `BBB_WWW`.
    pub fn reference() -> Self {
        Self {
            cells: REFERENCE_TILES,
            empty: 3,
        }
    }

    /// A uniformly random arrangement of the reference tiles.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = REFERENCE_TILES;
        cells.shuffle(rng);

        let empty = cells
            .iter()
            .position(|&c| c == Cell::Empty)
            .unwrap_or_default();
        Self { cells, empty }
    }

    pub fn cells(&self) -> &[Cell; BOARD_LEN] {
        &self.cells
    }

    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Board after moving the gap, or `None` if the move leaves the track.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        let target = movement.target(self.empty, BOARD_LEN)?;
        let mut cells = self.cells;
        cells.swap(self.empty, target);
        Some(Self {
            cells,
            empty: target,
        })
    }

    /// Number of (Black, White) pairs with the Black cell to the left.
    pub fn heuristic(&self) -> u32 {
        count_inversions(&self.cells)
    }

    /// Every White cell precedes every Black cell; the gap may sit anywhere.
    pub fn is_goal(&self) -> bool {
        self.heuristic() == 0
    }

    /// Fixed-length digit string identifying this exact arrangement.
    pub fn key(&self) -> String {
        self.cells.iter().map(Cell::key_char).collect()
    }
}

fn count_inversions(cells: &[Cell]) -> u32 {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Cell::White)
        .map(|(i, _)| cells[..i].iter().filter(|&&c| c == Cell::Black).count() as u32)
        .sum()
}

pub fn heuristic(board: &Board) -> u32 {
    board.heuristic()
}

pub fn is_goal(board: &Board) -> bool {
    board.is_goal()
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .trim()
            .chars()
            .map(Cell::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn parses_symbols_and_digits() {
        assert_eq!(board("BBB_WWW"), Board::reference());
        assert_eq!(board("2220111"), Board::reference());
        assert_eq!(board("BBB_WWW").empty_index(), 3);
        assert_eq!(board("_WWWBBB").empty_index(), 0);
    }

    #[test]
    fn rejects_malformed_boards() {
        assert_eq!("BBBWWW".parse::<Board>(), Err(BoardError::WrongLength(6)));
        assert_eq!("BBB__WWW".parse::<Board>(), Err(BoardError::WrongLength(8)));
        assert_eq!("BBBXWWW".parse::<Board>(), Err(BoardError::InvalidSymbol('X')));
        assert_eq!("BBBBWWW".parse::<Board>(), Err(BoardError::NoEmpty));
        assert_eq!("BB__WWW".parse::<Board>(), Err(BoardError::MultipleEmpty(2)));
    }

    #[test]
    fn heuristic_counts_blacks_left_of_each_white() {
        assert_eq!(board("BBB_WWW").heuristic(), 9);
        assert_eq!(board("WWW_BBB").heuristic(), 0);
        assert_eq!(board("BW_WBWB").heuristic(), 4);
        assert_eq!(board("_WBWBWB").heuristic(), 3);
        assert_eq!(board("WB_WWBB").heuristic(), 2);
    }

    #[test]
    fn goal_ignores_gap_position() {
        assert!(board("_WWWBBB").is_goal());
        assert!(board("WW_WBBB").is_goal());
        assert!(board("WWWBBB_").is_goal());
        assert!(!board("WWBWBB_").is_goal());
    }

    #[test]
    fn key_uses_digit_encoding() {
        assert_eq!(Board::reference().key(), "2220111");
        assert_eq!(board("W_BWBWB").key(), "1021212");
        assert_ne!(board("W_BWBWB").key(), board("_WBWBWB").key());
    }

    #[test]
    fn apply_move_swaps_gap_and_tile() {
        let start = Board::reference();
        let next = start.apply_move(Move::LeapLeft).unwrap();
        assert_eq!(next.to_string(), "_BBBWWW");
        assert_eq!(next.empty_index(), 0);
        assert!(next.apply_move(Move::SlideLeft).is_none());

        let jumped = start.apply_move(Move::JumpRight).unwrap();
        assert_eq!(jumped.to_string(), "BBBWW_W");
    }

    #[test]
    fn shuffled_boards_keep_the_tile_multiset() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let b = Board::shuffled(&mut rng);
            let mut sorted = *b.cells();
            sorted.sort();
            let mut reference = REFERENCE_TILES;
            reference.sort();
            assert_eq!(sorted, reference);
            assert_eq!(b.cells()[b.empty_index()], Cell::Empty);
        }
    }
}
