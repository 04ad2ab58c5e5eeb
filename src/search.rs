//! A* search over board arrangements.
//!
//! Graph search with a closed set keyed by board alone: the first time a
//! board is popped it is expanded, and any later entry for the same board is
//! discarded on pop. Goal testing happens on pop, before the closed-set check.

use tracing::{debug, trace};

use crate::board::{Board, Cell};
use crate::error::BoardError;
use crate::frontier::Frontier;
use crate::moves::Move;
use crate::node::{FrontierKey, SearchNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Moves available to successor generation. Successors are always
    /// generated in `Move::ALL` order regardless of the order given here.
    pub moves: Vec<Move>,
    /// Hard cap on node expansions (`None` = run until the frontier empties).
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    pub fn with_moves(mut self, moves: &[Move]) -> Self {
        self.moves = moves.to_vec();
        self
    }

    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    fn allows(&self, movement: Move) -> bool {
        self.moves.contains(&movement)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            moves: Move::ALL.to_vec(),
            max_expansions: None,
        }
    }
}

/// One board on a solution path with its cost bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub board: Board,
    /// Move that led here (`None` for the initial board).
    pub via: Option<Move>,
    pub g: u32,
    pub h: u32,
    pub f: u32,
}

impl From<&SearchNode> for PathStep {
    fn from(node: &SearchNode) -> Self {
        Self {
            board: node.board,
            via: node.via,
            g: node.g,
            h: node.h,
            f: node.f(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Initial board first, goal board last.
    pub path: Vec<PathStep>,
    pub total_cost: u32,
}

impl Solution {
    pub fn moves(&self) -> Vec<Move> {
        self.path.iter().filter_map(|step| step.via).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// The frontier emptied without reaching a goal.
    Unsolvable,
    /// `SearchPolicy::max_expansions` was hit first.
    BudgetExhausted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards expanded (equals the final size of the visited set).
    pub expanded: u64,
    pub generated: u64,
    /// Successors dropped at push because their board was already expanded.
    pub skipped_visited: u64,
    /// Frontier entries dropped at pop because their board was already expanded.
    pub stale_discarded: u64,
    pub frontier_high_water: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }
}

/// Validate `cells` and search from them with the default policy.
pub fn search(cells: &[Cell]) -> Result<SearchResult, BoardError> {
    let board = Board::from_cells(cells)?;
    Ok(search_board(&board, &SearchPolicy::default()))
}

/// Run A* from `initial` until a goal is popped, the frontier empties, or the
/// expansion budget runs out.
pub fn search_board(initial: &Board, policy: &SearchPolicy) -> SearchResult {
    debug!(board = %initial, h = initial.heuristic(), "starting search");

    let mut nodes = vec![SearchNode::root(*initial)];
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();
    let mut next_creation_order: u64 = 1;

    frontier.push(FrontierKey::from(&nodes[0]), 0);

    let outcome = loop {
        let Some(id) = frontier.pop() else {
            break SearchOutcome::Unsolvable;
        };
        let current = nodes[id].clone();

        if current.board.is_goal() {
            break SearchOutcome::Solved(reconstruct(&nodes, id));
        }

        let key = current.board.key();
        if frontier.is_visited(&key) {
            stats.stale_discarded += 1;
            continue;
        }

        if policy.max_expansions.is_some_and(|max| stats.expanded >= max) {
            break SearchOutcome::BudgetExhausted;
        }

        frontier.mark_visited(key);
        stats.expanded += 1;
        trace!(id, board = %current.board, g = current.g, h = current.h, "expanding");

        for movement in Move::ALL.into_iter().filter(|&m| policy.allows(m)) {
            let Some(mut child) = current.successor(movement) else {
                continue;
            };
            stats.generated += 1;

            if frontier.is_visited(&child.board.key()) {
                stats.skipped_visited += 1;
                continue;
            }

            child.id = nodes.len();
            child.creation_order = next_creation_order;
            next_creation_order += 1;

            trace!(via = %movement, g = child.g, h = child.h, "queued");
            frontier.push(FrontierKey::from(&child), child.id);
            nodes.push(child);
        }
    };

    stats.frontier_high_water = frontier.high_water();
    debug_assert_eq!(frontier.visited_count() as u64, stats.expanded);

    match &outcome {
        SearchOutcome::Solved(solution) => debug!(
            total_cost = solution.total_cost,
            steps = solution.path.len(),
            expanded = stats.expanded,
            generated = stats.generated,
            "goal reached"
        ),
        SearchOutcome::Unsolvable => debug!(expanded = stats.expanded, "frontier exhausted"),
        SearchOutcome::BudgetExhausted => {
            debug!(expanded = stats.expanded, "expansion budget exhausted")
        }
    }

    SearchResult { outcome, stats }
}

/// Follow parent indices from `goal` back to the root.
fn reconstruct(nodes: &[SearchNode], goal: usize) -> Solution {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        let node = &nodes[id];
        path.push(PathStep::from(node));
        cursor = node.parent;
    }
    path.reverse();

    Solution {
        total_cost: nodes[goal].f(),
        path,
    }
}
