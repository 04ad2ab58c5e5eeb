//! A* solver for the seven-cell tile-jump puzzle.
//!
//! Three White and three Black tiles share a one-dimensional track with a
//! single gap. A tile may slide into the gap or jump over one or two tiles
//! into it; the goal is any arrangement with every White tile left of every
//! Black tile.

pub mod board;
pub mod error;
pub mod frontier;
pub mod moves;
pub mod node;
pub mod render;
pub mod search;

pub use board::{heuristic, is_goal, Board, Cell, BOARD_LEN};
pub use error::BoardError;
pub use moves::Move;
pub use search::{
    search, search_board, PathStep, SearchOutcome, SearchPolicy, SearchResult, SearchStats,
    Solution,
};
