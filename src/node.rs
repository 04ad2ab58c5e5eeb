//! Search nodes and their frontier ordering.

use crate::board::Board;
use crate::moves::Move;

/// One explored or frontier state.
///
/// Nodes live in an arena owned by the search; `parent` is an index into that
/// arena, so parent chains never dangle when frontier entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub id: usize,
    pub parent: Option<usize>,
    pub via: Option<Move>,
    pub board: Board,
    pub g: u32,
    pub h: u32,
    /// Global counter for FIFO tie-breaking among equal `f`.
    pub creation_order: u64,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self {
            id: 0,
            parent: None,
            via: None,
            h: board.heuristic(),
            board,
            g: 0,
            creation_order: 0,
        }
    }

    /// Successor reached by `movement`, or `None` if the move is off the track.
    ///
    /// `id` and `creation_order` are filled in by the caller once the node is
    /// accepted into the arena.
    pub fn successor(&self, movement: Move) -> Option<Self> {
        let board = self.board.apply_move(movement)?;
        Some(Self {
            id: 0,
            parent: Some(self.id),
            via: Some(movement),
            h: board.heuristic(),
            board,
            g: self.g + movement.cost(),
            creation_order: 0,
        })
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// The frontier ordering key: lower `f` first, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u32,
    pub creation_order: u64,
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f: node.f(),
            creation_order: node.creation_order,
        }
    }
}
