//! Min-`f` frontier with an append-only visited set.
//!
//! Stale duplicates are not removed on push: several entries for the same
//! board may coexist, and the caller discards any popped entry whose key has
//! already been expanded (lazy deletion instead of decrease-key).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::node::FrontierKey;

/// Best-first frontier over arena indices.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest `f` first.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<(FrontierKey, usize)>>,
    visited: HashSet<String>,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the arena node `id` under `key`.
    pub fn push(&mut self, key: FrontierKey, id: usize) {
        self.heap.push(Reverse((key, id)));
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, id))| id)
    }

    /// Record a board key as expanded. Returns `false` if it already was.
    pub fn mark_visited(&mut self, key: String) -> bool {
        self.visited.insert(key)
    }

    pub fn is_visited(&self, key: &str) -> bool {
        self.visited.contains(key)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
