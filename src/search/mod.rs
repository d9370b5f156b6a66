pub mod alphabeta;
pub mod eval;
pub mod scheduler;

use crate::board::Move;
use serde::Serialize;

/// Default ply horizon: the root move plus three replies.
pub const DEFAULT_HORIZON: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Depth at which nodes are scored statically. Root tasks start at depth 1.
    pub horizon: u32,
    /// Worker threads used by the scheduler.
    pub threads: usize,
    /// Alpha-beta cutoffs; disabling only changes the node count.
    pub use_pruning: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { horizon: DEFAULT_HORIZON, threads: 1, use_pruning: true }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}
