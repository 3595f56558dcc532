use std::thread;

use crate::tt::DEFAULT_TT_CAPACITY;

/// Default fixed search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fixed depth of the search in plies
    pub depth: u32,
    /// Maximum number of root worker threads
    pub threads: usize,
    /// Entries per transposition table before eviction
    pub tt_capacity: usize,
    /// Shallowest remaining depth at which late moves are reduced
    pub lmr_min_depth: u32,
    /// Index (0-based) of the first move eligible for reduction
    pub lmr_move_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            threads: default_threads(),
            tt_capacity: DEFAULT_TT_CAPACITY,
            lmr_min_depth: 3,
            lmr_move_threshold: 4,
        }
    }
}

/// One worker per core, leaving one core free.
fn default_threads() -> usize {
    thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(1)
        .max(1)
}

impl SearchConfig {
    /// Set search depth
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set worker thread count (at least 1)
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Set transposition table capacity
    #[must_use]
    pub fn tt_capacity(mut self, entries: usize) -> Self {
        self.tt_capacity = entries.max(1);
        self
    }

    /// Set LMR thresholds
    #[must_use]
    pub fn lmr(mut self, min_depth: u32, move_threshold: usize) -> Self {
        self.lmr_min_depth = min_depth;
        self.lmr_move_threshold = move_threshold;
        self
    }
}
