//! Transposition table for caching search results.
//!
//! Entries are keyed by Zobrist hash. The table is bounded: once it grows
//! past its capacity a random eighth of the capacity is evicted.

use std::collections::HashMap;

use rand::prelude::*;
use rand::seq::index::sample;

use crate::board::Move;

/// Default number of entries kept before eviction starts
pub const DEFAULT_TT_CAPACITY: usize = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// A stored search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub depth: u32,
    pub score: i32,
    pub best_move: Option<Move>,
    pub bound: BoundType,
}

impl TtEntry {
    /// Usable for a search of `depth` with window `(alpha, beta)`?
    #[must_use]
    pub fn usable(&self, depth: u32, alpha: i32, beta: i32) -> bool {
        if self.depth < depth {
            return false;
        }
        match self.bound {
            BoundType::Exact => true,
            BoundType::LowerBound => self.score >= beta,
            BoundType::UpperBound => self.score <= alpha,
        }
    }
}

/// Counters for table activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TtStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub evictions: u64,
}

/// Bounded hash map from position key to search result.
#[derive(Debug)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    capacity: usize,
    rng: StdRng,
    stats: TtStats,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

impl TranspositionTable {
    /// Create a table holding up to `capacity` entries (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, StdRng::from_entropy())
    }

    /// Like `new` but with a seeded eviction sampler.
    #[must_use]
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, StdRng::seed_from_u64(seed))
    }

    fn with_rng(capacity: usize, rng: StdRng) -> Self {
        let capacity = capacity.max(1);
        TranspositionTable {
            entries: HashMap::with_capacity(capacity.min(1 << 16)),
            capacity,
            rng,
            stats: TtStats::default(),
        }
    }

    /// Raw lookup, ignoring depth and bounds.
    #[must_use]
    pub fn lookup(&self, key: u64) -> Option<&TtEntry> {
        self.entries.get(&key)
    }

    /// Lookup that only returns entries usable at `depth` inside
    /// `(alpha, beta)`.
    pub fn probe(&mut self, key: u64, depth: u32, alpha: i32, beta: i32) -> Option<&TtEntry> {
        self.stats.probes += 1;
        let entry = self
            .entries
            .get(&key)
            .filter(|e| e.usable(depth, alpha, beta))?;
        self.stats.hits += 1;
        Some(entry)
    }

    /// Insert or replace the entry for `key`.
    pub fn store(&mut self, key: u64, entry: TtEntry) {
        self.stats.stores += 1;
        self.entries.insert(key, entry);
        if self.entries.len() > self.capacity {
            self.evict();
        }
    }

    fn evict(&mut self) {
        let len = self.entries.len();
        let count = (self.capacity / 8).clamp(1, len);
        let keys: Vec<u64> = self.entries.keys().copied().collect();
        for idx in sample(&mut self.rng, len, count) {
            self.entries.remove(&keys[idx]);
        }
        self.stats.evictions += count as u64;
        log::trace!("tt: evicted {count} of {len} entries");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn stats(&self) -> TtStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TtStats::default();
    }
}
