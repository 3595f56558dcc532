//! Fixed-depth alpha-beta search.
//!
//! Features:
//! - Minimax with alpha-beta pruning; White maximizes, Black minimizes
//! - MVV-LVA move ordering
//! - Late move reductions from a precomputed table
//! - Transposition table keyed by Zobrist hash
//! - Parallel root search over partitioned root moves (`smp`)

mod constants;
mod move_order;
mod params;
pub mod smp;

use std::sync::Arc;

use crate::tt::{BoundType, TranspositionTable, TtEntry, TtStats};
use crate::zobrist::ZobristKeys;

use super::{Color, Move, MoveSet, Position};

pub use constants::{CHECKMATE, SCORE_INFINITY};
pub use move_order::{lmr_reduction, mvv_lva, order_moves};
pub use params::{SearchConfig, DEFAULT_DEPTH};
pub use smp::{search_best_move, search_best_move_with, search_root_parallel};

/// Score and move chosen by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Score from White's point of view
    pub score: i32,
    /// Best move, `None` only when there were no moves to search
    pub best_move: Option<Move>,
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub cutoffs: u64,
    pub reductions: u64,
}

/// Everything a single-threaded search owns: keys, table, config, counters.
pub struct SearchContext {
    keys: Arc<ZobristKeys>,
    tt: TranspositionTable,
    config: SearchConfig,
    stats: SearchStats,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchContext {
    /// Context with fresh Zobrist keys.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_keys(config, Arc::new(ZobristKeys::new()))
    }

    /// Context sharing existing keys, e.g. with other workers.
    #[must_use]
    pub fn with_keys(config: SearchConfig, keys: Arc<ZobristKeys>) -> Self {
        SearchContext {
            keys,
            tt: TranspositionTable::new(config.tt_capacity),
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the last `search` call
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn tt_stats(&self) -> TtStats {
        self.tt.stats()
    }

    #[must_use]
    pub fn keys(&self) -> &Arc<ZobristKeys> {
        &self.keys
    }

    /// Search `moves` (a subset of the root's legal moves, or all of them)
    /// to `depth` plies.
    ///
    /// The position is restored before returning. When `moves` is empty the
    /// outcome carries the static evaluation and no move.
    pub fn search(&mut self, position: &mut Position, moves: &MoveSet, depth: u32) -> SearchOutcome {
        self.stats = SearchStats::default();
        let maximizing = position.side_to_move() == Color::White;
        log::debug!(
            "search start: depth {depth}, {} root moves, {} to move",
            moves.len(),
            position.side_to_move()
        );

        let (score, best_move) = self.alpha_beta(
            position,
            Some(moves),
            depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            maximizing,
        );

        log::debug!(
            "search done: depth {depth}, nodes {}, tt hits {}, cutoffs {}, score {score}, best {}",
            self.stats.nodes,
            self.stats.tt_hits,
            self.stats.cutoffs,
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
        );
        SearchOutcome { score, best_move }
    }

    /// Minimax with alpha-beta. `root_moves` is set only at the root.
    fn alpha_beta(
        &mut self,
        position: &mut Position,
        root_moves: Option<&MoveSet>,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.stats.nodes += 1;
        let key = self.keys.hash(position);

        if let Some(entry) = self.tt.probe(key, depth, alpha, beta).copied() {
            let fits_root = match root_moves {
                Some(moves) => entry.best_move.is_some_and(|m| moves.contains(&m)),
                None => true,
            };
            if fits_root {
                self.stats.tt_hits += 1;
                return (entry.score, entry.best_move);
            }
        }

        if depth == 0 {
            return (leaf_score(position, depth), None);
        }
        let moves = match root_moves {
            Some(moves) => moves.clone(),
            None => position.legal_moves(),
        };
        if moves.is_empty() {
            return (leaf_score(position, depth), None);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best_score = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
        let mut best_move = None;

        for (idx, m) in order_moves(&moves, maximizing).into_iter().enumerate() {
            let reduction = lmr_reduction(depth, idx, &self.config);
            if reduction > 0 {
                self.stats.reductions += 1;
            }
            let child_depth = (depth - 1).saturating_sub(reduction);

            position.apply_move(m);
            let (score, _) = self.alpha_beta(position, None, child_depth, alpha, beta, !maximizing);
            position.undo_move();

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(m);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(m);
                }
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let bound = if best_score <= alpha_orig {
            BoundType::UpperBound
        } else if best_score >= beta_orig {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt.store(
            key,
            TtEntry {
                depth,
                score: best_score,
                best_move,
                bound,
            },
        );

        (best_score, best_move)
    }
}

/// Static evaluation, with mates nudged by remaining depth so that a quicker
/// mate outranks a slower one.
fn leaf_score(position: &mut Position, depth: u32) -> i32 {
    let score = position.evaluate();
    let depth = depth as i32;
    if score >= CHECKMATE {
        score + depth
    } else if score <= -CHECKMATE {
        score - depth
    } else {
        score
    }
}
