//! Parallel root search.
//!
//! The root moves are dealt round-robin to up to `threads` workers. Each
//! worker searches its subset on a private clone of the position with its
//! own transposition table; only the Zobrist keys are shared, read-only.
//! Results are reduced in worker order: max for White, min for Black, ties
//! going to the lower worker index.

use std::panic;
use std::sync::Arc;
use std::thread::{self, ScopedJoinHandle};

use crate::board::{Color, Move, MoveSet, Position};
use crate::zobrist::ZobristKeys;

use super::{SearchConfig, SearchContext, SearchOutcome};

/// Search thread stack size (32 MB to handle deep recursion)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Result from a single worker thread
#[derive(Debug, Clone, Copy)]
pub struct WorkerResult {
    pub worker_id: usize,
    pub outcome: SearchOutcome,
    pub nodes: u64,
}

enum Pending<'scope> {
    Running(ScopedJoinHandle<'scope, WorkerResult>),
    Finished(WorkerResult),
}

/// Best move for the side to move in `position`, searched to `depth`.
///
/// `moves` are the position's legal moves. Returns `None` when it is empty.
#[must_use]
pub fn search_best_move(position: &Position, moves: &MoveSet, depth: u32) -> Option<Move> {
    search_best_move_with(position, moves, &SearchConfig::default().depth(depth))
}

/// Like `search_best_move` with an explicit configuration.
///
/// A depth of 0 is searched at depth 1 so that a move is always chosen.
#[must_use]
pub fn search_best_move_with(
    position: &Position,
    moves: &MoveSet,
    config: &SearchConfig,
) -> Option<Move> {
    let config = config.depth(config.depth.max(1));
    search_root_parallel(position, moves, &config).best_move
}

/// Deal `moves` round-robin into at most `workers` non-empty subsets.
#[must_use]
pub fn partition_moves(moves: &MoveSet, workers: usize) -> Vec<MoveSet> {
    let count = workers.clamp(1, moves.len().max(1));
    let mut subsets = vec![MoveSet::new(); count];
    for (idx, m) in moves.iter().enumerate() {
        subsets[idx % count].insert(*m);
    }
    subsets.retain(|s| !s.is_empty());
    subsets
}

/// Run the partitioned root search and reduce the worker results.
pub fn search_root_parallel(
    position: &Position,
    moves: &MoveSet,
    config: &SearchConfig,
) -> SearchOutcome {
    if moves.is_empty() {
        let mut scratch = position.clone();
        return SearchOutcome {
            score: scratch.evaluate(),
            best_move: None,
        };
    }

    let keys = Arc::new(ZobristKeys::new());
    let subsets = partition_moves(moves, config.threads);
    log::debug!(
        "root search: {} moves over {} workers at depth {}",
        moves.len(),
        subsets.len(),
        config.depth
    );

    let results: Vec<WorkerResult> = if subsets.len() == 1 {
        vec![run_worker(0, position, &subsets[0], Arc::clone(&keys), config)]
    } else {
        thread::scope(|scope| {
            let pending: Vec<Pending<'_>> = subsets
                .iter()
                .enumerate()
                .map(|(worker_id, subset)| {
                    let worker_keys = Arc::clone(&keys);
                    let spawned = thread::Builder::new()
                        .name(format!("search-{worker_id}"))
                        .stack_size(SEARCH_STACK_SIZE)
                        .spawn_scoped(scope, move || {
                            run_worker(worker_id, position, subset, worker_keys, config)
                        });
                    match spawned {
                        Ok(handle) => Pending::Running(handle),
                        Err(err) => {
                            log::debug!("search-{worker_id}: spawn failed ({err}), running inline");
                            Pending::Finished(run_worker(
                                worker_id,
                                position,
                                subset,
                                Arc::clone(&keys),
                                config,
                            ))
                        }
                    }
                })
                .collect();

            pending
                .into_iter()
                .map(|p| match p {
                    Pending::Running(handle) => handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload)),
                    Pending::Finished(result) => result,
                })
                .collect()
        })
    };

    reduce_results(&results, position.side_to_move())
}

fn run_worker(
    worker_id: usize,
    position: &Position,
    subset: &MoveSet,
    keys: Arc<ZobristKeys>,
    config: &SearchConfig,
) -> WorkerResult {
    let mut local = position.clone();
    let mut context = SearchContext::with_keys(*config, keys);
    let outcome = context.search(&mut local, subset, config.depth);
    WorkerResult {
        worker_id,
        outcome,
        nodes: context.stats().nodes,
    }
}

/// Pick the best worker outcome for `side`; earlier workers win ties.
fn reduce_results(results: &[WorkerResult], side: Color) -> SearchOutcome {
    let mut best: Option<&WorkerResult> = None;
    for result in results.iter().filter(|r| r.outcome.best_move.is_some()) {
        let better = match best {
            None => true,
            Some(current) => match side {
                Color::White => result.outcome.score > current.outcome.score,
                Color::Black => result.outcome.score < current.outcome.score,
            },
        };
        if better {
            best = Some(result);
        }
    }
    let total_nodes: u64 = results.iter().map(|r| r.nodes).sum();
    log::debug!(
        "root search reduced: {} workers, {total_nodes} nodes, chose worker {}",
        results.len(),
        best.map_or(0, |r| r.worker_id)
    );
    best.map_or(
        SearchOutcome {
            score: 0,
            best_move: None,
        },
        |r| r.outcome,
    )
}
