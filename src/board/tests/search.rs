//! Search algorithm tests.
//!
//! Tests for alpha-beta, move ordering, the transposition table and the
//! parallel root.

use std::sync::Arc;

use crate::board::search::smp::partition_moves;
use crate::board::search::{search_root_parallel, SCORE_INFINITY};
use crate::board::{
    search_best_move, search_best_move_with, Position, SearchConfig, SearchContext, CHECKMATE,
};
use crate::zobrist::ZobristKeys;

fn parse(fen: &str) -> Position {
    fen.parse().expect("valid fen")
}

fn single_thread(depth: u32) -> SearchConfig {
    SearchConfig::default().depth(depth).threads(1)
}

// ============================================================================
// Alpha-beta search tests
// ============================================================================

#[test]
fn test_depth_one_takes_hanging_queen() {
    let mut position = parse("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let moves = position.legal_moves();
    let best = search_best_move(&position, &moves, 1).expect("moves exist");
    assert_eq!(best.to_string(), "d2d5");
}

#[test]
fn test_black_takes_hanging_rook() {
    let mut position = parse("4k3/8/8/3r4/8/8/8/3RK3 b - - 0 1");
    let moves = position.legal_moves();
    let best = search_best_move_with(&position, &moves, &single_thread(1)).expect("moves exist");
    assert_eq!(best.to_string(), "d5d1");
}

#[test]
fn test_finds_mate_in_one() {
    // Back-rank mate with Ra8
    let mut position = parse("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let moves = position.legal_moves();
    let mut ctx = SearchContext::new(single_thread(2));
    let outcome = ctx.search(&mut position, &moves, 2);
    assert_eq!(outcome.best_move.map(|m| m.to_string()), Some("a1a8".to_string()));
    assert!(outcome.score >= CHECKMATE, "score {}", outcome.score);
}

#[test]
fn test_black_finds_mate_in_one() {
    let mut position = Position::new();
    position.play_moves(["f2f3", "e7e5", "g2g4"]).expect("legal");
    let moves = position.legal_moves();
    let best = search_best_move_with(&position, &moves, &single_thread(2)).expect("moves exist");
    assert_eq!(best.to_string(), "d8h4");
}

#[test]
fn test_search_restores_position() {
    let mut position = Position::new();
    position.play_moves(["e2e4", "e7e5"]).expect("legal");
    let before = position.clone();
    let moves = position.legal_moves();
    let mut ctx = SearchContext::new(single_thread(3));
    ctx.search(&mut position, &moves, 3);
    assert_eq!(position.to_fen(), before.to_fen());
    assert_eq!(position.move_history(), before.move_history());
}

#[test]
fn test_empty_root_returns_none() {
    let mut mated = Position::new();
    mated.play_moves(["f2f3", "e7e5", "g2g4", "d8h4"]).expect("legal");
    let moves = mated.legal_moves();
    assert!(moves.is_empty());
    assert_eq!(search_best_move(&mated, &moves, 3), None);

    let outcome = search_root_parallel(&mated, &moves, &single_thread(3));
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, -CHECKMATE);
}

#[test]
fn test_depth_zero_still_picks_a_move() {
    let mut position = parse("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let moves = position.legal_moves();
    let best = search_best_move(&position, &moves, 0).expect("moves exist");
    assert_eq!(best.to_string(), "d2d5");

    let mut start = Position::new();
    let start_moves = start.legal_moves();
    let best = search_best_move_with(&start, &start_moves, &single_thread(0));
    assert!(best.is_some_and(|m| start_moves.contains(&m)));
}

#[test]
fn test_single_move_is_returned() {
    // The king has exactly one legal move
    let mut position = parse("7k/8/8/8/8/8/8/K5R1 b - - 0 1");
    let moves = position.legal_moves();
    assert_eq!(moves.len(), 1);
    let best = search_best_move(&position, &moves, 2);
    assert_eq!(best, moves.iter().next().copied());
}

#[test]
fn test_stats_and_tt_are_populated() {
    let mut position = Position::new();
    let moves = position.legal_moves();
    let mut ctx = SearchContext::new(single_thread(3));
    ctx.search(&mut position, &moves, 3);

    let stats = ctx.stats();
    assert!(stats.nodes > 20);
    assert!(stats.cutoffs > 0);
    assert!(ctx.tt_stats().stores > 0);
}

#[test]
fn test_repeated_search_uses_tt() {
    let mut position = Position::new();
    let moves = position.legal_moves();
    let mut ctx = SearchContext::new(single_thread(3));
    let first = ctx.search(&mut position, &moves, 3);
    let second = ctx.search(&mut position, &moves, 3);
    assert_eq!(first.score, second.score);
    assert!(ctx.stats().tt_hits > 0);
}

#[test]
fn test_score_within_bounds() {
    let mut position = Position::new();
    let moves = position.legal_moves();
    let mut ctx = SearchContext::new(single_thread(2));
    let outcome = ctx.search(&mut position, &moves, 2);
    assert!(outcome.score.abs() < SCORE_INFINITY);
    assert!(outcome.best_move.is_some_and(|m| moves.contains(&m)));
}

// ============================================================================
// Parallel root tests
// ============================================================================

#[test]
fn test_partition_is_round_robin() {
    let mut position = Position::new();
    let moves = position.legal_moves();
    let subsets = partition_moves(&moves, 3);
    assert_eq!(subsets.len(), 3);
    assert_eq!(subsets.iter().map(|s| s.len()).collect::<Vec<_>>(), vec![7, 7, 6]);

    let mut union: Vec<_> = subsets.iter().flatten().copied().collect();
    union.sort();
    assert_eq!(union, moves.iter().copied().collect::<Vec<_>>());
}

#[test]
fn test_partition_never_exceeds_moves() {
    let mut position = parse("7k/8/8/8/8/8/8/K5R1 b - - 0 1");
    let moves = position.legal_moves();
    assert_eq!(partition_moves(&moves, 8).len(), 1);
}

#[test]
fn test_threads_agree_on_forced_capture() {
    let mut position = parse("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let moves = position.legal_moves();
    let one = search_best_move_with(&position, &moves, &single_thread(2));
    let many = search_best_move_with(&position, &moves, &SearchConfig::default().depth(2).threads(4));
    assert_eq!(one, many);
    assert_eq!(one.map(|m| m.to_string()), Some("d2d5".to_string()));
}

#[test]
fn test_parallel_matches_sequential_score() {
    let mut position = Position::new();
    position.play_moves(["e2e4", "d7d5"]).expect("legal");
    let moves = position.legal_moves();

    let mut ctx = SearchContext::with_keys(single_thread(2), Arc::new(ZobristKeys::from_seed(3)));
    let sequential = ctx.search(&mut position.clone(), &moves, 2);
    let parallel = search_root_parallel(&position, &moves, &SearchConfig::default().depth(2).threads(3));
    assert_eq!(sequential.score, parallel.score);
}
