//! Search tests to verify the engine finds correct moves in various positions.

use chess_ai::board::{search_best_move, search_best_move_with, Position, SearchConfig};

fn best_move(fen: &str, depth: u32) -> Option<String> {
    let mut position: Position = fen.parse().expect("valid fen");
    let moves = position.legal_moves();
    search_best_move(&position, &moves, depth).map(|m| m.to_string())
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let best = best_move("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 2);
    assert_eq!(best.as_deref(), Some("e1e8"), "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds a smothered mate
#[test]
fn finds_smothered_mate() {
    let best = best_move("6rk/6pp/8/6N1/8/8/8/6K1 w - - 0 1", 2);
    assert_eq!(best.as_deref(), Some("g5f7"));
}

/// Test that the engine captures free material
#[test]
fn captures_free_piece() {
    let best = best_move("4k3/8/8/8/8/1b6/8/1R2K3 w - - 0 1", 2);
    assert_eq!(best.as_deref(), Some("b1b3"), "Should take the loose bishop");
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    let best = best_move("7k/8/8/8/8/8/8/K5R1 b - - 0 1", 3);
    assert_eq!(best.as_deref(), Some("h8h7"));
}

/// Test that search returns None for checkmate position
#[test]
fn no_move_in_checkmate() {
    let mut position: Position = "rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1"
        .parse()
        .expect("valid fen");
    let moves = position.legal_moves();
    assert!(position.is_checkmate());
    assert_eq!(search_best_move(&position, &moves, 3), None);
}

/// Test that stalemate is correctly identified
#[test]
fn identifies_stalemate() {
    let mut position: Position = "k7/8/1QK5/8/8/8/8/8 b - - 0 1".parse().expect("valid fen");
    let moves = position.legal_moves();
    assert!(moves.is_empty());
    assert!(position.is_stalemate());
    assert_eq!(position.evaluate(), 0);
    assert_eq!(search_best_move(&position, &moves, 2), None);
}

/// Test evaluation is symmetric
#[test]
fn evaluation_symmetry() {
    let mut after_e4: Position = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        .parse()
        .expect("valid fen");
    let mut mirrored: Position = "rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .expect("valid fen");
    assert_eq!(after_e4.evaluate(), -mirrored.evaluate());
}

/// Test that positions with material advantage evaluate correctly
#[test]
fn evaluation_material_advantage() {
    let mut white_up: Position = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .expect("valid fen");
    let mut black_up: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1"
        .parse()
        .expect("valid fen");
    assert!(white_up.evaluate() > 500);
    assert!(black_up.evaluate() < -500);
}

/// Test that search completes at a reasonable depth from the start
#[test]
fn search_completes_at_depth_3() {
    let mut position = Position::new();
    let moves = position.legal_moves();
    let config = SearchConfig::default().depth(3).threads(4);
    let best = search_best_move_with(&position, &moves, &config).expect("start has moves");
    assert!(moves.contains(&best));
}

/// Test that repeated parallel searches agree
#[test]
fn parallel_search_is_deterministic() {
    let mut position = Position::new();
    position.play_moves(["e2e4", "e7e5", "g1f3"]).expect("legal");
    let moves = position.legal_moves();
    let config = SearchConfig::default().depth(2).threads(3);
    let first = search_best_move_with(&position, &moves, &config);
    let second = search_best_move_with(&position, &moves, &config);
    assert_eq!(first, second);
}
