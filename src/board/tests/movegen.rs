//! Legal move generation tests.

use crate::board::{Color, Piece, Position, Square};

fn move_strings(position: &mut Position) -> Vec<String> {
    position.legal_moves().iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_startpos_has_twenty_moves() {
    let mut position = Position::new();
    let moves = position.legal_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| m.piece() == Piece::Pawn).count(), 16);
    assert_eq!(moves.iter().filter(|m| m.piece() == Piece::Knight).count(), 4);
    assert!(moves.iter().all(|m| m.color() == Color::White));
}

#[test]
fn test_black_reply_count() {
    let mut position = Position::new();
    position.play_moves(["e2e4"]).expect("legal");
    assert_eq!(position.side_to_move(), Color::Black);
    assert_eq!(position.legal_moves().len(), 20);
}

#[test]
fn test_bishop_development_needs_pawn_move() {
    let mut position = Position::new();
    assert!(position.find_move("f1c4").is_err());
    position.play_moves(["e2e4", "e7e5"]).expect("legal");
    let m = position.find_move("f1c4").expect("bishop can reach c4");
    assert_eq!(m.piece(), Piece::Bishop);
    assert!(!m.is_capture());
}

#[test]
fn test_capture_moves_are_legal_captures() {
    let mut position = Position::new();
    assert!(position.capture_moves().is_empty());

    position.play_moves(["e2e4", "d7d5"]).expect("legal");
    let captures: Vec<String> = position.capture_moves().iter().map(|m| m.to_string()).collect();
    assert_eq!(captures, vec!["e4d5"]);

    // The pinned knight cannot take
    let mut pinned: Position = "4k3/4r3/8/3p4/8/4N3/8/4K3 w - - 0 1".parse().expect("fen");
    assert!(pinned.capture_moves().is_empty());
}

#[test]
fn test_knight_in_corner() {
    let mut position: Position = "4k3/8/8/8/8/8/8/N3K3 w - - 0 1".parse().expect("fen");
    let moves = move_strings(&mut position);
    assert!(moves.contains(&"a1b3".to_string()));
    assert!(moves.contains(&"a1c2".to_string()));
    assert_eq!(moves.len(), 7, "moves: {moves:?}");
}

#[test]
fn test_pawn_push_blocked() {
    let mut position: Position = "4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1".parse().expect("fen");
    let pawn_moves: Vec<String> = position
        .legal_moves()
        .iter()
        .filter(|m| m.piece() == Piece::Pawn)
        .map(|m| m.to_string())
        .collect();
    assert_eq!(pawn_moves, vec!["e2e3".to_string()]);
}

#[test]
fn test_pawn_captures_diagonally_only() {
    let mut position: Position = "4k3/8/8/8/8/3p1p2/4P3/4K3 w - - 0 1".parse().expect("fen");
    let captures: Vec<String> = position
        .legal_moves()
        .iter()
        .filter(|m| m.piece() == Piece::Pawn && m.is_capture())
        .map(|m| m.to_string())
        .collect();
    assert_eq!(captures, vec!["e2d3".to_string(), "e2f3".to_string()]);
}

#[test]
fn test_king_is_never_a_capture_target() {
    // White queen eyes the black king, but it is White's move
    let mut position: Position = "4k3/8/8/8/8/8/8/Q3K3 w - - 0 1".parse().expect("fen");
    let mut black_to_move: Position = "4k3/8/8/8/8/8/8/Q3K3 b - - 0 1".parse().expect("fen");
    assert!(!position.in_check());
    assert!(!black_to_move.in_check());
    assert!(position
        .legal_moves()
        .iter()
        .all(|m| m.captured().map(|(_, p)| p) != Some(Piece::King)));
    assert!(!black_to_move.legal_moves().is_empty());
}

#[test]
fn test_king_cannot_step_next_to_king() {
    let mut position: Position = "8/8/8/3k4/8/3K4/8/8 w - - 0 1".parse().expect("fen");
    let moves = move_strings(&mut position);
    for forbidden in ["d3c4", "d3d4", "d3e4"] {
        assert!(!moves.contains(&forbidden.to_string()), "{forbidden} in {moves:?}");
    }
    assert_eq!(moves.len(), 5);
}

#[test]
fn test_legal_moves_do_not_change_the_board() {
    let mut position = Position::new();
    position.play_moves(["e2e4", "d7d5", "f1b5"]).expect("legal");
    let before = position.board().clone();
    let side = position.side_to_move();
    let _ = position.legal_moves();
    assert_eq!(position.board(), &before);
    assert_eq!(position.side_to_move(), side);
    assert_eq!(position.king_square(Color::Black), Square(0, 4));
}
