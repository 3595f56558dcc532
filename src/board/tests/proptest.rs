//! Property-based tests using proptest.

use crate::board::{Color, Move, Position};
use crate::zobrist::ZobristKeys;
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves; returns the moves played.
fn random_line(position: &mut Position, seed: u64, plies: usize) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..plies {
        let moves: Vec<Move> = position.legal_moves().into_iter().collect();
        let Some(&m) = moves.choose(&mut rng) else {
            break;
        };
        position.make_move(m).expect("generated moves are consistent");
        played.push(m);
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: make_move followed by undo_move restores the position exactly
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let initial = position.clone();
        let initial_fen = position.to_fen();

        let played = random_line(&mut position, seed, num_moves);
        for m in played.iter().rev() {
            prop_assert_eq!(position.undo_move(), Some(*m));
        }

        prop_assert_eq!(position.to_fen(), initial_fen);
        prop_assert_eq!(position, initial);
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        random_line(&mut position, seed, num_moves);

        let mover = position.side_to_move();
        for m in position.legal_moves() {
            position.make_move(m).expect("consistent");
            prop_assert!(
                position.find_pins_and_checks(mover).checks.is_empty(),
                "{} leaves the king in check",
                m
            );
            position.undo_move();
        }
    }

    /// Property: checkmate and stalemate are exclusive and match the move list
    #[test]
    fn prop_terminal_flags_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        random_line(&mut position, seed, num_moves);

        let moves = position.legal_moves();
        prop_assert!(!(position.is_checkmate() && position.is_stalemate()));
        prop_assert_eq!(position.is_checkmate(), moves.is_empty() && position.in_check());
        prop_assert_eq!(position.is_stalemate(), moves.is_empty() && !position.in_check());
    }

    /// Property: the hash depends on the position, not the path to it
    #[test]
    fn prop_hash_matches_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let keys = ZobristKeys::from_seed(1);
        let mut position = Position::new();
        random_line(&mut position, seed, num_moves);

        let fresh: Position = position.to_fen().parse().expect("own fen parses");
        prop_assert_eq!(keys.hash(&fresh), keys.hash(&position));
        prop_assert_eq!(fresh.board(), position.board());
    }

    /// Property: both kings are always on the board where the cache says
    #[test]
    fn prop_king_cache_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        random_line(&mut position, seed, num_moves);
        for color in Color::BOTH {
            prop_assert_eq!(position.board().find_king(color), Some(position.king_square(color)));
        }
    }
}
