//! Zobrist hashing for chess positions.
//!
//! A position hashes to the XOR of one key per (piece, color, square) on the
//! board, a key when White is to move, and one key per castling right held.
//! The hash depends only on the current position, never on how it was
//! reached.

use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Position, Square};

/// Random keys for Zobrist hashing.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    // piece_keys[piece][color][square]
    piece_keys: [[[u64; 64]; 2]; 6],
    white_to_move_key: u64,
    // one key per castling bit: WK, WQ, BK, BQ
    castling_keys: [u64; 4],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Keys drawn from an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut StdRng::from_entropy())
    }

    /// Reproducible keys from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: &mut StdRng) -> Self {
        let mut piece_keys = [[[0; 64]; 2]; 6];
        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        let white_to_move_key = rng.gen();
        let mut castling_keys = [0; 4];
        for key in &mut castling_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            white_to_move_key,
            castling_keys,
        }
    }

    /// Key for one piece on one square
    #[inline]
    #[must_use]
    pub fn piece_key(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.row() * 8 + sq.col()]
    }

    /// Key XORed in when White is to move
    #[inline]
    #[must_use]
    pub fn side_key(&self) -> u64 {
        self.white_to_move_key
    }

    /// Combined key for a set of castling rights
    #[must_use]
    pub fn castling_key(&self, rights: CastlingRights) -> u64 {
        self.castling_keys
            .iter()
            .enumerate()
            .filter(|(bit, _)| rights.as_u8() & (1 << bit) != 0)
            .fold(0, |acc, (_, key)| acc ^ key)
    }

    /// Hash a position from scratch.
    #[must_use]
    pub fn hash(&self, position: &Position) -> u64 {
        let mut hash = position
            .board()
            .pieces()
            .fold(0, |acc, (sq, color, piece)| acc ^ self.piece_key(color, piece, sq));
        if position.side_to_move() == Color::White {
            hash ^= self.white_to_move_key;
        }
        hash ^ self.castling_key(position.castling_rights())
    }
}
