//! King safety evaluation.
//!
//! Two parts: the unpinned friendly material on the three squares directly
//! in front of the king, and the number of squares the king could step to
//! without walking into an attack.

use crate::board::{Color, Position, Square};

use super::tables::{KING_SAFE_SQUARE, KING_SHIELD_PER_UNIT};
use crate::board::movegen::KING_STEPS;

impl Position {
    /// King safety, White minus Black.
    #[must_use]
    pub fn eval_king_safety(&mut self) -> i32 {
        let white = self.king_safety(Color::White);
        let black = self.king_safety(Color::Black);
        white - black
    }

    fn king_safety(&mut self, color: Color) -> i32 {
        let king = self.king_square(color);
        let pinned: Vec<Square> = self
            .find_pins_and_checks(color)
            .pins
            .iter()
            .map(|pin| pin.square)
            .collect();

        let shield: i32 = (-1..=1)
            .filter_map(|dc| king.offset(color.pawn_direction(), dc))
            .filter(|sq| !pinned.contains(sq))
            .filter_map(|sq| match self.board.get(sq) {
                Some((owner, piece)) if owner == color => Some(piece.pawn_units()),
                _ => None,
            })
            .sum();

        let steps: Vec<Square> = KING_STEPS
            .iter()
            .filter_map(|&(dr, dc)| king.offset(dr, dc))
            .filter(|&sq| !matches!(self.board.get(sq), Some((owner, _)) if owner == color))
            .collect();
        let safe = steps
            .into_iter()
            .filter(|&sq| !self.king_attacked_on(color, sq))
            .count() as i32;

        shield * KING_SHIELD_PER_UNIT + safe * KING_SAFE_SQUARE
    }
}
