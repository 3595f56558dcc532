use crate::board::{Piece, Position, Square};

use super::tables::CENTER_ATTACK;

/// The sixteen squares c3-f6.
fn is_wide_center(sq: Square) -> bool {
    (2..=5).contains(&sq.row()) && (2..=5).contains(&sq.col())
}

impl Position {
    /// Attacks on the wide center by every non-king piece, weighted by the
    /// attacker's value, White minus Black.
    #[must_use]
    pub fn eval_center_control(&self) -> i32 {
        self.board
            .pieces()
            .filter(|&(_, _, piece)| piece != Piece::King)
            .map(|(sq, color, piece)| {
                let hits = self
                    .piece_reach(sq)
                    .into_iter()
                    .filter(|&to| is_wide_center(to))
                    .count() as i32;
                color.sign() * hits * piece.pawn_units() * CENTER_ATTACK
            })
            .sum()
    }
}
