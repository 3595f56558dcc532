//! Rook activity evaluation.
//!
//! Evaluates rook placement on open files, the seventh rank, rook mobility
//! and rooks defending each other.

use crate::board::{Color, Piece, Position, Square};

use super::tables::{
    CONNECTED_ROOKS, ROOK_MOBILITY_PER_SQUARE, ROOK_ON_SEVENTH, ROOK_OPEN_FILE,
    ROOK_SEMI_OPEN_FILE,
};

impl Position {
    /// Rook activity, White minus Black.
    #[must_use]
    pub fn eval_rooks(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| color.sign() * self.rook_activity(color))
            .sum()
    }

    fn rook_activity(&self, color: Color) -> i32 {
        let rooks: Vec<Square> = self.board.squares_of(color, Piece::Rook).collect();
        let mut score = 0;

        for &sq in &rooks {
            let file_pawns = |owner: Color| {
                (0..8).any(|row| self.board.holds(Square(row, sq.col()), owner, Piece::Pawn))
            };
            match (file_pawns(color), file_pawns(color.opponent())) {
                (false, false) => score += ROOK_OPEN_FILE,
                (false, true) => score += ROOK_SEMI_OPEN_FILE,
                _ => {}
            }

            if sq.row() == color.seventh_row() {
                score += ROOK_ON_SEVENTH;
            }

            let reach = self.piece_reach(sq);
            let mobile = reach
                .iter()
                .filter(|&&to| !matches!(self.board.get(to), Some((c, _)) if c == color))
                .count() as i32;
            score += mobile * ROOK_MOBILITY_PER_SQUARE;
        }

        for (i, &a) in rooks.iter().enumerate() {
            for &b in &rooks[i + 1..] {
                if self.piece_reach(a).contains(&b) {
                    score += CONNECTED_ROOKS;
                }
            }
        }
        score
    }
}
