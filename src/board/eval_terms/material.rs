//! Material and piece-square evaluation.

use crate::board::{Color, Piece, Position, Square};

use super::tables::{BISHOP_PST, KING_PST, KNIGHT_PST, PAWN_PST, QUEEN_PST, ROOK_PST};

/// Piece-square bonus for `piece` of `color` on `sq`.
#[must_use]
pub fn pst_value(color: Color, piece: Piece, sq: Square) -> i32 {
    let table = match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
    };
    let row = match color {
        Color::White => sq.row(),
        Color::Black => 7 - sq.row(),
    };
    table[row][sq.col()]
}

impl Position {
    /// Material plus piece-square tables, White minus Black.
    #[must_use]
    pub fn eval_material(&self) -> i32 {
        self.board
            .pieces()
            .map(|(sq, color, piece)| color.sign() * (piece.value() + pst_value(color, piece, sq)))
            .sum()
    }
}
