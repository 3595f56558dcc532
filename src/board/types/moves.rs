//! Move type and move set.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::state::Board;

/// A fully described move.
///
/// The move carries the moving piece and whatever it captures, so it can be
/// undone without consulting the board. Equality, hashing and ordering cover
/// all five fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: (Color, Piece),
    captured: Option<(Color, Piece)>,
    castling: bool,
}

/// Set of legal moves.
///
/// An ordered set keeps iteration deterministic across runs.
pub type MoveSet = BTreeSet<Move>;

impl Move {
    /// Build a move by reading the mover and the captured piece off `board`.
    ///
    /// Returns `None` when `from` is empty.
    #[must_use]
    pub fn new(from: Square, to: Square, board: &Board, castling: bool) -> Option<Self> {
        let piece = board.get(from)?;
        Some(Move {
            from,
            to,
            piece,
            captured: board.get(to),
            castling,
        })
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with_pieces(
        from: Square,
        to: Square,
        piece: (Color, Piece),
        captured: Option<(Color, Piece)>,
        castling: bool,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            castling,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The moving piece kind
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece.1
    }

    /// Color of the side making the move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.piece.0
    }

    /// The moving piece with its color
    #[inline]
    #[must_use]
    pub const fn moved(self) -> (Color, Piece) {
        self.piece
    }

    /// The captured piece, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<(Color, Piece)> {
        self.captured
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castling
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.castling && self.to.1 > self.from.1
    }

    /// Rook source and destination squares for a castling move.
    ///
    /// Kingside the rook jumps from the corner beside the king's landing
    /// square to the square it crossed; queenside from two past it.
    #[must_use]
    pub fn castling_rook_squares(self) -> Option<(Square, Square)> {
        if !self.castling {
            return None;
        }
        let to = self.to;
        if self.is_castle_kingside() {
            Some((to.offset(0, 1)?, to.offset(0, -1)?))
        } else {
            Some((to.offset(0, -2)?, to.offset(0, 1)?))
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let m = Move::with_pieces(
            Square(6, 4),
            Square(4, 4),
            (Color::White, Piece::Pawn),
            None,
            false,
        );
        assert_eq!(m.to_string(), "e2e4");
        assert!(!m.is_capture());
    }

    #[test]
    fn test_castling_rook_squares() {
        let king = (Color::White, Piece::King);
        let short = Move::with_pieces(Square(7, 4), Square(7, 6), king, None, true);
        assert_eq!(
            short.castling_rook_squares(),
            Some((Square(7, 7), Square(7, 5)))
        );
        let long = Move::with_pieces(Square(7, 4), Square(7, 2), king, None, true);
        assert_eq!(
            long.castling_rook_squares(),
            Some((Square(7, 0), Square(7, 3)))
        );
        let quiet = Move::with_pieces(Square(7, 4), Square(7, 5), king, None, false);
        assert_eq!(quiet.castling_rook_squares(), None);
    }

    #[test]
    fn test_moves_differing_in_capture_are_distinct() {
        let piece = (Color::White, Piece::Rook);
        let a = Move::with_pieces(Square(7, 0), Square(0, 0), piece, None, false);
        let b = Move::with_pieces(
            Square(7, 0),
            Square(0, 0),
            piece,
            Some((Color::Black, Piece::Rook)),
            false,
        );
        assert_ne!(a, b);
        let set: MoveSet = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
