//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_ai::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .expect("both kings present");
//! assert!(!position.in_check());
//! ```

use super::error::PositionError;
use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position`s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder with White to move and no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
        }
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, false);
        self
    }

    /// Build the position.
    ///
    /// Each side needs exactly one king, and the side that is not to move
    /// must not be in check.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut kings = [Square(0, 0); 2];
        for color in Color::BOTH {
            let squares: Vec<Square> = self.board.squares_of(color, Piece::King).collect();
            match squares.as_slice() {
                [] => return Err(PositionError::MissingKing { color }),
                [king] => kings[color.index()] = *king,
                _ => {
                    return Err(PositionError::TooManyKings {
                        color,
                        count: squares.len(),
                    })
                }
            }
        }

        let position = Position::from_parts(self.board, self.side_to_move, self.castling, kings);
        let waiting = self.side_to_move.opponent();
        if !position.find_pins_and_checks(waiting).checks.is_empty() {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }
        Ok(position)
    }
}
