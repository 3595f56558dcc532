//! FEN import and export.
//!
//! Only the placement, side to move and castling fields carry meaning here.
//! En passant and the move clocks are accepted on input and written as
//! `- 0 1` on output.

use std::str::FromStr;

use super::error::FenError;
use super::{
    Board, CastlingRights, Color, Piece, Position, PositionBuilder, Square, CASTLE_BLACK_K,
    CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = PositionBuilder::new();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                builder = builder.piece(Square(row, col), color, piece);
                col += 1;
            }
            if col > 8 {
                return Err(FenError::TooManyFiles { rank, files: col });
            }
            if col < 8 {
                return Err(FenError::TooFewFiles { rank, files: col });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut bits = 0;
        if let Some(castling) = parts.get(2) {
            for c in castling.chars() {
                bits |= match c {
                    'K' => CASTLE_WHITE_K,
                    'Q' => CASTLE_WHITE_Q,
                    'k' => CASTLE_BLACK_K,
                    'q' => CASTLE_BLACK_Q,
                    '-' => 0,
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
            }
        }

        let position = builder
            .side_to_move(side)
            .castling(CastlingRights::from_u8(bits))
            .build()?;
        Ok(position)
    }

    /// Write the position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} - 0 1",
            placement(&self.board),
            match self.side_to_move {
                Color::White => 'w',
                Color::Black => 'b',
            },
            self.castling.to_fen()
        )
    }
}

fn placement(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8 {
        let mut empty = 0;
        for col in 0..8 {
            match board.get(Square(row, col)) {
                Some((color, piece)) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char(color));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if row < 7 {
            out.push('/');
        }
    }
    out
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
