//! Coordinate move notation ("e2e4").

use super::error::MoveParseError;
use super::{Move, Position, Square};

impl Position {
    /// Parse coordinate notation and match it against the legal moves.
    ///
    /// Castling is written as the king's move, e.g. `e1g1`.
    pub fn find_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let notation = notation.trim();
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }
        let parse = |s: &str| {
            s.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: notation.to_string(),
                })
        };
        let from = parse(&notation[..2])?;
        let to = parse(&notation[2..])?;

        self.legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse and play a sequence of coordinate moves.
    pub fn play_moves<'a, I>(&mut self, moves: I) -> Result<(), MoveParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for notation in moves {
            let m = self.find_move(notation)?;
            self.apply_move(m);
        }
        Ok(())
    }
}
