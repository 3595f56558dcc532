//! Applying and reverting moves.

use super::error::MoveError;
use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Play `m` after checking it matches the board and is legal.
    ///
    /// The move must belong to the side to move, its source must hold the
    /// recorded piece, and its destination the recorded capture (never a
    /// king or a friendly piece). A castling move also needs its rook in the
    /// corner and a clear landing square for it. A move that fits the board
    /// but is not in `legal_moves` fails with `MoveError::Illegal`. On error
    /// the board is unchanged.
    pub fn make_move(&mut self, m: Move) -> Result<(), MoveError> {
        self.check_consistent(m)?;
        if !self.legal_moves().contains(&m) {
            return Err(MoveError::Illegal { mv: m });
        }
        self.apply_move(m);
        Ok(())
    }

    /// Unchecked `make_move` for moves known to come from `legal_moves`.
    pub(crate) fn apply_move(&mut self, m: Move) {
        let color = m.color();
        self.rights_log.push(self.castling);

        self.board.set(m.from(), None);
        self.board.set(m.to(), Some(m.moved()));

        match m.piece() {
            Piece::King => {
                self.kings[color.index()] = m.to();
                self.castling.remove_color(color);
            }
            Piece::Rook => self.revoke_corner(color, m.from()),
            _ => {}
        }
        if let Some((rook_from, rook_to)) = m.castling_rook_squares() {
            let rook = self.board.take(rook_from);
            self.board.set(rook_to, rook);
        }
        if let Some((victim, Piece::Rook)) = m.captured() {
            self.revoke_corner(victim, m.to());
        }

        self.move_log.push(m);
        self.side_to_move = color.opponent();
        self.checkmate = false;
        self.stalemate = false;
        self.refresh_pins_and_checks();
    }

    /// Take back the last move. Returns `None` and does nothing when no move
    /// has been played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.move_log.pop()?;
        let color = m.color();

        if let Some((rook_from, rook_to)) = m.castling_rook_squares() {
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }
        self.board.set(m.from(), Some(m.moved()));
        self.board.set(m.to(), m.captured());
        if m.piece() == Piece::King {
            self.kings[color.index()] = m.from();
        }
        if let Some(rights) = self.rights_log.pop() {
            self.castling = rights;
        }

        self.side_to_move = color;
        self.checkmate = false;
        self.stalemate = false;
        self.refresh_pins_and_checks();
        Some(m)
    }

    fn revoke_corner(&mut self, color: Color, sq: Square) {
        let row = color.back_row();
        if sq == Square(row, 0) {
            self.castling.remove(color, false);
        } else if sq == Square(row, 7) {
            self.castling.remove(color, true);
        }
    }

    fn check_consistent(&self, m: Move) -> Result<(), MoveError> {
        if m.color() != self.side_to_move {
            return Err(MoveError::WrongSide {
                mover: m.color(),
                to_move: self.side_to_move,
            });
        }
        let found = self.board.get(m.from());
        if found != Some(m.moved()) {
            return Err(MoveError::PieceMismatch {
                square: m.from(),
                expected: m.piece(),
                found: found.map(|(_, p)| p),
            });
        }
        match m.captured() {
            Some((_, Piece::King)) => return Err(MoveError::KingCapture { square: m.to() }),
            Some((victim, _)) if victim == m.color() => {
                return Err(MoveError::OwnPieceCapture { square: m.to() })
            }
            _ => {}
        }
        let target = self.board.get(m.to());
        if target != m.captured() {
            return Err(MoveError::CaptureMismatch {
                square: m.to(),
                expected: m.captured().map(|(_, p)| p),
                found: target.map(|(_, p)| p),
            });
        }
        if let Some((rook_from, rook_to)) = m.castling_rook_squares() {
            let rook_home = self.board.holds(rook_from, m.color(), Piece::Rook);
            if m.piece() != Piece::King || !rook_home || !self.board.is_empty(rook_to) {
                return Err(MoveError::InvalidCastle { square: rook_from });
            }
        }
        Ok(())
    }
}
