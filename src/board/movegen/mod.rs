//! Move generation.
//!
//! `pseudo_moves` enumerates every move of the side to move with pins
//! already enforced by the per-piece routines and king destinations screened
//! against attack. `legal_moves` then resolves checks and adds castling.

mod castling;
mod kings;
mod knights;
mod pawns;
mod pins;
mod sliders;

use super::{Color, Move, MoveSet, Piece, Position, Square};

pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Position {
    /// Moves of the side to move, ignoring whether they resolve a check.
    pub fn pseudo_moves(&mut self) -> MoveSet {
        self.refresh_pins_and_checks();
        let color = self.side_to_move;
        let origins: Vec<(Square, Piece)> = self
            .board
            .pieces()
            .filter(|&(_, c, _)| c == color)
            .map(|(sq, _, piece)| (sq, piece))
            .collect();

        let mut moves = MoveSet::new();
        for (from, piece) in origins {
            match piece {
                Piece::Pawn => self.pawn_moves(from, &mut moves),
                Piece::Knight => self.knight_moves(from, &mut moves),
                Piece::Bishop => self.slider_moves(from, &DIAGONALS, &mut moves),
                Piece::Rook => self.slider_moves(from, &ORTHOGONALS, &mut moves),
                Piece::Queen => self.slider_moves(from, &KING_STEPS, &mut moves),
                Piece::King => self.king_moves(from, &mut moves),
            }
        }
        moves
    }

    /// All legal moves for the side to move.
    ///
    /// Also updates the checkmate and stalemate flags: an empty result sets
    /// exactly one of them, a non-empty one clears both.
    pub fn legal_moves(&mut self) -> MoveSet {
        let pseudo = self.pseudo_moves();

        let moves: MoveSet = match self.checks.len() {
            0 => {
                let mut moves = pseudo;
                self.castle_moves(&mut moves);
                moves
            }
            1 => {
                let blocks = self.checks[0].blocking_squares();
                pseudo
                    .into_iter()
                    .filter(|m| m.piece() == Piece::King || blocks.contains(&m.to()))
                    .collect()
            }
            _ => pseudo
                .into_iter()
                .filter(|m| m.piece() == Piece::King)
                .collect(),
        };

        self.checkmate = moves.is_empty() && self.in_check;
        self.stalemate = moves.is_empty() && !self.in_check;
        moves
    }

    /// Legal moves that capture a piece.
    pub fn capture_moves(&mut self) -> MoveSet {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.is_capture())
            .collect()
    }

    /// Squares the piece on `from` attacks, regardless of pins or whose
    /// turn it is. Empty for an empty square.
    pub(crate) fn piece_reach(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.board.get(from) else {
            return Vec::new();
        };
        let steps = |offsets: &[(isize, isize)]| -> Vec<Square> {
            offsets
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .collect()
        };
        let rays = |directions: &[(isize, isize)]| -> Vec<Square> {
            let mut squares = Vec::new();
            for &(dr, dc) in directions {
                for sq in from.ray(dr, dc) {
                    squares.push(sq);
                    if !self.board.is_empty(sq) {
                        break;
                    }
                }
            }
            squares
        };
        match piece {
            Piece::Pawn => {
                let dir = color.pawn_direction();
                steps(&[(dir, -1), (dir, 1)])
            }
            Piece::Knight => steps(&KNIGHT_OFFSETS),
            Piece::King => steps(&KING_STEPS),
            Piece::Bishop => rays(&DIAGONALS),
            Piece::Rook => rays(&ORTHOGONALS),
            Piece::Queen => rays(&KING_STEPS),
        }
    }

    /// True if a piece of `color` could move onto `sq` by capture.
    ///
    /// Kings are never capture targets.
    #[inline]
    fn is_capture_target(&self, color: Color, sq: Square) -> bool {
        matches!(self.board.get(sq), Some((c, p)) if c != color && p != Piece::King)
    }

    #[inline]
    fn can_land_on(&self, color: Color, sq: Square) -> bool {
        self.board.is_empty(sq) || self.is_capture_target(color, sq)
    }

    #[inline]
    fn quiet_or_capture(&self, from: Square, to: Square) -> Option<Move> {
        let piece = self.board.get(from)?;
        Some(Move::with_pieces(from, to, piece, self.board.get(to), false))
    }
}
