use super::super::{Move, MoveSet, Piece, Position, Square};

struct CastleLane {
    kingside: bool,
    rook_col: usize,
    between: &'static [usize],
    transit_col: usize,
    landing_col: usize,
}

const LANES: [CastleLane; 2] = [
    CastleLane {
        kingside: true,
        rook_col: 7,
        between: &[5, 6],
        transit_col: 5,
        landing_col: 6,
    },
    CastleLane {
        kingside: false,
        rook_col: 0,
        between: &[1, 2, 3],
        transit_col: 3,
        landing_col: 2,
    },
];

impl Position {
    /// Castling moves for the side to move; none while in check.
    pub(crate) fn castle_moves(&mut self, moves: &mut MoveSet) {
        let color = self.side_to_move;
        if self.in_check {
            return;
        }
        let row = color.back_row();
        let home = Square(row, 4);
        if self.king_square(color) != home {
            return;
        }

        for lane in &LANES {
            if !self.castling.has(color, lane.kingside)
                || !self.board.holds(Square(row, lane.rook_col), color, Piece::Rook)
                || lane
                    .between
                    .iter()
                    .any(|&col| !self.board.is_empty(Square(row, col)))
            {
                continue;
            }
            if self.king_attacked_on(color, Square(row, lane.transit_col))
                || self.king_attacked_on(color, Square(row, lane.landing_col))
            {
                continue;
            }
            moves.insert(Move::with_pieces(
                home,
                Square(row, lane.landing_col),
                (color, Piece::King),
                None,
                true,
            ));
        }
    }
}
