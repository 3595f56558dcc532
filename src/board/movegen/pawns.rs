use super::super::{MoveSet, Position, Square};

impl Position {
    /// Single and double pushes plus diagonal captures. No en passant and no
    /// promotion: a pawn on the last rank has nowhere to go.
    pub(crate) fn pawn_moves(&self, from: Square, moves: &mut MoveSet) {
        let Some((color, _)) = self.board.get(from) else {
            return;
        };
        let dir = color.pawn_direction();
        let pin = self.pin_on(from).copied();
        let on_axis = |to: Square| pin.map_or(true, |p| p.allows(from, to));

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) && on_axis(one) {
                moves.extend(self.quiet_or_capture(from, one));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0).filter(|&sq| self.board.is_empty(sq)) {
                        moves.extend(self.quiet_or_capture(from, two));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                if self.is_capture_target(color, to) && on_axis(to) {
                    moves.extend(self.quiet_or_capture(from, to));
                }
            }
        }
    }
}
