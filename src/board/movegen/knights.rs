use super::super::{MoveSet, Position, Square};
use super::KNIGHT_OFFSETS;

impl Position {
    pub(crate) fn knight_moves(&self, from: Square, moves: &mut MoveSet) {
        let Some((color, _)) = self.board.get(from) else {
            return;
        };
        // A knight never stays on a line, so any pin freezes it.
        if self.pin_on(from).is_some() {
            return;
        }
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, dc).filter(|&sq| self.can_land_on(color, sq)) {
                moves.extend(self.quiet_or_capture(from, to));
            }
        }
    }
}
