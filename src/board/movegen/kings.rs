use super::super::{Move, MoveSet, Position, Square};
use super::KING_STEPS;

impl Position {
    /// One-step king moves, each destination checked by relocating the king.
    pub(crate) fn king_moves(&mut self, from: Square, moves: &mut MoveSet) {
        let Some((color, _)) = self.board.get(from) else {
            return;
        };
        let candidates: Vec<Move> = KING_STEPS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.can_land_on(color, to))
            .filter_map(|to| self.quiet_or_capture(from, to))
            .collect();

        for m in candidates {
            if !self.king_attacked_on(color, m.to()) {
                moves.insert(m);
            }
        }
    }
}
