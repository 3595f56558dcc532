use super::super::{MoveSet, Position, Square};

impl Position {
    /// Bishop, rook and queen moves along `directions` until blocked.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        moves: &mut MoveSet,
    ) {
        let Some((color, _)) = self.board.get(from) else {
            return;
        };
        let pin = self.pin_on(from).copied();

        for &(dr, dc) in directions {
            for to in from.ray(dr, dc) {
                if pin.is_some_and(|p| !p.allows(from, to)) {
                    break;
                }
                match self.board.get(to) {
                    None => moves.extend(self.quiet_or_capture(from, to)),
                    Some(_) => {
                        if self.is_capture_target(color, to) {
                            moves.extend(self.quiet_or_capture(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
