//! Pin and check detection by ray scanning from the king.

use super::super::{Check, CheckLine, Color, Piece, Pin, Position, Square};
use super::{DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS};

/// Pins and checks against one king.
#[derive(Debug, Default)]
pub(crate) struct KingScan {
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
}

impl Position {
    /// Re-run pin/check detection for the side to move and cache it.
    pub(crate) fn refresh_pins_and_checks(&mut self) {
        let scan = self.find_pins_and_checks(self.side_to_move);
        self.in_check = !scan.checks.is_empty();
        self.pins = scan.pins;
        self.checks = scan.checks;
    }

    /// Scan outward from `color`'s king for pins and checks.
    ///
    /// Sliders are found along the eight rays; a friendly piece between the
    /// king and a matching slider is pinned. Pawns and the enemy king only
    /// count at distance one. Knights are probed separately.
    pub(crate) fn find_pins_and_checks(&self, color: Color) -> KingScan {
        let king = self.king_square(color);
        let mut scan = KingScan::default();

        for (dr, dc) in ORTHOGONALS.into_iter().chain(DIAGONALS) {
            let diagonal = dr != 0 && dc != 0;
            let mut shield: Option<Square> = None;

            for (step, sq) in king.ray(dr, dc).enumerate() {
                let Some((owner, piece)) = self.board.get(sq) else {
                    continue;
                };
                if owner == color {
                    if piece == Piece::King || shield.is_some() {
                        break;
                    }
                    shield = Some(sq);
                    continue;
                }

                let adjacent = step == 0;
                let slider = if diagonal {
                    piece.attacks_diagonally()
                } else {
                    piece.attacks_straight()
                };
                let pawn = diagonal && piece == Piece::Pawn && dr == color.pawn_direction();
                let attacks = slider || (adjacent && (pawn || piece == Piece::King));

                if attacks {
                    match shield {
                        Some(square) => scan.pins.push(Pin {
                            square,
                            direction: (dr, dc),
                        }),
                        None => scan.checks.push(Check {
                            attacker: sq,
                            king,
                            line: CheckLine::Ray(dr, dc),
                        }),
                    }
                }
                break;
            }
        }

        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(sq) = king.offset(dr, dc) {
                if self.board.holds(sq, color.opponent(), Piece::Knight) {
                    scan.checks.push(Check {
                        attacker: sq,
                        king,
                        line: CheckLine::Knight,
                    });
                }
            }
        }

        scan
    }

    /// Would `color`'s king be attacked standing on `target`?
    ///
    /// The king is moved there for the duration of the scan, so it neither
    /// shields its old square nor gets shielded by a piece it would capture.
    pub(crate) fn king_attacked_on(&mut self, color: Color, target: Square) -> bool {
        let guard = KingRelocation::new(self, color, target);
        !guard.position().find_pins_and_checks(color).checks.is_empty()
    }
}

/// Temporarily moves a king to another square; `Drop` puts everything back.
pub(crate) struct KingRelocation<'a> {
    position: &'a mut Position,
    color: Color,
    home: Square,
    target: Square,
    displaced: Option<(Color, Piece)>,
}

impl<'a> KingRelocation<'a> {
    pub(crate) fn new(position: &'a mut Position, color: Color, target: Square) -> Self {
        let home = position.king_square(color);
        let king = position.board.take(home);
        let displaced = position.board.take(target);
        position.board.set(target, king);
        position.kings[color.index()] = target;
        KingRelocation {
            position,
            color,
            home,
            target,
            displaced,
        }
    }

    pub(crate) fn position(&self) -> &Position {
        self.position
    }
}

impl Drop for KingRelocation<'_> {
    fn drop(&mut self) {
        let king = self.position.board.take(self.target);
        self.position.board.set(self.target, self.displaced);
        self.position.board.set(self.home, king);
        self.position.kings[self.color.index()] = self.home;
    }
}
