//! Pawn structure evaluation.
//!
//! Counts units per side and scales by `PAWN_STRUCTURE_WEIGHT`:
//! - minus one per pawn on the square color of a friendly bishop
//! - minus one per extra pawn on a file (doubled)
//! - minus one per isolated pawn
//! - minus one per backward pawn
//! - plus one per d/e pawn on rows 2-5
//! - plus `PASSED_PAWN_UNITS` per passed pawn

use crate::board::{Color, Piece, Position, Square};

use super::tables::{PASSED_PAWN_UNITS, PAWN_STRUCTURE_WEIGHT};

impl Position {
    /// Pawn structure, White minus Black.
    #[must_use]
    pub fn eval_pawn_structure(&self) -> i32 {
        let white = self.pawn_structure_units(Color::White);
        let black = self.pawn_structure_units(Color::Black);
        (white - black) * PAWN_STRUCTURE_WEIGHT
    }

    fn pawn_structure_units(&self, color: Color) -> i32 {
        let pawns: Vec<Square> = self.board.squares_of(color, Piece::Pawn).collect();
        let enemy: Vec<Square> = self.board.squares_of(color.opponent(), Piece::Pawn).collect();
        let bishop_shades: Vec<usize> = self
            .board
            .squares_of(color, Piece::Bishop)
            .map(shade)
            .collect();

        let mut files = [0i32; 8];
        for sq in &pawns {
            files[sq.col()] += 1;
        }

        let mut units: i32 = files.iter().map(|&n| -(n - 1).max(0)).sum();
        let dir = color.pawn_direction();
        // Rows ahead of `row` from this side's point of view
        let ahead = |of: usize, row: usize| (row as isize - of as isize) * dir > 0;

        for &sq in &pawns {
            if bishop_shades.contains(&shade(sq)) {
                units -= 1;
            }

            let neighbors: Vec<&Square> = pawns
                .iter()
                .filter(|p| p.col().abs_diff(sq.col()) == 1)
                .collect();
            if neighbors.is_empty() {
                units -= 1;
            } else if neighbors.iter().all(|p| ahead(sq.row(), p.row())) {
                units -= 1;
            }

            if (sq.col() == 3 || sq.col() == 4) && (2..=5).contains(&sq.row()) {
                units += 1;
            }

            let blocked = enemy
                .iter()
                .any(|e| e.col().abs_diff(sq.col()) <= 1 && ahead(sq.row(), e.row()));
            if !blocked {
                units += PASSED_PAWN_UNITS;
            }
        }
        units
    }
}

/// Square color: 0 for light, 1 for dark.
fn shade(sq: Square) -> usize {
    (sq.row() + sq.col()) % 2
}
