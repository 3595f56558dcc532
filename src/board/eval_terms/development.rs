use crate::board::{Color, Piece, Position, Square};

use super::tables::DEVELOPMENT_BONUS;

const WHITE_DEVELOPED: [Square; 4] = [Square(5, 2), Square(5, 5), Square(4, 3), Square(4, 4)];
const BLACK_DEVELOPED: [Square; 4] = [Square(2, 2), Square(2, 5), Square(3, 3), Square(3, 4)];

fn home_squares(color: Color, piece: Piece) -> [Square; 2] {
    let row = color.back_row();
    match piece {
        Piece::Knight => [Square(row, 1), Square(row, 6)],
        _ => [Square(row, 2), Square(row, 5)],
    }
}

impl Position {
    /// Minor piece development, White minus Black.
    #[must_use]
    pub fn eval_development(&self) -> i32 {
        self.board
            .pieces()
            .filter(|&(_, _, piece)| matches!(piece, Piece::Knight | Piece::Bishop))
            .map(|(sq, color, piece)| {
                let developed = match color {
                    Color::White => &WHITE_DEVELOPED,
                    Color::Black => &BLACK_DEVELOPED,
                };
                let score = if developed.contains(&sq) {
                    DEVELOPMENT_BONUS
                } else if home_squares(color, piece).contains(&sq) {
                    -DEVELOPMENT_BONUS
                } else {
                    0
                };
                color.sign() * score
            })
            .sum()
    }
}
