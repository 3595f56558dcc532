//! Static evaluation.

use super::eval_terms::mobility_score;
use super::search::CHECKMATE;
use super::{Color, Position};

impl Position {
    /// Score the position from White's point of view.
    ///
    /// Checkmate scores `-CHECKMATE` when White is the side mated and
    /// `+CHECKMATE` otherwise; stalemate is zero. Everything else is the sum
    /// of the evaluation terms.
    pub fn evaluate(&mut self) -> i32 {
        let moves = self.legal_moves();
        if self.checkmate {
            return match self.side_to_move {
                Color::White => -CHECKMATE,
                Color::Black => CHECKMATE,
            };
        }
        if self.stalemate {
            return 0;
        }

        self.eval_material()
            + self.eval_pawn_structure()
            + self.eval_rooks()
            + self.eval_king_safety()
            + self.eval_center_control()
            + mobility_score(self.side_to_move, moves.len())
            + self.eval_development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_is_near_zero() {
        let mut pos = Position::new();
        let score = pos.evaluate();
        // Only the mobility term favors the side to move
        assert!(score.abs() <= 5, "score = {score}");
    }

    #[test]
    fn test_checkmate_scores() {
        // Fool's mate: White is mated
        let mut pos = Position::new();
        pos.play_moves(["f2f3", "e7e5", "g2g4", "d8h4"]).expect("legal");
        assert_eq!(pos.evaluate(), -CHECKMATE);
        assert!(pos.is_checkmate());

        // Back-rank mate: Black is mated
        let mut pos: Position = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".parse().expect("fen");
        assert_eq!(pos.evaluate(), CHECKMATE);
    }

    #[test]
    fn test_stalemate_scores_zero() {
        let mut pos: Position = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().expect("fen");
        assert_eq!(pos.evaluate(), 0);
        assert!(pos.is_stalemate());
    }

    #[test]
    fn test_material_advantage_dominates() {
        let mut pos: Position = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .expect("fen");
        assert!(pos.evaluate() > 700);
    }
}
