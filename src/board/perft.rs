use super::Position;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.apply_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }

    /// Per-move node counts at the root, sorted by move.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(String, u64)> {
        let moves = self.legal_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for m in moves {
            self.apply_move(m);
            let nodes = self.perft(depth.saturating_sub(1));
            self.undo_move();
            counts.push((m.to_string(), nodes));
        }
        counts
    }
}
