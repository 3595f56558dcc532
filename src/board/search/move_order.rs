//! Move ordering and late-move reductions.

use std::cmp::Reverse;

use once_cell::sync::Lazy;

use super::constants::{
    CENTER_LANDING_BONUS, LMR_TABLE_MAX_DEPTH, LMR_TABLE_MAX_IDX, MVV_LVA_SCALE,
};
use super::SearchConfig;
use crate::board::{Move, MoveSet};

/// MVV-LVA score from the mover's point of view: capture gain scaled, plus
/// a small bonus for landing in the center.
#[must_use]
pub fn mvv_lva(m: Move) -> i32 {
    let capture = m
        .captured()
        .map_or(0, |(_, victim)| MVV_LVA_SCALE * (victim.value() - m.piece().value()));
    let center = if m.to().is_center() {
        CENTER_LANDING_BONUS
    } else {
        0
    };
    capture + center
}

/// Order moves for search.
///
/// Scores are signed by the mover (positive for White, negative for Black),
/// then sorted descending at max nodes and ascending at min nodes, so both
/// sides try their best captures first. The sort is stable over the set's
/// order.
#[must_use]
pub fn order_moves(moves: &MoveSet, maximizing: bool) -> Vec<Move> {
    let mut ordered: Vec<Move> = moves.iter().copied().collect();
    let signed = |m: &Move| mvv_lva(*m) * m.color().sign();
    if maximizing {
        ordered.sort_by_key(|m| Reverse(signed(m)));
    } else {
        ordered.sort_by_key(signed);
    }
    ordered
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lmr_formula(depth: usize, move_idx: usize) -> u32 {
    let val = ((depth as f64 + 1.0).ln() * (move_idx as f64 + 1.0).ln()).floor();
    val.max(1.0) as u32
}

/// Precomputed LMR table
static LMR_TABLE: Lazy<Vec<[u32; LMR_TABLE_MAX_IDX]>> = Lazy::new(|| {
    let mut table = vec![[0u32; LMR_TABLE_MAX_IDX]; LMR_TABLE_MAX_DEPTH];
    for (depth, row) in table.iter_mut().enumerate() {
        for (idx, cell) in row.iter_mut().enumerate() {
            *cell = lmr_formula(depth, idx);
        }
    }
    table
});

/// Plies to cut from the move at `move_idx` of a node with `depth` left.
///
/// Zero for early moves and shallow nodes; otherwise at least one.
#[must_use]
pub fn lmr_reduction(depth: u32, move_idx: usize, config: &SearchConfig) -> u32 {
    if depth < config.lmr_min_depth || move_idx < config.lmr_move_threshold {
        return 0;
    }
    let depth = depth as usize;
    if depth < LMR_TABLE_MAX_DEPTH && move_idx < LMR_TABLE_MAX_IDX {
        LMR_TABLE[depth][move_idx]
    } else {
        lmr_formula(depth, move_idx)
    }
}
