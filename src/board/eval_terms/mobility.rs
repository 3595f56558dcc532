use crate::board::Color;

use super::tables::{MOBILITY_DIVISOR, MOBILITY_SCALE};

/// Mobility term for `count` legal moves of `side`, from White's view.
#[must_use]
pub fn mobility_score(side: Color, count: usize) -> i32 {
    let count = i32::try_from(count).unwrap_or(i32::MAX / MOBILITY_SCALE);
    side.sign() * count * MOBILITY_SCALE / MOBILITY_DIVISOR
}
