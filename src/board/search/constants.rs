//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Score of a checkmated position, from White's point of view
pub const CHECKMATE: i32 = 1_000_000;

/// Search window bound, strictly outside every reachable score
pub const SCORE_INFINITY: i32 = 2 * CHECKMATE;

// ============================================================================
// MOVE ORDERING
// ============================================================================

/// Multiplier on (victim value - attacker value) for captures
pub const MVV_LVA_SCALE: i32 = 15;

/// Bonus for moves landing on d4, e4, d5 or e5
pub const CENTER_LANDING_BONUS: i32 = 7;

// ============================================================================
// REDUCTIONS
// ============================================================================

/// LMR reduction table dimensions (depth x move index)
pub const LMR_TABLE_MAX_DEPTH: usize = 32;
pub const LMR_TABLE_MAX_IDX: usize = 128;
