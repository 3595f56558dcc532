//! Evaluation constants and tables.
//!
//! Piece-square tables are laid out from White's side: index `[row][col]`
//! with row 0 at rank 8. Black reads them mirrored vertically.

// ============================================================================
// PIECE-SQUARE TABLES
// ============================================================================

pub const PAWN_PST: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [60, 60, 60, 60, 60, 60, 60, 60],
    [15, 15, 25, 35, 35, 25, 15, 15],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const KNIGHT_PST: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 10, 10, 0, -20, -40],
    [-30, 10, 20, 25, 25, 20, 10, -30],
    [-30, 0, 25, 30, 30, 25, 0, -30],
    [-30, 5, 25, 30, 30, 25, 5, -30],
    [-30, 0, 20, 25, 25, 20, 0, -30],
    [-40, -20, 0, 10, 10, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const BISHOP_PST: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-10, 10, 15, 20, 20, 15, 10, -10],
    [-10, 0, 15, 20, 20, 15, 0, -10],
    [-10, 5, 10, 20, 20, 10, 5, -10],
    [-10, 0, 10, 15, 15, 10, 0, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

pub const ROOK_PST: [[i32; 8]; 8] = [
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [5, 5, 5, 10, 10, 5, 5, 5],
    [5, 5, 5, 10, 10, 5, 5, 5],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const QUEEN_PST: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 5, 10, 10, 10, 10, 5, -10],
    [-5, 0, 10, 10, 10, 10, 0, -5],
    [0, 0, 10, 10, 10, 10, 0, -5],
    [-10, 5, 10, 10, 10, 10, 5, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

pub const KING_PST: [[i32; 8]; 8] = [
    [20, 30, 10, 0, 0, 10, 30, 20],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
];

// ============================================================================
// PAWN STRUCTURE
// ============================================================================

/// Centipawns per pawn-structure unit
pub const PAWN_STRUCTURE_WEIGHT: i32 = 10;

/// Units for a pawn with no enemy pawn ahead on its own or adjacent files
pub const PASSED_PAWN_UNITS: i32 = 2;

// ============================================================================
// ROOKS
// ============================================================================

pub const ROOK_OPEN_FILE: i32 = 25;
pub const ROOK_SEMI_OPEN_FILE: i32 = 20;
pub const ROOK_ON_SEVENTH: i32 = 30;
pub const ROOK_MOBILITY_PER_SQUARE: i32 = 2;
pub const CONNECTED_ROOKS: i32 = 10;

// ============================================================================
// KING SAFETY
// ============================================================================

/// Per pawn-unit of unpinned friendly material directly in front of the king
pub const KING_SHIELD_PER_UNIT: i32 = 6;

/// Per square the king could step to without being attacked
pub const KING_SAFE_SQUARE: i32 = 2;

// ============================================================================
// CENTER, MOBILITY, DEVELOPMENT
// ============================================================================

/// Per attack on one of the sixteen central squares (c3-f6), multiplied by
/// the attacker's value in pawn units
pub const CENTER_ATTACK: i32 = 2;

/// Mobility scale: `legal moves * MOBILITY_SCALE / MOBILITY_DIVISOR`
pub const MOBILITY_SCALE: i32 = 500;

/// Normalizing divisor for the move count (8 x 8 x 73 move encodings)
pub const MOBILITY_DIVISOR: i32 = 4672;

/// Bonus for a minor piece on a developed square, and penalty for one still
/// at home
pub const DEVELOPMENT_BONUS: i32 = 15;
