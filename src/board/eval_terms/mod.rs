//! Evaluation terms.
//!
//! Each term scores one aspect of the position from White's point of view:
//! - Material and piece-square tables
//! - Pawn structure (doubled, isolated, backward, passed, central pawns)
//! - Rook activity (open files, seventh rank, mobility, connected rooks)
//! - King safety (shield, safe flight squares)
//! - Center control
//! - Mobility
//! - Minor piece development

mod center_control;
mod development;
mod king_safety;
mod material;
mod mobility;
mod pawn_structure;
mod rooks;
pub mod tables;

pub use material::pst_value;
pub use mobility::mobility_score;
