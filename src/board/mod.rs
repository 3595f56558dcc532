//! Chess position representation and game logic.
//!
//! Uses an 8x8 mailbox for move generation and evaluation. Legal moves are
//! produced by scanning pins and checks from the king, so no move is ever
//! made and unmade just to test legality. Castling is supported; en passant
//! and promotion are not.
//!
//! # Example
//! ```
//! use chess_ai::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
pub mod eval_terms;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, PositionError, SquareError};
pub use fen::START_FEN;
pub use state::{Board, Check, CheckLine, Pin, Position};
pub use types::{CastlingRights, Color, Move, MoveSet, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    search_best_move, search_best_move_with, SearchConfig, SearchContext, SearchOutcome,
    SearchStats, CHECKMATE, DEFAULT_DEPTH,
};

pub(crate) use types::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
