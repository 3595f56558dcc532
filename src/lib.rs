pub mod board;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, Move, MoveSet, Piece, Position, Square};
pub use tt::TranspositionTable;
pub use zobrist::ZobristKeys;
