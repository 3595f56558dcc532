//! Error types for chess board operations.

use std::fmt;

use super::{Color, Move, Piece, Square};

fn describe(piece: Option<Piece>) -> String {
    piece.map_or_else(|| "nothing".to_string(), |p| p.to_string())
}

/// Error type for moves that do not match the position they are played in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move belongs to the side that is not on turn
    WrongSide { mover: Color, to_move: Color },
    /// The source square does not hold the moving piece
    PieceMismatch {
        square: Square,
        expected: Piece,
        found: Option<Piece>,
    },
    /// The destination does not hold the recorded capture
    CaptureMismatch {
        square: Square,
        expected: Option<Piece>,
        found: Option<Piece>,
    },
    /// Kings are never captured
    KingCapture { square: Square },
    /// The move would capture a piece of the mover's own color
    OwnPieceCapture { square: Square },
    /// Castling without a rook in the corner or with its path blocked
    InvalidCastle { square: Square },
    /// The move fits the board but is not among the legal moves
    Illegal { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::WrongSide { mover, to_move } => {
                write!(f, "{mover} cannot move, it is {to_move}'s turn")
            }
            MoveError::PieceMismatch {
                square,
                expected,
                found,
            } => write!(
                f,
                "Expected a {expected} on {square}, found {}",
                describe(*found)
            ),
            MoveError::CaptureMismatch {
                square,
                expected,
                found,
            } => write!(
                f,
                "Move expects {} on {square}, found {}",
                describe(*expected),
                describe(*found)
            ),
            MoveError::KingCapture { square } => {
                write!(f, "Move captures the king on {square}")
            }
            MoveError::OwnPieceCapture { square } => {
                write!(f, "Move captures a friendly piece on {square}")
            }
            MoveError::InvalidCastle { square } => {
                write!(f, "Castling needs a rook on {square} and a clear path")
            }
            MoveError::Illegal { mv } => write!(f, "{mv} is not a legal move"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for positions that cannot be played from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    TooManyKings { color: Color, count: usize },
    /// The side that just moved is still in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::TooManyKings { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly 1")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their turn")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Wrong number of ranks in the placement field
    InvalidRankCount { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
    /// Placement parsed but does not form a playable position
    Position(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement has {found} ranks, expected 8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::Position(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(err: PositionError) -> Self {
        FenError::Position(err)
    }
}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
