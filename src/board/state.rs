//! Board storage and position state.

use std::fmt;

use super::{CastlingRights, Color, Move, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8x8 mailbox of square contents, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board with no pieces on it
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.set(Square(0, col), Some((Color::Black, piece)));
            board.set(Square(1, col), Some((Color::Black, Piece::Pawn)));
            board.set(Square(6, col), Some((Color::White, Piece::Pawn)));
            board.set(Square(7, col), Some((Color::White, piece)));
        }
        board
    }

    /// Contents of a square
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.squares[sq.0][sq.1] = content;
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// True if `sq` holds exactly this colored piece
    #[inline]
    #[must_use]
    pub fn holds(&self, sq: Square, color: Color, piece: Piece) -> bool {
        self.get(sq) == Some((color, piece))
    }

    /// Iterate over occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Squares holding pieces of one color and kind
    pub fn squares_of(&self, color: Color, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |&(_, c, p)| c == color && p == piece)
            .map(|(sq, _, _)| sq)
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.squares_of(color, Piece::King).next()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = match self.get(Square(row, col)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// A piece pinned against its own king.
///
/// `direction` is the unit step from the king toward the pinned piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: (isize, isize),
}

impl Pin {
    /// True if moving `from -> to` keeps the piece on the pin axis.
    ///
    /// Either direction along the axis is allowed.
    #[must_use]
    pub fn allows(&self, from: Square, to: Square) -> bool {
        let dr = to.0 as isize - from.0 as isize;
        let dc = to.1 as isize - from.1 as isize;
        dr * self.direction.1 - dc * self.direction.0 == 0
    }
}

/// How a checker reaches the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckLine {
    /// Along a rank, file or diagonal; unit step from the king to the checker
    Ray(isize, isize),
    /// A knight jump, which cannot be blocked
    Knight,
}

/// A single attacker giving check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    pub king: Square,
    pub line: CheckLine,
}

impl Check {
    /// Squares strictly between the king and the checker.
    ///
    /// Empty for knight checks and contact checks.
    #[must_use]
    pub fn interposition_squares(&self) -> Vec<Square> {
        match self.line {
            CheckLine::Knight => Vec::new(),
            CheckLine::Ray(dr, dc) => self
                .king
                .ray(dr, dc)
                .take_while(|&sq| sq != self.attacker)
                .collect(),
        }
    }

    /// Destinations that resolve this check for a non-king piece
    #[must_use]
    pub fn blocking_squares(&self) -> Vec<Square> {
        let mut squares = self.interposition_squares();
        squares.push(self.attacker);
        squares
    }
}

/// Full game position: board, side to move and the bookkeeping needed for
/// legal move generation and undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) kings: [Square; 2],
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
    pub(crate) castling: CastlingRights,
    pub(crate) rights_log: Vec<CastlingRights>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// The standard starting position with White to move
    #[must_use]
    pub fn new() -> Self {
        let kings = [Square(7, 4), Square(0, 4)];
        Position::from_parts(Board::starting(), Color::White, CastlingRights::all(), kings)
    }

    /// Assemble a position from already validated parts.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        kings: [Square; 2],
    ) -> Self {
        let mut pos = Position {
            board,
            side_to_move,
            kings,
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            castling,
            rights_log: Vec::new(),
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
        };
        pos.refresh_pins_and_checks();
        pos
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Whether the side to move was in check at the last scan
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    #[inline]
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Set only by `legal_moves` finding no reply while in check
    #[inline]
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set only by `legal_moves` finding no reply while not in check
    #[inline]
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Moves played so far, oldest first
    #[inline]
    #[must_use]
    pub fn move_history(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.get(sq)
    }

    pub(crate) fn pin_on(&self, sq: Square) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.square == sq)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move, castling {}", self.side_to_move, self.castling.to_fen())
    }
}
