//! A live game position: the board plus whose turn it is.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::piece::Piece;
use crate::square::Square;

/// Board and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Position {
    pub fn new(board: Board, side_to_move: Color) -> Position {
        Position { board, side_to_move }
    }

    /// Standard starting position, White to move.
    pub fn starting_position() -> Position {
        Position::new(Board::starting_position(), Color::White)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Play a real move: relocate the piece on `from` to `to`, discard any
    /// captured piece, and pass the turn.
    ///
    /// Returns the captured piece. Movement rules are not checked here.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::WrongSide { square: from });
        }

        self.board.take_piece(from);
        let captured = self.board.replace_piece(to, piece);
        self.side_to_move = !self.side_to_move;
        trace!(%from, %to, ?captured, "move played");
        Ok(captured)
    }

    /// Parse and play a move written as `e2e4`.
    pub fn make_move_str(&mut self, text: &str) -> Result<Option<Piece>, MoveError> {
        let (from, to) = parse_move(text)?;
        self.make_move(from, to)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

/// Split `e2e4` into its two squares.
pub(crate) fn parse_move(text: &str) -> Result<(Square, Square), MoveError> {
    let malformed = || MoveError::Malformed {
        text: text.to_string(),
    };
    if text.len() != 4 || !text.is_ascii() {
        return Err(malformed());
    }
    let from = Square::from_algebraic(&text[..2]).ok_or_else(malformed)?;
    let to = Square::from_algebraic(&text[2..]).ok_or_else(malformed)?;
    Ok((from, to))
}

impl FromStr for Position {
    type Err = FenError;

    /// Parse a FEN string. Only placement and active color are read; castling,
    /// en passant and clocks are accepted and ignored.
    fn from_str(fen: &str) -> Result<Position, FenError> {
        let mut fields = fen.split_whitespace();
        let board: Board = fields.next().ok_or(FenError::Empty)?.parse()?;

        let side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        Ok(Position::new(board, side_to_move))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - - 0 1", self.board, self.side_to_move)
    }
}
