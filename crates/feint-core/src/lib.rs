//! Core board types: squares, pieces, the mailbox board, and per-piece movement.

mod board;
mod color;
mod error;
mod fen;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{FenError, MoveError};
pub use fen::{STARTING_FEN, STARTING_PLACEMENT};
pub use movegen::{MoveGenerator, PieceMoves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
