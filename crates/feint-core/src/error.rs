//! Error types for FEN parsing and real move application.

use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string has no piece placement field.
    #[error("empty FEN string")]
    Empty,
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
}

/// Errors from applying a real move to a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// There is no piece on the origin square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty origin.
        square: Square,
    },
    /// The origin holds a piece of the side not to move.
    #[error("piece on {square} does not belong to the side to move")]
    WrongSide {
        /// The offending origin.
        square: Square,
    },
    /// The move text is not in `e2e4` form.
    #[error("malformed move: {text}")]
    Malformed {
        /// The text that failed to parse.
        text: String,
    },
}
