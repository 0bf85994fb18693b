//! Piece value table.
//!
//! | Piece  | Weight |
//! |--------|--------|
//! | Pawn   |  10    |
//! | Knight |  30    |
//! | Bishop |  30    |
//! | Rook   |  50    |
//! | Queen  |  90    |
//! | King   | 900    |
//!
//! The king outweighs every other piece combined, so with no checkmate
//! detection the search still treats losing it as decisive.

use feint_core::PieceKind;

/// Material weights indexed by [`PieceKind::index()`].
pub const PIECE_WEIGHT: [i32; PieceKind::COUNT] = [
    10,  // Pawn
    30,  // Knight
    30,  // Bishop
    50,  // Rook
    90,  // Queen
    900, // King
];

/// Weight of a piece kind.
#[inline]
pub const fn weight(kind: PieceKind) -> i32 {
    PIECE_WEIGHT[kind.index()]
}
