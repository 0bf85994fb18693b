//! Move records and per-side move enumeration.

use std::fmt;

use feint_core::{Board, Color, MoveGenerator, Piece, Square};

use crate::error::SearchError;
use crate::eval::snapshot::Snapshot;

/// A hypothetical move, captured against the board it was generated from.
///
/// Pieces are held by value: later board mutations are not reflected here,
/// which is what lets [`FakeBoard::undo`](crate::FakeBoard::undo) restore the
/// exact prior occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Square the piece leaves.
    pub origin: Square,
    /// Square the piece lands on.
    pub destination: Square,
    /// The piece that moves.
    pub piece_moved: Piece,
    /// The occupant of `destination` before the move, if any.
    pub piece_captured: Option<Piece>,
    /// Best score reached through this move. Only set on root moves.
    pub score: i32,
}

impl MoveRecord {
    /// Record a move from `from` to `to` as the board stands now.
    pub fn new(board: &Board, from: Square, to: Square) -> Result<MoveRecord, SearchError> {
        let piece_moved = board
            .piece_at(from)
            .ok_or(SearchError::EmptyOrigin { square: from })?;
        Ok(MoveRecord {
            origin: from,
            destination: to,
            piece_moved,
            piece_captured: board.piece_at(to),
            score: 0,
        })
    }

    /// `true` if the move removes an opposing piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)
    }
}

/// Every move available to `side`, using the squares classified by the
/// latest `snapshot` and the destinations reported by `generator`.
///
/// Destinations are not deduplicated or validated.
pub fn enumerate_moves<G: MoveGenerator>(
    board: &Board,
    snapshot: &Snapshot,
    side: Color,
    generator: &G,
) -> Result<Vec<MoveRecord>, SearchError> {
    let mut moves = Vec::new();
    for &from in snapshot.pieces(side) {
        let piece = board
            .piece_at(from)
            .ok_or(SearchError::EmptyOrigin { square: from })?;
        for to in generator.destinations(board, piece, from) {
            moves.push(MoveRecord::new(board, from, to)?);
        }
    }
    Ok(moves)
}
