//! Search errors.

use feint_core::Square;

/// Faults surfaced to the caller of [`Searcher::best_move`](crate::Searcher::best_move).
///
/// None of these occur when the board and move generator honor their
/// contracts; they exist so a misbehaving collaborator is reported instead of
/// silently corrupting the search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A move record was requested from an empty origin square.
    #[error("no piece on origin square {square}")]
    EmptyOrigin {
        /// The empty origin.
        square: Square,
    },
}
