//! Static evaluation: piece weights, the per-node board scan, and the score.

pub mod material;
pub mod snapshot;

use snapshot::Snapshot;

/// Material difference from the searching side's point of view.
///
/// Reads the totals of the most recent [`Snapshot::scan`]; positive means the
/// side the snapshot was taken for is ahead.
#[inline]
pub fn evaluate(snapshot: &Snapshot) -> i32 {
    snapshot.my_score() - snapshot.their_score()
}
