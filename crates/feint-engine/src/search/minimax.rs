//! Plain fixed-depth minimax over fake moves.

use feint_core::{Color, MoveGenerator};
use rand::rngs::StdRng;
use tracing::trace;

use crate::error::SearchError;
use crate::eval::evaluate;
use crate::eval::snapshot::Snapshot;
use crate::search::fake::FakeBoard;
use crate::search::moves::{MoveRecord, enumerate_moves};
use crate::search::ordering::shuffle;

/// Score a maximizing node returns when its side has no moves.
pub const NO_MOVES_MAX: i32 = i32::MIN;

/// Score a minimizing node returns when its side has no moves.
pub const NO_MOVES_MIN: i32 = i32::MAX;

/// State threaded through one top-level search.
pub(super) struct SearchContext<'g, G> {
    /// Side to move at the root; "mine" in every snapshot.
    pub side: Color,
    /// Ply budget; the root is the node searched at this depth.
    pub max_depth: u8,
    pub generator: &'g G,
    pub rng: StdRng,
    /// Rebuilt at the top of every node.
    pub snapshot: Snapshot,
    /// Best root move so far. `None` until the first root move is scored.
    pub best: Option<MoveRecord>,
    /// Nodes visited.
    pub nodes: u64,
}

/// Minimax search to `depth` plies.
///
/// Maximizing nodes move for the root side, minimizing nodes for its
/// opponent, alternating strictly with depth. Every fake move is undone
/// before the next sibling is tried. At the root, a move replaces the current
/// best only on a strictly higher score.
///
/// A node whose side has no moves returns [`NO_MOVES_MAX`] or
/// [`NO_MOVES_MIN`]; there is no checkmate or stalemate detection.
pub(super) fn minimax<G: MoveGenerator>(
    board: &mut FakeBoard<'_>,
    depth: u8,
    maximizing: bool,
    ctx: &mut SearchContext<'_, G>,
) -> Result<i32, SearchError> {
    ctx.nodes += 1;
    ctx.snapshot.scan(board.board(), ctx.side);

    if depth == 0 {
        return Ok(evaluate(&ctx.snapshot));
    }

    let mover = if maximizing { ctx.side } else { !ctx.side };
    let mut moves = enumerate_moves(board.board(), &ctx.snapshot, mover, ctx.generator)?;
    shuffle(&mut moves, &mut ctx.rng);

    let is_root = maximizing && depth == ctx.max_depth;
    let mut best = if maximizing { NO_MOVES_MAX } else { NO_MOVES_MIN };

    for mut mv in moves {
        let score = {
            let mut child = board.play(mv);
            minimax(&mut child, depth - 1, !maximizing, ctx)?
        };

        if maximizing {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }

        if is_root && ctx.best.is_none_or(|current| score > current.score) {
            mv.score = score;
            trace!(%mv, score, "new best root move");
            ctx.best = Some(mv);
        }
    }

    Ok(best)
}
