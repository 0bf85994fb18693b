//! Search entry point.

pub mod fake;
pub mod minimax;
pub mod moves;
pub mod ordering;

use feint_core::{Board, Color, MoveGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::eval::snapshot::Snapshot;
use fake::FakeBoard;
use minimax::{SearchContext, minimax};
use moves::MoveRecord;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen root move, with its score filled in. `None` when the side to
    /// move has no moves at all.
    pub best_move: Option<MoveRecord>,
    /// Value of the root node.
    pub score: i32,
    /// Nodes visited, leaves included.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// One move request against a live board.
///
/// Borrows the board exclusively for its whole lifetime: the search mutates
/// it in place through fake moves and leaves it exactly as it found it.
pub struct Searcher<'a, G> {
    board: FakeBoard<'a>,
    side: Color,
    generator: &'a G,
    config: SearchConfig,
}

impl<'a, G: MoveGenerator> Searcher<'a, G> {
    /// Prepare a search for `side` on `board`.
    pub fn new(board: &'a mut Board, side: Color, generator: &'a G, config: SearchConfig) -> Self {
        Self {
            board: FakeBoard::new(board),
            side,
            generator,
            config,
        }
    }

    /// Run the full fixed-depth search and return the best root move.
    pub fn best_move(&mut self) -> Result<SearchResult, SearchError> {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut ctx = SearchContext {
            side: self.side,
            max_depth: self.config.max_depth,
            generator: self.generator,
            rng,
            snapshot: Snapshot::new(),
            best: None,
            nodes: 0,
        };

        let score = minimax(&mut self.board, self.config.max_depth, true, &mut ctx)?;
        debug_assert_eq!(self.board.history_len(), 0, "fake moves left applied after search");

        let result = SearchResult {
            best_move: ctx.best,
            score,
            nodes: ctx.nodes,
            depth: self.config.max_depth,
        };
        debug!(
            side = %self.side,
            depth = result.depth,
            nodes = result.nodes,
            score = result.score,
            best = ?result.best_move.map(|m| m.to_string()),
            "search complete"
        );
        Ok(result)
    }

    /// Fake moves currently applied. Zero whenever no search is running.
    pub fn history_len(&self) -> usize {
        self.board.history_len()
    }

    /// The board as the searcher currently sees it.
    pub fn board(&self) -> &Board {
        self.board.board()
    }
}
