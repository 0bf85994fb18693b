//! Apply/undo of hypothetical moves on the live board.
//!
//! The search never clones the board. Each fake move is applied in place and
//! pushed onto an explicit history stack; undo pops the stack and restores
//! the two squares the move touched. [`FakeMove`] ties the undo to scope so
//! the board is restored on every exit path, including `?` and unwinding.

use std::ops::{Deref, DerefMut};

use feint_core::Board;

use crate::search::moves::MoveRecord;

/// Exclusive handle on the live board plus the stack of applied fake moves.
#[derive(Debug)]
pub struct FakeBoard<'b> {
    board: &'b mut Board,
    history: Vec<MoveRecord>,
}

impl<'b> FakeBoard<'b> {
    pub fn new(board: &'b mut Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Current board state, including any applied fake moves.
    #[inline]
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Applied-but-not-undone moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of fake moves currently applied.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply `mv` and push it onto the history.
    ///
    /// The moving piece displaces whatever stands on the destination; the
    /// origin is cleared. `mv` must have been generated from the current board.
    pub fn apply(&mut self, mv: MoveRecord) {
        debug_assert_ne!(mv.origin, mv.destination, "fake move must change squares");
        let displaced = self.board.replace_piece(mv.destination, mv.piece_moved);
        debug_assert_eq!(displaced, mv.piece_captured, "move record is stale for {mv}");
        self.board.set_piece(mv.origin, None);
        self.history.push(mv);
    }

    /// Undo the most recently applied move and return it.
    ///
    /// # Panics
    ///
    /// Panics if no move is applied. Every `undo` must pair with an earlier
    /// [`apply`](Self::apply).
    pub fn undo(&mut self) -> MoveRecord {
        let mv = self
            .history
            .pop()
            .expect("undo called with no fake move applied");
        self.board.set_piece(mv.origin, Some(mv.piece_moved));
        self.board.set_piece(mv.destination, mv.piece_captured);
        mv
    }

    /// Apply `mv` for the lifetime of the returned guard.
    pub fn play(&mut self, mv: MoveRecord) -> FakeMove<'_, 'b> {
        self.apply(mv);
        FakeMove { board: self }
    }
}

/// A fake move that is undone when dropped.
///
/// Dereferences to the underlying [`FakeBoard`] so deeper moves can be played
/// while this one is in effect.
#[derive(Debug)]
pub struct FakeMove<'a, 'b> {
    board: &'a mut FakeBoard<'b>,
}

impl<'b> Deref for FakeMove<'_, 'b> {
    type Target = FakeBoard<'b>;

    fn deref(&self) -> &FakeBoard<'b> {
        &*self.board
    }
}

impl<'b> DerefMut for FakeMove<'_, 'b> {
    fn deref_mut(&mut self) -> &mut FakeBoard<'b> {
        &mut *self.board
    }
}

impl Drop for FakeMove<'_, '_> {
    fn drop(&mut self) {
        self.board.undo();
    }
}
