//! Per-node board scan.
//!
//! Every search node rebuilds its view of the board from scratch instead of
//! tracking material incrementally across fake moves.

use feint_core::{Board, Color, Square};

use crate::eval::material::weight;

/// Occupied squares split by side, with each side's material total.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    side: Option<Color>,
    mine: Vec<Square>,
    theirs: Vec<Square>,
    my_score: i32,
    their_score: i32,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescan all 64 squares, classifying pieces as `side`'s or the opponent's.
    ///
    /// Previous lists and totals are discarded first; the list buffers are
    /// reused.
    pub fn scan(&mut self, board: &Board, side: Color) {
        self.side = Some(side);
        self.mine.clear();
        self.theirs.clear();
        self.my_score = 0;
        self.their_score = 0;

        for (sq, piece) in board.occupied() {
            if piece.color() == side {
                self.my_score += weight(piece.kind());
                self.mine.push(sq);
            } else {
                self.their_score += weight(piece.kind());
                self.theirs.push(sq);
            }
        }
    }

    /// Squares holding `color`'s pieces as of the last scan.
    ///
    /// Returns an empty slice if nothing has been scanned yet.
    pub fn pieces(&self, color: Color) -> &[Square] {
        match self.side {
            Some(side) if side == color => &self.mine,
            Some(_) => &self.theirs,
            None => &[],
        }
    }

    /// Squares of the side the snapshot was taken for.
    pub fn mine(&self) -> &[Square] {
        &self.mine
    }

    /// Squares of the opponent.
    pub fn theirs(&self) -> &[Square] {
        &self.theirs
    }

    pub fn my_score(&self) -> i32 {
        self.my_score
    }

    pub fn their_score(&self) -> i32 {
        self.their_score
    }
}
