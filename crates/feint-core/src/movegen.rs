//! Per-piece movement rules.
//!
//! The search only ever asks one question of the rules: "where can this piece,
//! standing on this square, go?" [`MoveGenerator`] is that seam; [`PieceMoves`]
//! is the bundled answer used by the engine binary.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Source of reachable destination squares for a single piece.
///
/// Implementations are trusted: callers do not re-validate the squares they
/// return, and duplicates are passed through as-is.
pub trait MoveGenerator {
    /// Destinations reachable by `piece` from `from` on `board`.
    fn destinations(&self, board: &Board, piece: Piece, from: Square) -> Vec<Square>;
}

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Pseudo-legal movement for standard chess pieces.
///
/// No castling, en passant, promotion, or check detection: a king is a piece
/// like any other and may be captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceMoves;

impl MoveGenerator for PieceMoves {
    fn destinations(&self, board: &Board, piece: Piece, from: Square) -> Vec<Square> {
        let mut targets = Vec::new();
        let us = piece.color();

        let kind = piece.kind();

        if kind.is_slider() {
            gen_rays(board, us, from, slider_rays(kind), &mut targets);
        } else {
            match kind {
                PieceKind::Pawn => gen_pawn(board, us, from, &mut targets),
                PieceKind::Knight => gen_steps(board, us, from, &KNIGHT_STEPS, &mut targets),
                _ => gen_steps(board, us, from, &ALL_DIRECTIONS, &mut targets),
            }
        }

        targets
    }
}

/// Ray directions for a sliding piece kind.
fn slider_rays(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Rook => &ORTHOGONAL,
        _ => &ALL_DIRECTIONS,
    }
}

/// `true` if `sq` is empty or holds an enemy of `us`.
#[inline]
fn can_land(board: &Board, us: Color, sq: Square) -> bool {
    board.piece_at(sq).is_none_or(|p| p.color() != us)
}

fn gen_pawn(board: &Board, us: Color, from: Square, targets: &mut Vec<Square>) {
    let forward = us.forward();

    if let Some(one) = from.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
        targets.push(one);
        if from.rank() == us.pawn_rank() {
            if let Some(two) = one.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
                targets.push(two);
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(sq) = from.offset(forward, d_file) else {
            continue;
        };
        if board.piece_at(sq).is_some_and(|p| p.color() != us) {
            targets.push(sq);
        }
    }
}

fn gen_steps(board: &Board, us: Color, from: Square, steps: &[(i8, i8)], targets: &mut Vec<Square>) {
    targets.extend(
        steps
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .filter(|&sq| can_land(board, us, sq)),
    );
}

fn gen_rays(board: &Board, us: Color, from: Square, rays: &[(i8, i8)], targets: &mut Vec<Square>) {
    for &(dr, df) in rays {
        let mut current = from;
        while let Some(sq) = current.offset(dr, df) {
            match board.piece_at(sq) {
                None => targets.push(sq),
                Some(p) => {
                    if p.color() != us {
                        targets.push(sq);
                    }
                    break;
                }
            }
            current = sq;
        }
    }
}
