//! A piece: kind plus team.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece on the board.
///
/// Compared and copied by value, so anything holding a `Piece` keeps the
/// identity it saw even after the board changes underneath it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// FEN letter for this piece.
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind.fen_char().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn fen_char_case_selects_color() {
        let white_rook = Piece::from_fen_char('R').unwrap();
        assert_eq!(white_rook.kind(), PieceKind::Rook);
        assert_eq!(white_rook.color(), Color::White);

        let black_knight = Piece::from_fen_char('n').unwrap();
        assert_eq!(black_knight, Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(Piece::from_fen_char('?'), None);
    }

    #[test]
    fn display_and_debug() {
        let queen = Piece::new(PieceKind::Queen, Color::Black);
        assert_eq!(format!("{queen}"), "q");
        assert_eq!(format!("{queen:?}"), "BQ");
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(format!("{pawn}"), "P");
        assert_eq!(format!("{pawn:?}"), "WP");
    }
}
