//! A piece on (or waiting to be put on) the board.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A colored piece with its current square.
///
/// Pawns additionally carry a first-move flag that enables the two-square
/// advance. The flag starts set and is cleared by [`Piece::mark_moved`];
/// nothing sets it again. For every other kind it is always `false`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Option<Square>,
    first_move: bool,
}

impl Piece {
    /// Create an unplaced piece.
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            square: None,
            first_move: matches!(kind, PieceKind::Pawn),
        }
    }

    /// Create a piece standing on `square`.
    pub const fn placed(kind: PieceKind, color: Color, square: Square) -> Piece {
        let mut piece = Piece::new(kind, color);
        piece.square = Some(square);
        piece
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Return the square the piece stands on, or `None` while unplaced.
    #[inline]
    pub const fn square(&self) -> Option<Square> {
        self.square
    }

    /// Return `true` for a pawn that has not moved yet.
    #[inline]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Record that the piece now stands on `square`.
    #[inline]
    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = Some(square);
    }

    /// Clear the first-move flag. Idempotent.
    #[inline]
    pub fn mark_moved(&mut self) {
        self.first_move = false;
    }

    /// Letter shown on the printed board: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.kind.letter())?;
        if let Some(sq) = self.square {
            write!(f, "@{sq}")?;
        }
        Ok(())
    }
}
