//! The board: piece placement and capture tally.

use std::fmt;

use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Back-rank layout from file A to file H.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces plus the number of pieces captured per color.
///
/// The board owns every piece on it. Capturing a piece drops it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// One slot per square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    /// Captured pieces, indexed by the color of the captured piece.
    captured: [u32; Color::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            captured: [0; Color::COUNT],
        }
    }

    /// Return the standard 32-piece starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.place_piece(kind, Color::Black, Square::new(Rank::Rank8, file));
            board.place_piece(PieceKind::Pawn, Color::Black, Square::new(Rank::Rank7, file));
            board.place_piece(PieceKind::Pawn, Color::White, Square::new(Rank::Rank2, file));
            board.place_piece(kind, Color::White, Square::new(Rank::Rank1, file));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.squares[sq.index()].as_ref()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Put a fresh piece on `sq` and return whatever stood there before.
    ///
    /// No position rules are enforced here: a side may end up with zero or
    /// several kings.
    pub fn place_piece(&mut self, kind: PieceKind, color: Color, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].replace(Piece::placed(kind, color, sq))
    }

    /// Take the piece off `sq`, if any.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Remove every piece. The capture tally is kept.
    pub fn clear(&mut self) {
        self.squares = [None; Square::COUNT];
    }

    /// Return how many pieces of `color` have been captured.
    #[inline]
    pub fn captured(&self, color: Color) -> u32 {
        self.captured[color.index()]
    }

    /// Count a capture of a `color` piece.
    #[inline]
    pub(crate) fn record_capture(&mut self, color: Color) {
        self.captured[color.index()] += 1;
    }

    /// Move the piece on `from` to the empty square `to`, updating its square.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<&mut Piece> {
        let mut piece = self.squares[from.index()].take()?;
        piece.set_square(to);
        let slot = &mut self.squares[to.index()];
        *slot = Some(piece);
        slot.as_mut()
    }

    /// Iterate over every piece on the board in print order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    /// Return the square of the first king of `color` found in print order.
    ///
    /// `None` when the side has no king, which custom setups allow.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.kind() == PieceKind::King && p.color() == color)
            .and_then(Piece::square)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            colored: false,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("pieces", &self.pieces().collect::<Vec<_>>())
            .field("captured", &self.captured)
            .finish()
    }
}

/// Wrapper for printing a board as an 8x8 grid with rank 8 on top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    colored: bool,
}

impl PrettyBoard<'_> {
    /// Paint White pieces green and Black pieces red with ANSI escapes.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn write_piece(&self, f: &mut fmt::Formatter<'_>, piece: &Piece) -> fmt::Result {
        if !self.colored {
            return write!(f, "{}", piece.symbol());
        }
        let paint = match piece.color() {
            Color::White => GREEN,
            Color::Black => RED,
        };
        write!(f, "{paint}{}{RESET}", piece.kind().letter())
    }
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::ALL {
                match self.board.piece_at(Square::new(rank, file)) {
                    Some(piece) => self.write_piece(f, piece)?,
                    None => write!(f, ".")?,
                }
                write!(f, " ")?;
            }
            writeln!(f, "{rank}")?;
        }
        write!(f, "  A B C D E F G H")
    }
}
