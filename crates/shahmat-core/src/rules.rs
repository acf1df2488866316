//! Movement patterns for each piece kind.
//!
//! These are the pure geometric rules: they look at the source square, the
//! destination square and the color of whatever stands on the destination.
//! Obstruction along the way is the job of [`crate::path`].

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Piece {
    /// Return `true` if this piece's movement pattern allows going to `to`,
    /// given the color of the piece standing there, if any.
    ///
    /// An unplaced piece reaches nothing.
    pub fn can_reach(&self, to: Square, occupant: Option<Color>) -> bool {
        let Some(from) = self.square() else {
            return false;
        };
        let (dx, dy) = from.delta(to);
        let color = self.color();

        match self.kind() {
            PieceKind::Pawn => pawn_pattern(color, self.is_first_move(), dx, dy, occupant),
            PieceKind::Rook => rook_line(dx, dy) && may_land(color, occupant),
            PieceKind::Knight => knight_jump(dx, dy) && may_land(color, occupant),
            PieceKind::Bishop => bishop_line(dx, dy) && may_land(color, occupant),
            PieceKind::Queen => {
                (rook_line(dx, dy) || bishop_line(dx, dy)) && may_land(color, occupant)
            }
            PieceKind::King => king_step(dx, dy) && may_land(color, occupant),
        }
    }
}

/// Shared capture rule: the destination is empty or holds an enemy.
#[inline]
fn may_land(color: Color, occupant: Option<Color>) -> bool {
    occupant != Some(color)
}

fn pawn_pattern(color: Color, first_move: bool, dx: i8, dy: i8, occupant: Option<Color>) -> bool {
    let dir = color.forward();
    match occupant {
        // Diagonal capture only; straight moves never capture.
        Some(other) => other != color && dy == dir && dx.abs() == 1,
        None => dx == 0 && (dy == dir || (first_move && dy == 2 * dir)),
    }
}

#[inline]
fn rook_line(dx: i8, dy: i8) -> bool {
    (dx == 0) != (dy == 0)
}

#[inline]
fn bishop_line(dx: i8, dy: i8) -> bool {
    dx != 0 && dx.abs() == dy.abs()
}

#[inline]
fn knight_jump(dx: i8, dy: i8) -> bool {
    dx.abs() * dy.abs() == 2
}

#[inline]
fn king_step(dx: i8, dy: i8) -> bool {
    dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0)
}

#[cfg(test)]
mod tests {
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn white(kind: PieceKind, sq: Square) -> Piece {
        Piece::placed(kind, Color::White, sq)
    }

    fn black(kind: PieceKind, sq: Square) -> Piece {
        Piece::placed(kind, Color::Black, sq)
    }

    const ENEMY_OF_WHITE: Option<Color> = Some(Color::Black);

    #[test]
    fn unplaced_piece_reaches_nothing() {
        let queen = Piece::new(PieceKind::Queen, Color::White);
        assert!(Square::all().all(|sq| !queen.can_reach(sq, None)));
    }

    #[test]
    fn pawn_single_and_double_advance() {
        let pawn = white(PieceKind::Pawn, Square::E2);
        assert!(pawn.can_reach(Square::E3, None));
        assert!(pawn.can_reach(Square::E4, None));
        assert!(!pawn.can_reach(Square::E5, None));

        let pawn = black(PieceKind::Pawn, Square::D7);
        assert!(pawn.can_reach(Square::D6, None));
        assert!(pawn.can_reach(Square::D5, None));
        assert!(!pawn.can_reach(Square::D8, None));
    }

    #[test]
    fn pawn_double_advance_needs_first_move() {
        let mut pawn = white(PieceKind::Pawn, Square::E3);
        pawn.mark_moved();
        assert!(pawn.can_reach(Square::E4, None));
        assert!(!pawn.can_reach(Square::E5, None));
    }

    #[test]
    fn pawn_never_moves_backward() {
        let pawn = white(PieceKind::Pawn, Square::E4);
        assert!(!pawn.can_reach(Square::E3, None));
        assert!(!pawn.can_reach(Square::D3, ENEMY_OF_WHITE));
    }

    #[test]
    fn pawn_straight_advance_cannot_capture() {
        let pawn = white(PieceKind::Pawn, Square::E2);
        assert!(!pawn.can_reach(Square::E3, ENEMY_OF_WHITE));
        assert!(!pawn.can_reach(Square::E4, ENEMY_OF_WHITE));
        assert!(!pawn.can_reach(Square::E3, Some(Color::White)));
    }

    #[test]
    fn pawn_captures_diagonally_forward_only_onto_enemies() {
        let pawn = white(PieceKind::Pawn, Square::E4);
        assert!(pawn.can_reach(Square::D5, ENEMY_OF_WHITE));
        assert!(pawn.can_reach(Square::F5, ENEMY_OF_WHITE));
        assert!(!pawn.can_reach(Square::D5, None), "no en passant");
        assert!(!pawn.can_reach(Square::D5, Some(Color::White)));
        assert!(!pawn.can_reach(Square::C6, ENEMY_OF_WHITE));
    }

    #[test]
    fn rook_moves_along_ranks_and_files() {
        let rook = white(PieceKind::Rook, Square::A1);
        assert!(rook.can_reach(Square::H1, None));
        assert!(rook.can_reach(Square::A8, ENEMY_OF_WHITE));
        assert!(!rook.can_reach(Square::B2, None));
        assert!(!rook.can_reach(Square::A2, Some(Color::White)));
    }

    #[test]
    fn knight_jumps_in_an_l() {
        let knight = white(PieceKind::Knight, Square::B1);
        assert!(knight.can_reach(Square::C3, None));
        assert!(knight.can_reach(Square::A3, None));
        assert!(knight.can_reach(Square::D2, ENEMY_OF_WHITE));
        assert!(!knight.can_reach(Square::B3, None));
        assert!(!knight.can_reach(Square::C3, Some(Color::White)));
        let reachable = Square::all().filter(|&sq| knight.can_reach(sq, None)).count();
        assert_eq!(reachable, 3);
    }

    #[test]
    fn bishop_moves_diagonally() {
        let bishop = black(PieceKind::Bishop, Square::C8);
        assert!(bishop.can_reach(Square::H3, None));
        assert!(bishop.can_reach(Square::A6, Some(Color::White)));
        assert!(!bishop.can_reach(Square::C6, None));
        assert!(!bishop.can_reach(Square::D7, Some(Color::Black)));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let queen = white(PieceKind::Queen, Square::D4);
        assert!(queen.can_reach(Square::D8, None));
        assert!(queen.can_reach(Square::A4, None));
        assert!(queen.can_reach(Square::G7, ENEMY_OF_WHITE));
        assert!(queen.can_reach(Square::A1, None));
        assert!(!queen.can_reach(Square::E6, None));
        let reachable = Square::all().filter(|&sq| queen.can_reach(sq, None)).count();
        assert_eq!(reachable, 27);
    }

    #[test]
    fn king_steps_one_square() {
        let king = white(PieceKind::King, Square::E1);
        assert!(king.can_reach(Square::E2, None));
        assert!(king.can_reach(Square::F2, ENEMY_OF_WHITE));
        assert!(!king.can_reach(Square::E3, None));
        assert!(!king.can_reach(Square::G1, None), "no castling");
        assert!(!king.can_reach(Square::D1, Some(Color::White)));
    }

    #[test]
    fn no_piece_reaches_its_own_square() {
        for kind in PieceKind::ALL {
            let piece = white(kind, Square::D4);
            assert!(!piece.can_reach(Square::D4, None), "{kind}");
        }
    }
}
