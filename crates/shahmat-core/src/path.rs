//! Obstruction checks along a piece's line of travel.

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Iterator over the squares strictly between two squares on a line.
///
/// Steps one square at a time by the sign of each axis delta. The caller is
/// expected to pass squares on a common rank, file or diagonal; for other
/// pairs the walk still ends, at the latest on the board edge.
#[derive(Debug, Clone)]
pub struct Between {
    next: Option<Square>,
    to: Square,
    step: (i8, i8),
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        if current == self.to {
            self.next = None;
            return None;
        }
        self.next = current.offset(self.step.0, self.step.1);
        Some(current)
    }
}

/// Return the squares strictly between `from` and `to`.
pub fn between(from: Square, to: Square) -> Between {
    let (dx, dy) = from.delta(to);
    let step = (dx.signum(), dy.signum());
    let next = if step == (0, 0) {
        None
    } else {
        from.offset(step.0, step.1)
    };
    Between { next, to, step }
}

/// Return `true` if nothing stands between `from` and `to` for a `kind` piece.
///
/// Knights jump, so their path is always clear.
pub fn is_path_clear(board: &Board, from: Square, to: Square, kind: PieceKind) -> bool {
    if kind.is_leaper() {
        return true;
    }
    between(from, to).all(|sq| board.piece_at(sq).is_none())
}
