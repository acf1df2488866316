//! Check detection by scanning every enemy piece.

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::path::is_path_clear;
use crate::square::Square;

impl Board {
    /// Return the squares of `by` pieces that could move onto `target`, as if
    /// an enemy of `by` stood there.
    pub fn attackers_of(&self, target: Square, by: Color) -> impl Iterator<Item = Square> + '_ {
        let victim = Some(by.flip());
        self.pieces()
            .filter(move |piece| piece.color() == by)
            .filter_map(move |piece| {
                let from = piece.square()?;
                let hits = piece.can_reach(target, victim)
                    && is_path_clear(self, from, target, piece.kind());
                hits.then_some(from)
            })
    }

    /// Return `true` if any `by` piece attacks `target`.
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        self.attackers_of(target, by).next().is_some()
    }

    /// Return `true` if the king of `color` is attacked.
    ///
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            trace!(%color, "no king on the board");
            return false;
        };
        let in_check = self.is_attacked(king, color.flip());
        trace!(%color, %king, in_check, "check scan");
        in_check
    }
}
