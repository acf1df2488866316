//! The move protocol: validate a requested move in full, then apply it.

use tracing::{debug, info};

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::path::is_path_clear;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Token that asks to end the game instead of naming a square.
pub const QUIT_TOKEN: &str = "0";

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Kind of the piece that moved.
    pub moved: PieceKind,
    /// Kind of the piece taken on the destination, if any.
    pub captured: Option<PieceKind>,
    /// Whether the opponent's king is attacked after the move.
    pub gives_check: bool,
}

impl Board {
    /// Parse two square tokens and play the move for `mover`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// quit token, token format (both tokens), square range (both tokens),
    /// then the board checks of [`Board::make_move`]. A rejected move leaves
    /// the board untouched.
    pub fn attempt_move(
        &mut self,
        from: &str,
        to: &str,
        mover: Color,
    ) -> Result<MoveReport, MoveError> {
        let (from, to) = (from.trim(), to.trim());
        if from == QUIT_TOKEN || to == QUIT_TOKEN {
            return Err(MoveError::GameTerminationRequested);
        }
        check_format(from)?;
        check_format(to)?;
        let from = parse_square(from)?;
        let to = parse_square(to)?;
        self.make_move(from, to, mover)
    }

    /// Play `from` -> `to` for `mover` if the move is legal.
    ///
    /// On success any piece on `to` is captured and counted, the moving piece
    /// takes its place, a moving pawn loses its first-move flag, and the
    /// report tells whether the opponent is now in check.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        mover: Color,
    ) -> Result<MoveReport, MoveError> {
        let moved = match self.validate_move(from, to, mover) {
            Ok(kind) => kind,
            Err(err) => {
                debug!(%from, %to, %mover, error = %err, "move rejected");
                return Err(err);
            }
        };

        let captured = self.remove_piece(to);
        if let Some(victim) = &captured {
            self.record_capture(victim.color());
        }
        if let Some(piece) = self.relocate(from, to)
            && piece.kind() == PieceKind::Pawn
        {
            piece.mark_moved();
        }

        let report = MoveReport {
            from,
            to,
            moved,
            captured: captured.map(|p| p.kind()),
            gives_check: self.is_in_check(mover.flip()),
        };
        debug!(%from, %to, %mover, piece = %moved, captured = ?report.captured, "move applied");
        if report.gives_check {
            info!(side = %mover.flip(), "king in check");
        }
        Ok(report)
    }

    /// Run every board check without touching the board.
    fn validate_move(
        &self,
        from: Square,
        to: Square,
        mover: Color,
    ) -> Result<PieceKind, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        if piece.color() != mover {
            return Err(MoveError::WrongOwner { square: from });
        }
        let occupant = self.color_at(to);
        if occupant == Some(mover) {
            return Err(MoveError::CaptureOwnPiece { square: to });
        }
        if !piece.can_reach(to, occupant) {
            return Err(MoveError::IllegalPattern { from, to });
        }
        if !is_path_clear(self, from, to, piece.kind()) {
            return Err(MoveError::PathBlocked { from, to });
        }
        Ok(piece.kind())
    }
}

fn check_format(token: &str) -> Result<(), MoveError> {
    if token.chars().count() == 2 {
        Ok(())
    } else {
        Err(MoveError::MalformedInput {
            token: token.to_string(),
        })
    }
}

fn parse_square(token: &str) -> Result<Square, MoveError> {
    Square::from_algebraic(token).ok_or_else(|| MoveError::OutOfRange {
        token: token.to_string(),
    })
}
