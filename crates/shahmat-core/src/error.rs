//! Move rejection reasons.

use crate::square::Square;

/// Why a move attempt was not applied.
///
/// Every variant leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// One of the tokens was the quit token; the caller should end the game.
    #[error("game termination requested")]
    GameTerminationRequested,
    /// A token is not two characters long.
    #[error("malformed square \"{token}\", expected something like E2")]
    MalformedInput {
        /// The offending token.
        token: String,
    },
    /// A token is two characters long but does not name a square.
    #[error("square \"{token}\" is off the board")]
    OutOfRange {
        /// The offending token.
        token: String,
    },
    /// The source square is empty.
    #[error("no piece on {square}")]
    NoPieceAtSource {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square belongs to the other side.
    #[error("the piece on {square} is not yours")]
    WrongOwner {
        /// The source square.
        square: Square,
    },
    /// The destination holds a piece of the moving side.
    #[error("cannot capture your own piece on {square}")]
    CaptureOwnPiece {
        /// The destination square.
        square: Square,
    },
    /// The piece does not move that way.
    #[error("the piece on {from} cannot move to {to}")]
    IllegalPattern {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// Something stands between source and destination.
    #[error("the path from {from} to {to} is blocked")]
    PathBlocked {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::MoveError;
    use crate::square::Square;

    #[test]
    fn display_names_squares() {
        let err = MoveError::PathBlocked {
            from: Square::A1,
            to: Square::H1,
        };
        assert_eq!(format!("{err}"), "the path from A1 to H1 is blocked");
    }

    #[test]
    fn display_quotes_tokens() {
        let err = MoveError::OutOfRange {
            token: "Z9".to_string(),
        };
        assert_eq!(format!("{err}"), "square \"Z9\" is off the board");
    }
}
