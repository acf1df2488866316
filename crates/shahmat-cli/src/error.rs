//! Front-end errors.

/// Errors that end or prevent a game session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// A setup mode word that is neither `default` nor `create`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode \"{mode}\", expected default or create")]
pub struct ModeError {
    /// The word that was entered.
    pub mode: String,
}

/// Reasons a custom setup entry such as `W R A1` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The color field is not `W` or `B`.
    #[error("unknown color \"{found}\", expected W or B")]
    UnknownColor {
        /// The color field as entered.
        found: String,
    },

    /// The piece field is not one of `K Q R B N P`.
    #[error("unknown piece \"{found}\", expected one of K Q R B N P")]
    UnknownPiece {
        /// The piece field as entered.
        found: String,
    },

    /// The square field is not two characters long.
    #[error("malformed square \"{found}\", expected something like A1")]
    MalformedSquare {
        /// The square field as entered.
        found: String,
    },

    /// The square field does not name a square on the board.
    #[error("square \"{found}\" is off the board")]
    SquareOutOfRange {
        /// The square field as entered.
        found: String,
    },
}
