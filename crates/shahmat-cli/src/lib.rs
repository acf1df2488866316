//! Text front end for shahmat: input parsing and the interactive game session.

pub mod command;
pub mod error;
pub mod session;

pub use command::{SetupMode, TokenReader, parse_setup_entry};
pub use error::{CliError, ModeError, SetupError};
pub use session::{GameSession, SessionConfig};
