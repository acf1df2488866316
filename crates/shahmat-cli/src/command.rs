//! Input parsing: the token stream, setup modes and custom setup entries.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use tracing::debug;

use shahmat_core::{Color, PieceKind, Square};

use crate::error::{CliError, ModeError, SetupError};

/// How the board is prepared before play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMode {
    /// The standard starting position.
    Default,
    /// An empty board filled from setup entries.
    Create,
}

impl FromStr for SetupMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(SetupMode::Default),
            "create" => Ok(SetupMode::Create),
            _ => Err(ModeError {
                mode: s.to_string(),
            }),
        }
    }
}

/// Whitespace-separated tokens read lazily across input lines.
///
/// `E2 E4` on one line and `E2` and `E4` on two lines read the same.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Return the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, CliError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            debug!(line = line.trim_end(), "input line");
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Parse the three fields of a setup entry, e.g. `W`, `R`, `A1`.
///
/// Every field is case-insensitive.
pub fn parse_setup_entry(
    color: &str,
    piece: &str,
    square: &str,
) -> Result<(Color, PieceKind, Square), SetupError> {
    let color = single_char(color)
        .and_then(Color::from_letter)
        .ok_or_else(|| SetupError::UnknownColor {
            found: color.to_string(),
        })?;
    let kind = single_char(piece)
        .and_then(PieceKind::from_letter)
        .ok_or_else(|| SetupError::UnknownPiece {
            found: piece.to_string(),
        })?;
    if square.chars().count() != 2 {
        return Err(SetupError::MalformedSquare {
            found: square.to_string(),
        });
    }
    let square = Square::from_algebraic(square).ok_or_else(|| SetupError::SquareOutOfRange {
        found: square.to_string(),
    })?;
    Ok((color, kind, square))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn modes_ignore_case() {
        assert_eq!("default".parse::<SetupMode>().unwrap(), SetupMode::Default);
        assert_eq!("CREATE".parse::<SetupMode>().unwrap(), SetupMode::Create);
        assert_eq!(
            "custom".parse::<SetupMode>(),
            Err(ModeError {
                mode: "custom".to_string()
            })
        );
        assert_eq!(
            ModeError {
                mode: "custom".to_string()
            }
            .to_string(),
            "unknown mode \"custom\", expected default or create"
        );
    }

    #[test]
    fn tokens_span_lines() {
        let mut reader = TokenReader::new(Cursor::new("E2 E4\n\n  d7\nd5 \n"));
        let mut tokens = Vec::new();
        while let Some(token) = reader.next_token().unwrap() {
            tokens.push(token);
        }
        assert_eq!(tokens, ["E2", "E4", "d7", "d5"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let mut reader = TokenReader::new(Cursor::new(""));
        assert!(reader.next_token().unwrap().is_none());
        assert!(reader.next_token().unwrap().is_none());
    }

    #[test]
    fn setup_entry_valid() {
        assert_eq!(
            parse_setup_entry("W", "R", "A1"),
            Ok((Color::White, PieceKind::Rook, Square::A1))
        );
        assert_eq!(
            parse_setup_entry("b", "k", "e8"),
            Ok((Color::Black, PieceKind::King, Square::E8))
        );
    }

    #[test]
    fn setup_entry_accepts_the_top_rank() {
        assert_eq!(
            parse_setup_entry("B", "Q", "H8"),
            Ok((Color::Black, PieceKind::Queen, Square::H8))
        );
    }

    #[test]
    fn setup_entry_errors() {
        assert!(matches!(
            parse_setup_entry("G", "R", "A1"),
            Err(SetupError::UnknownColor { .. })
        ));
        assert!(matches!(
            parse_setup_entry("WB", "R", "A1"),
            Err(SetupError::UnknownColor { .. })
        ));
        assert!(matches!(
            parse_setup_entry("W", "X", "A1"),
            Err(SetupError::UnknownPiece { .. })
        ));
        assert!(matches!(
            parse_setup_entry("W", "R", "A10"),
            Err(SetupError::MalformedSquare { .. })
        ));
        assert!(matches!(
            parse_setup_entry("W", "R", "J1"),
            Err(SetupError::SquareOutOfRange { .. })
        ));
    }
}
