//! The interactive game: setup, alternating turns, and the closing summary.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use shahmat_core::{Board, Color, MoveError, QUIT_TOKEN};

use crate::command::{SetupMode, TokenReader, parse_setup_entry};
use crate::error::CliError;

/// Token that ends a custom setup.
const SETUP_DONE: &str = "done";

/// Knobs for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Setup mode to use without asking; `None` prompts for it.
    pub mode: Option<SetupMode>,
    /// Paint pieces with ANSI colors when printing the board.
    pub color: bool,
    /// Print the capture tally when the game ends.
    pub show_captures: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: None,
            color: true,
            show_captures: true,
        }
    }
}

/// One game between two players sharing a terminal.
///
/// The session owns the board and whose turn it is. The turn passes only
/// after an accepted move.
pub struct GameSession {
    board: Board,
    turn: Color,
    config: SessionConfig,
}

impl GameSession {
    /// Create a session on the starting position with White to move.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            config,
        }
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Run the game until the quit token or the end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), CliError> {
        let mut tokens = TokenReader::new(input);
        info!(mode = ?self.config.mode, "game session started");

        if self.prepare(&mut tokens, &mut out)? {
            self.play(&mut tokens, &mut out)?;
        }

        writeln!(out, "Game over.")?;
        if self.config.show_captures {
            writeln!(
                out,
                "White pieces captured: {}   Black pieces captured: {}",
                self.board.captured(Color::White),
                self.board.captured(Color::Black)
            )?;
        }
        out.flush()?;
        info!(
            white_captured = self.board.captured(Color::White),
            black_captured = self.board.captured(Color::Black),
            "game session ended"
        );
        Ok(())
    }

    /// Pick the setup mode and build the board. Returns `false` if input ran out.
    fn prepare<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<bool, CliError> {
        let mode = match self.config.mode {
            Some(mode) => mode,
            None => loop {
                writeln!(out, "Choose mode: default or create")?;
                out.flush()?;
                let Some(word) = tokens.next_token()? else {
                    return Ok(false);
                };
                match word.parse::<SetupMode>() {
                    Ok(mode) => break mode,
                    Err(err) => writeln!(out, "Error: {err}")?,
                }
            },
        };

        match mode {
            SetupMode::Default => Ok(true),
            SetupMode::Create => self.custom_setup(tokens, out),
        }
    }

    /// Clear the board and place pieces from entries until `done`.
    fn custom_setup<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<bool, CliError> {
        self.board.clear();
        loop {
            write!(out, "Enter a piece (e.g. W R A1) or \"{SETUP_DONE}\": ")?;
            out.flush()?;
            let Some(color) = tokens.next_token()? else {
                return Ok(false);
            };
            if color.eq_ignore_ascii_case(SETUP_DONE) {
                debug!(pieces = self.board.pieces().count(), "custom setup finished");
                return Ok(true);
            }
            let (Some(piece), Some(square)) = (tokens.next_token()?, tokens.next_token()?) else {
                return Ok(false);
            };
            match parse_setup_entry(&color, &piece, &square) {
                Ok((color, kind, square)) => {
                    self.board.place_piece(kind, color, square);
                    debug!(%color, %kind, %square, "piece placed");
                }
                Err(err) => {
                    warn!(error = %err, "invalid setup entry");
                    writeln!(out, "Error: {err}")?;
                }
            }
        }
    }

    /// Alternate turns until a player quits or input runs out.
    fn play<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<(), CliError> {
        loop {
            writeln!(out, "{}", self.board.pretty().colored(self.config.color))?;
            write!(out, "{} to move, enter a move (E2 E4) or 0 to quit: ", self.turn)?;
            out.flush()?;

            let Some(from) = tokens.next_token()? else {
                return Ok(());
            };
            if from == QUIT_TOKEN {
                return Ok(());
            }
            let Some(to) = tokens.next_token()? else {
                return Ok(());
            };

            match self.board.attempt_move(&from, &to, self.turn) {
                Ok(report) => {
                    writeln!(out)?;
                    if report.gives_check {
                        writeln!(out, "Check!")?;
                    }
                    self.turn = !self.turn;
                }
                Err(MoveError::GameTerminationRequested) => return Ok(()),
                Err(err) => writeln!(out, "\nError: {err}. Try again.")?,
            }
        }
    }
}
