use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;

use shahmat_cli::{GameSession, SessionConfig, SetupMode};

/// Two-player chess on a shared terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Board setup, `default` or `create`. Asked for when omitted.
    #[arg(long)]
    mode: Option<SetupMode>,
    /// Print pieces without ANSI colors.
    #[arg(long)]
    no_color: bool,
    /// Skip the capture tally at the end of the game.
    #[arg(long)]
    no_captures: bool,
    /// Diagnostics level, written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level)
        .init();
    info!("shahmat starting");

    let mut session = GameSession::new(SessionConfig {
        mode: config.mode,
        color: !config.no_color,
        show_captures: !config.no_captures,
    });
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
