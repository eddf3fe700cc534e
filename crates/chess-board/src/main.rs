//! chess-board - play chess in the terminal with pointer and key events.
//!
//! Reads one command per line from stdin (`click <x> <y>`, `at e2`,
//! `move e2e4`, `key r`, `hint`, `show`, `json`, `quit`).

use anyhow::Context;
use chess_board::{Shell, ShellConfig};
use chess_engine::GameState;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Two-player chess board driven from stdin.
#[derive(Parser)]
#[command(name = "chess-board")]
#[command(about = "Two-player chess board driven by pointer and key events on stdin")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = ShellConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Square size in pointer coordinates, overriding the config
    #[arg(long)]
    square_size: Option<u32>,

    /// Print FEN letters without colors
    #[arg(long)]
    plain: bool,

    /// Starting position: piece placement and optional side to move
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut config = ShellConfig::load(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(size) = args.square_size {
        config.square_size = size;
    }
    if args.plain {
        config.color = false;
    }
    config.validate()?;

    let game = match &args.fen {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("parsing --fen '{fen}'"))?,
        None => GameState::new(),
    };

    tracing::info!(
        square_size = config.square_size,
        color = config.color,
        fen = %game.to_fen(),
        "starting chess-board"
    );

    let mut shell = Shell::with_game(config, game);
    shell.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
