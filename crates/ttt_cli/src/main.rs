//! `ttt` - play tic-tac-toe against a minimax engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ttt_engine::FirstMover;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    match cli.command {
        Command::Play {
            ai_first,
            show_scores,
        } => {
            let mut config = config;
            if ai_first {
                config = config.with_first_mover(FirstMover::Ai);
            }
            if show_scores {
                config = config.with_show_scores(true);
            }
            info!(first_mover = ?config.first_mover(), "Starting interactive game");
            let stdin = std::io::stdin();
            session::play(stdin.lock(), &mut output, &config)?;
        }
        Command::SelfPlay { games } => {
            session::self_play(games, &mut output)?;
        }
        Command::Analyze { board, to_move } => {
            let board = input::parse_board(&board).context("Invalid --board")?;
            session::analyze(&board, to_move.into(), &mut output)?;
        }
    }

    Ok(())
}
