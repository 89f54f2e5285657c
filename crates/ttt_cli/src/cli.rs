//! Command-line interface for the `ttt` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ttt_engine::Player;

/// Tic-tac-toe against an unbeatable minimax engine
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "ttt.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Let the engine open (overrides `first_mover` in the config)
        #[arg(long)]
        ai_first: bool,

        /// Print the minimax score of every engine candidate move
        #[arg(long)]
        show_scores: bool,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Number of games; openers alternate starting with X
        #[arg(short, long, default_value = "2")]
        games: u32,
    },

    /// Score every available move of a position
    Analyze {
        /// Board as three rows separated by `|`, using X, O and `.`
        #[arg(long)]
        board: String,

        /// Side to move
        #[arg(long, value_enum, default_value = "o")]
        to_move: Side,
    },
}

/// Side selector for the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human mark
    X,
    /// The engine mark
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
