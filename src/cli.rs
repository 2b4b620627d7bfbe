//! Command-line interface for tictactoe.

use crate::script::ScriptStep;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with rounds and a scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of steps headlessly and print the result
    Script {
        /// Cell indices 0-8, `n` for a new round, `r` to reset everything
        #[arg(required = true)]
        steps: Vec<ScriptStep>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
