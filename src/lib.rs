//! Terminal tic-tac-toe built on `tictactoe_core`.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for logging and the color theme
//! - **TUI**: interactive board, status chip and scoreboard (ratatui)
//! - **Script**: headless runner that applies a list of steps and reports
//!
//! All game rules live in `tictactoe_core`; this crate only translates
//! input into core commands and renders the resulting state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
pub mod script;
pub mod tui;

pub use config::{AppConfig, ConfigError, ThemeConfig, DEFAULT_CONFIG_FILE};
pub use logging::init_tracing;
