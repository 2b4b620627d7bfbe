//! tictactoe - terminal tic-tac-toe with a scoreboard.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::cli::{Cli, Command};
use tictactoe_tui::script::run_script;
use tictactoe_tui::tui::{run_tui, theme::Theme};
use tictactoe_tui::{init_tracing, AppConfig};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_tracing(&config)?;

    match cli.command() {
        Command::Play => {
            let theme = Theme::from_config(config.theme())?;
            run_tui(theme)
        }
        Command::Script { steps, json } => {
            info!(steps = steps.len(), json, "Running script");
            let report = run_script(&steps);
            if json {
                println!("{}", serde_json::to_string_pretty(&report.snapshot())?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(())
        }
    }
}
