//! Terminal UI for tic-tac-toe.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument, warn};

use app::App;
use input::key_to_command;
use theme::Theme;

/// Restores the terminal on drop, including on early error returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(theme: Theme) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new();
    let res = event_loop(&mut terminal, &mut app, &theme);
    terminal.show_cursor()?;

    let scores = app.game().scores();
    info!(x = scores.x(), o = scores.o(), draws = scores.draws(), "Session ended");
    res
}

/// Draw, block on the next key press, dispatch; repeat.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    theme: &Theme,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app, theme))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = key_to_command(key.code)
        {
            debug!(?command, "Key command");
            app.dispatch(command);
        }
    }
    Ok(())
}
