//! Application state and command dispatch.

use super::input::{move_cursor, CursorMove};
use tictactoe_core::{GameState, GameStatus, MoveOutcome, Position};
use tracing::{debug, instrument};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Move the cursor.
    MoveCursor(CursorMove),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific cell.
    PlaceAt(Position),
    /// Clear the board, keep the scores.
    NewRound,
    /// Clear the board and the scores.
    ResetAll,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    last_event: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            last_event: "New game. X moves first.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Description of the last thing that happened.
    pub fn last_event(&self) -> &str {
        &self.last_event
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Short status chip text derived from the board.
    pub fn status_chip(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("{} to move", self.game.current_player()),
            GameStatus::Won(win) => format!("{} wins!", win.player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Applies a command.
    ///
    /// Rejected placements are ignored without touching the message line.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: AppCommand) {
        match command {
            AppCommand::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            AppCommand::PlaceAtCursor => self.place(self.cursor),
            AppCommand::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            AppCommand::NewRound => {
                self.game.start_new_round();
                self.last_event = format!(
                    "New round. {} moves first.",
                    self.game.current_player()
                );
            }
            AppCommand::ResetAll => {
                self.game.reset_all();
                self.cursor = Position::Center;
                self.last_event = "Scores reset. X moves first.".to_string();
            }
            AppCommand::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, pos: Position) {
        match self.game.apply_position(pos) {
            MoveOutcome::Placed(mv) => {
                self.last_event = format!("{} played {}", mv.player, mv.position.label());
            }
            MoveOutcome::Won(mv, _) => {
                self.last_event = format!(
                    "{} completes a line at {}. Press 'n' for a new round.",
                    mv.player,
                    mv.position.label()
                );
            }
            MoveOutcome::Drawn(_) => {
                self.last_event = "Board full. Press 'n' for a new round.".to_string();
            }
            MoveOutcome::Rejected(reason) => {
                debug!(%reason, "Ignoring placement");
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Player, Square};

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new();
        app.dispatch(AppCommand::PlaceAtCursor);
        assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(app.status_chip(), "O to move");
        assert_eq!(app.last_event(), "X played Center");
    }

    #[test]
    fn test_rejected_placement_is_silent() {
        let mut app = App::new();
        app.dispatch(AppCommand::PlaceAt(Position::TopLeft));
        let message = app.last_event().to_string();
        let game = app.game().clone();

        app.dispatch(AppCommand::PlaceAt(Position::TopLeft));
        assert_eq!(app.last_event(), message);
        assert_eq!(app.game(), &game);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.dispatch(AppCommand::Quit);
        assert!(app.should_quit());
    }
}
