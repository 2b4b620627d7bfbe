//! Keyboard mapping.

use super::app::AppCommand;
use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(2), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key to an application command.
///
/// Digits 1-9 address cells directly in keypad-legend order (1 is top-left).
pub fn key_to_command(key: KeyCode) -> Option<AppCommand> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(AppCommand::MoveCursor(CursorMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(AppCommand::MoveCursor(CursorMove::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(AppCommand::MoveCursor(CursorMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(AppCommand::MoveCursor(CursorMove::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppCommand::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(AppCommand::PlaceAt),
        KeyCode::Char('n') => Some(AppCommand::NewRound),
        KeyCode::Char('r') => Some(AppCommand::ResetAll),
        KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
        _ => None,
    }
}
