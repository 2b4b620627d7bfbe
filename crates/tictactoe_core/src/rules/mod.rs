//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a board snapshot. Rules are kept apart from
//! the round state machine so they can be checked against any board,
//! including ones no legal game reaches.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{evaluate_winner, LINES, Win};

use crate::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board, derived purely from its squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and at least one empty square.
    InProgress,
    /// A player completed a line.
    Won(Win),
    /// Board full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(win) => write!(f, "{} wins", win.player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board: a winner takes precedence over a full board.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(win) = evaluate_winner(board) {
        GameStatus::Won(win)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        // X X X / O O X / X O O
        use Player::{O, X};
        let marks = [X, X, X, O, O, X, X, O, O];
        let board = Board::from_squares(marks.map(Square::Occupied));
        match status(&board) {
            GameStatus::Won(win) => {
                assert_eq!(win.player, X);
                assert_eq!(
                    win.line,
                    [Position::TopLeft, Position::TopCenter, Position::TopRight]
                );
            }
            other => panic!("expected win, got {other:?}"),
        }
    }

    #[test]
    fn test_terminal_flags() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }
}
