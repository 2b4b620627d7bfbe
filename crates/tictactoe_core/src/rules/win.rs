//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// When several lines are complete at once (only reachable from an
/// illegal board) the earliest one here is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Owner of the line.
    pub player: Player,
    /// The three positions of the line, in `LINES` order.
    pub line: [Position; 3],
}

impl Win {
    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line of [`LINES`] whose three squares hold the same
/// mark. Total over every board, legal or not.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Win> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(Win { player, line });
        }
    }

    None
}
