//! Moves and move outcomes.
//!
//! Moves are domain events: they record who played where, and the outcome
//! of applying one is a value the caller inspects rather than an error to
//! propagate.

use crate::{Player, Position, Win};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was ignored.
///
/// Rejections leave the match untouched; front ends usually drop them
/// silently, the way a stray click on a filled cell does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round is already over.
    #[display("Round is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Mark placed; the round continues with the opponent to move.
    Placed(Move),
    /// Mark placed and it completed a line.
    Won(Move, Win),
    /// Mark placed and filled the board with no winner.
    Drawn(Move),
    /// Nothing changed.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Whether the match state changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// The move that was applied, if any.
    pub fn applied_move(&self) -> Option<Move> {
        match self {
            MoveOutcome::Placed(mv) | MoveOutcome::Won(mv, _) | MoveOutcome::Drawn(mv) => {
                Some(*mv)
            }
            MoveOutcome::Rejected(_) => None,
        }
    }
}
