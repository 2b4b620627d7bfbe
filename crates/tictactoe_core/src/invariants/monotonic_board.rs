//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState, Square};

/// Invariant: replaying the round's history on an empty board, each move
/// landing on an empty square, reproduces the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mv in game.history() {
            if !reconstructed.is_empty(mv.position) {
                return false;
            }
            reconstructed.set(mv.position, Square::Occupied(mv.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
