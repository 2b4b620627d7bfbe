//! Cached status invariant.

use super::Invariant;
use crate::{GameState, GameStatus};

/// Invariant: the cached `game_over` flag and winning line agree with the
/// status derived from the board.
pub struct CachedStatusInvariant;

impl Invariant<GameState> for CachedStatusInvariant {
    fn holds(game: &GameState) -> bool {
        let status = game.status();
        let expected_line = match status {
            GameStatus::Won(win) => Some(win),
            GameStatus::InProgress | GameStatus::Draw => None,
        };

        game.is_game_over() == status.is_terminal() && game.winning_line == expected_line
    }

    fn description() -> &'static str {
        "Cached game-over flag and winning line match the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_draw() {
        let mut game = GameState::new();
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.apply_move(i);
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(CachedStatusInvariant::holds(&game));
    }

    #[test]
    fn test_stale_winning_line_violates() {
        let mut game = GameState::new();
        for i in [0, 4, 1, 5, 2] {
            game.apply_move(i);
        }
        game.winning_line = None;
        assert!(!CachedStatusInvariant::holds(&game));
    }
}
