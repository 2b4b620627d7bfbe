//! Alternating turn invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the round's moves alternate starting from the round starter,
/// and the player to move follows from the history.
///
/// The starter is X for a fresh round, but a round abandoned mid-play hands
/// the opening move to whoever was next.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let mut expected = game.round_starter();
        for mv in game.history() {
            if mv.player != expected {
                return false;
            }
            expected = expected.opponent();
        }

        // A finished round leaves the last mover as current player.
        match game.history().last() {
            Some(last) if game.is_game_over() => game.current_player() == last.player,
            _ => game.current_player() == expected,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns from the round starter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_holds_after_mid_round_restart() {
        let mut game = GameState::new();
        game.apply_move(0);
        game.start_new_round();
        game.apply_move(4);
        assert_eq!(game.history()[0].player, Player::O);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_win() {
        let mut game = GameState::new();
        for i in [0, 4, 1, 5, 2] {
            game.apply_move(i);
        }
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_player_violates() {
        let mut game = GameState::new();
        game.apply_move(0);
        game.history.push(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
