//! First-class invariants for a tic-tac-toe session.
//!
//! Invariants are properties every reachable [`GameState`] satisfies.
//! They are checked after each command in debug builds and can be tested
//! independently.

use crate::GameState;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod cached_status;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cached_status::CachedStatusInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All session invariants as a composable set.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    CachedStatusInvariant,
);

/// Panics in debug builds if any invariant fails.
pub(crate) fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = TicTacToeInvariants::check_all(game)
    {
        for violation in &violations {
            error!(%violation, "Invariant check failed");
        }
        panic!("{} invariant(s) violated: {:?}", violations.len(), violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TicTacToeInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        for i in [0, 4, 2] {
            game.apply_move(i);
        }
        assert!(TicTacToeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = GameState::new();
        game.apply_move(4);
        // Corrupt the board behind the history's back and fake a finish.
        game.board.set(Position::TopLeft, Square::Occupied(Player::O));
        game.game_over = true;

        let violations = TicTacToeInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
