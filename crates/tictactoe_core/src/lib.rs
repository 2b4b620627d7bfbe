//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Rules**: pure board classification ([`evaluate_winner`], [`is_full`], [`status`])
//! - **Game**: the session state machine ([`GameState`]) with round and reset commands
//! - **Scores**: per-session win/draw counters ([`Scores`])
//! - **Invariants**: properties every reachable state satisfies
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell);
//! }
//! assert!(matches!(game.status(), GameStatus::Won(win) if win.player == Player::X));
//! assert_eq!(*game.scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod scores;
mod types;

pub use action::{Move, MoveOutcome, RejectReason};
pub use game::GameState;
pub use position::Position;
pub use rules::{evaluate_winner, is_full, status, GameStatus, Win, LINES};
pub use scores::Scores;
pub use types::{Board, Player, Square};

/// Alias used by front ends that talk about marks rather than players.
pub type Mark = Player;
