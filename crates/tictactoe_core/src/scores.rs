//! Session scoreboard.

use crate::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counters for one session.
///
/// Counters only grow between resets; each finished round bumps exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Rounds ending in a draw.
    draws: u32,
}

impl Scores {
    /// Creates an all-zero scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Records a finished round. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won(win) => match win.player {
                Player::X => self.x += 1,
                Player::O => self.o += 1,
            },
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        debug!(x = self.x, o = self.o, draws = self.draws, "Score updated");
    }

    /// Total finished rounds.
    pub fn total_rounds(&self) -> u32 {
        self.x + self.o + self.draws
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
