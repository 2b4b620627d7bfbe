//! Headless runner: plays a scripted sequence of commands.

use derive_more::{Display, Error};
use serde::Serialize;
use std::str::FromStr;
use tictactoe_core::{GameState, GameStatus, MoveOutcome, RejectReason, Scores, Square};
use tracing::{debug, info, instrument};

/// One scripted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Place the current player's mark at a cell index.
    Cell(usize),
    /// Start a new round (`n`).
    NewRound,
    /// Reset board and scores (`r`).
    ResetAll,
}

/// A token that is neither a cell index nor a known command letter.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid script step '{}': expected a cell index, 'n' or 'r'", token)]
pub struct ScriptStepError {
    /// The offending token.
    pub token: String,
}

impl FromStr for ScriptStep {
    type Err = ScriptStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "n" | "N" => Ok(ScriptStep::NewRound),
            "r" | "R" => Ok(ScriptStep::ResetAll),
            other => other.parse().map(ScriptStep::Cell).map_err(|_| ScriptStepError {
                token: s.to_string(),
            }),
        }
    }
}

/// A move the script asked for that the game ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedMove {
    /// Zero-based index of the step in the script.
    pub step: usize,
    /// Why it was ignored.
    pub reason: RejectReason,
}

/// Final state of a scripted run.
#[derive(Debug, Clone)]
pub struct ScriptReport {
    /// Session state after the last step.
    pub game: GameState,
    /// Moves that were ignored, in script order.
    pub skipped: Vec<SkippedMove>,
}

/// Serializable view of a [`ScriptReport`].
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Cells in row-major order: `"X"`, `"O"` or `null`.
    pub board: Vec<Option<String>>,
    /// Player to move next.
    pub current_player: String,
    /// `in_progress`, `won` or `draw`.
    pub status: &'static str,
    /// Winner of the round, if any.
    pub winner: Option<String>,
    /// Indices of the winning line, empty unless won.
    pub winning_line: Vec<usize>,
    /// Session scoreboard.
    pub scores: Scores,
    /// Ignored moves.
    pub skipped: Vec<SkippedMove>,
}

/// Runs `steps` against a fresh session.
#[instrument(skip(steps), fields(steps = steps.len()))]
pub fn run_script(steps: &[ScriptStep]) -> ScriptReport {
    let mut game = GameState::new();
    let mut skipped = Vec::new();

    for (step, command) in steps.iter().enumerate() {
        match *command {
            ScriptStep::Cell(cell) => {
                if let MoveOutcome::Rejected(reason) = game.apply_move(cell) {
                    debug!(step, cell, %reason, "Scripted move skipped");
                    skipped.push(SkippedMove { step, reason });
                }
            }
            ScriptStep::NewRound => game.start_new_round(),
            ScriptStep::ResetAll => game.reset_all(),
        }
    }

    info!(skipped = skipped.len(), status = %game.status(), "Script finished");
    ScriptReport { game, skipped }
}

impl ScriptReport {
    /// Builds the serializable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let status = self.game.status();
        Snapshot {
            board: self
                .game
                .board()
                .squares()
                .iter()
                .map(|sq| match sq {
                    Square::Empty => None,
                    Square::Occupied(player) => Some(player.to_string()),
                })
                .collect(),
            current_player: self.game.current_player().to_string(),
            status: match status {
                GameStatus::InProgress => "in_progress",
                GameStatus::Won(_) => "won",
                GameStatus::Draw => "draw",
            },
            winner: self.game.winner().map(|p| p.to_string()),
            winning_line: self
                .game
                .winning_line()
                .map(|line| line.iter().map(|p| p.to_index()).collect())
                .unwrap_or_default(),
            scores: *self.game.scores(),
            skipped: self.skipped.clone(),
        }
    }

    /// Human-readable summary: skipped moves, board, status and scores.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for skip in &self.skipped {
            out.push_str(&format!("skipped step {}: {}\n", skip.step + 1, skip.reason));
        }
        out.push_str(&self.game.board().display());
        out.push_str("\n\n");
        let status = match self.game.status() {
            GameStatus::InProgress => format!("{} to move", self.game.current_player()),
            other => other.to_string(),
        };
        out.push_str(&format!("Status: {}\n", status));
        let scores = self.game.scores();
        out.push_str(&format!(
            "Score: X {} | O {} | Draws {}\n",
            scores.x(),
            scores.o(),
            scores.draws()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(tokens: &[&str]) -> Vec<ScriptStep> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!("4".parse::<ScriptStep>(), Ok(ScriptStep::Cell(4)));
        assert_eq!("n".parse::<ScriptStep>(), Ok(ScriptStep::NewRound));
        assert_eq!("R".parse::<ScriptStep>(), Ok(ScriptStep::ResetAll));
        assert!("x".parse::<ScriptStep>().is_err());
        assert!("-1".parse::<ScriptStep>().is_err());
    }

    #[test]
    fn test_win_snapshot() {
        let report = run_script(&steps(&["0", "4", "1", "5", "2"]));
        let snapshot = report.snapshot();
        assert_eq!(snapshot.status, "won");
        assert_eq!(snapshot.winner.as_deref(), Some("X"));
        assert_eq!(snapshot.winning_line, vec![0, 1, 2]);
        assert_eq!(*snapshot.scores.x(), 1);
        assert!(snapshot.skipped.is_empty());
    }

    #[test]
    fn test_skipped_moves_are_reported() {
        let report = run_script(&steps(&["0", "0", "12"]));
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].step, 1);
        assert_eq!(report.skipped[1].reason, RejectReason::OutOfRange(12));

        let text = report.render_text();
        assert!(text.contains("skipped step 2: Square Top-left is already occupied"));
        assert!(text.contains("Status: O to move"));
    }

    #[test]
    fn test_round_commands() {
        let report = run_script(&steps(&["0", "4", "1", "5", "2", "n", "8"]));
        assert_eq!(report.game.move_count(), 1);
        assert_eq!(*report.game.scores().x(), 1);

        let report = run_script(&steps(&["0", "4", "1", "5", "2", "r"]));
        assert_eq!(*report.game.scores(), Scores::new());
    }
}
