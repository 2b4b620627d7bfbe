//! Round state machine with a session scoreboard.
//!
//! A [`GameState`] lives for one session. Moves are applied through
//! [`GameState::apply_move`]; rounds are cleared with
//! [`GameState::start_new_round`] and the whole session with
//! [`GameState::reset_all`]. Status is always recomputed from the board;
//! `game_over` and `winning_line` are caches kept in step with it.

use crate::action::{Move, MoveOutcome, RejectReason};
use crate::invariants::assert_invariants;
use crate::rules::{self, GameStatus, Win};
use crate::{Board, Player, Position, Scores, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete session state: current round plus scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) round_starter: Player,
    pub(crate) scores: Scores,
    pub(crate) game_over: bool,
    pub(crate) winning_line: Option<Win>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh session: empty board, X to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            round_starter: Player::X,
            scores: Scores::new(),
            game_over: false,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    ///
    /// After a finished round this is the player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Player who made (or will make) the first move of this round.
    pub fn round_starter(&self) -> Player {
        self.round_starter
    }

    /// Status derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Whether the round has ended in a win or draw.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The completed line, when the round was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line.map(|win| win.line)
    }

    /// The round winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line.map(|win| win.player)
    }

    /// Moves of the current round in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of marks placed this round.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Empty squares, or none once the round is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.game_over {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at a raw cell index (0-8).
    ///
    /// Out-of-range indices are rejected like any other illegal move.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.apply_position(pos),
            None => {
                debug!(index, "Rejected out-of-range cell index");
                MoveOutcome::Rejected(RejectReason::OutOfRange(index))
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Rejected moves leave board, scores and winning line untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_position(&mut self, pos: Position) -> MoveOutcome {
        if self.game_over {
            debug!(position = %pos, "Rejected move after round end");
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied square");
            return MoveOutcome::Rejected(RejectReason::SquareOccupied(pos));
        }

        let mv = Move::new(self.current_player, pos);
        self.board.set(pos, Square::Occupied(mv.player));
        self.history.push(mv);

        let status = rules::status(&self.board);
        let outcome = match status {
            GameStatus::Won(win) => {
                self.game_over = true;
                self.winning_line = Some(win);
                self.scores.record(&status);
                info!(winner = %win.player, line = ?win.line, "Round won");
                MoveOutcome::Won(mv, win)
            }
            GameStatus::Draw => {
                self.game_over = true;
                self.scores.record(&status);
                info!("Round drawn");
                MoveOutcome::Drawn(mv)
            }
            GameStatus::InProgress => {
                self.current_player = self.current_player.opponent();
                debug!(%mv, next = %self.current_player, "Move applied");
                MoveOutcome::Placed(mv)
            }
        };

        assert_invariants(self);
        outcome
    }

    /// Clears the board for another round, keeping the scores.
    ///
    /// X starts after a finished round; abandoning a round mid-play keeps
    /// the player who was to move.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) {
        if self.game_over {
            self.current_player = Player::X;
        }
        self.board = Board::new();
        self.game_over = false;
        self.winning_line = None;
        self.history.clear();
        self.round_starter = self.current_player;
        info!(starter = %self.current_player, "New round started");

        assert_invariants(self);
    }

    /// Clears the board and zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        *self = Self::new();
        info!("Session reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
