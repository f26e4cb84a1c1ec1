//! The turn sequence of a single game against the opponent

use serde::Serialize;
use tracing::{debug, info};

use crate::board::{Board, Player, Snapshot};
use crate::config::GameConfig;
use crate::error::{ConfigError, InvalidReason, MoveError};
use crate::search::Searcher;
use crate::terminal::{self, has_four_in_a_row, Outcome};
use crate::WIDTH;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// The result of a human move and the opponent's reply to it
///
/// Serializes as `{"board": [[...]], "winner": 1}`; `winner` is left out
/// while nobody has won and `draw` only appears once a draw is detected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub board: Snapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
    #[serde(skip_serializing_if = "is_false")]
    pub draw: bool,
    /// The column the opponent answered with, if it moved
    #[serde(skip)]
    pub opponent_column: Option<usize>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One game: a board, its status, and the opponent that replies to every
/// human move
///
/// The human always moves first within `apply_human_move` and the opponent
/// answers in the same call unless the human's move ended the game.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
    config: GameConfig,
    searcher: Searcher,
}

impl GameSession {
    /// Starts a game on an empty board
    ///
    /// Fails if `config` does not pass `GameConfig::validate`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::from_board(Board::new(), config)
    }

    /// Starts a session from an existing position with the human to move
    ///
    /// A position that is already won starts out finished, as does a full
    /// board when draws are detected.
    pub fn from_board(board: Board, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let status = match terminal::outcome(&board) {
            Some(Outcome::Winner(player)) => GameStatus::Finished(Outcome::Winner(player)),
            Some(Outcome::Draw) if config.detect_draws => GameStatus::Finished(Outcome::Draw),
            _ => GameStatus::InProgress,
        };
        Ok(Self {
            board,
            status,
            config,
            searcher: Searcher::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Nodes visited by the opponent's most recent search
    pub fn last_search_nodes(&self) -> usize {
        self.searcher.node_count
    }

    /// Plays the human's piece in `column`, then the opponent's reply
    ///
    /// Rejected moves leave the session unchanged.
    pub fn apply_human_move(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if let GameStatus::Finished(_) = self.status {
            debug!(column, "move rejected, game is over");
            return Err(MoveError::GameAlreadyOver);
        }

        let invalid = |reason| MoveError::InvalidMove { column, reason };
        if column >= WIDTH {
            debug!(column, "move rejected, column out of range");
            return Err(invalid(InvalidReason::OutOfRange));
        }
        let row = match self.board.next_open_row(column) {
            Some(row) => row,
            None => {
                debug!(column, "move rejected, column full");
                return Err(invalid(InvalidReason::ColumnFull));
            }
        };

        self.board.drop_piece(row, column, Player::Human);
        if has_four_in_a_row(&self.board, Player::Human) {
            self.finish(Outcome::Winner(Player::Human));
            return Ok(self.report(None));
        }
        if self.config.detect_draws && self.board.is_full() {
            self.finish(Outcome::Draw);
            return Ok(self.report(None));
        }

        let mut opponent_column = None;
        if let Some((reply, _score)) = self
            .searcher
            .choose_move(&self.board, self.config.search_depth)
        {
            if self.board.is_valid_column(reply) {
                if let Some(reply_row) = self.board.next_open_row(reply) {
                    self.board.drop_piece(reply_row, reply, Player::Opponent);
                    opponent_column = Some(reply);

                    if has_four_in_a_row(&self.board, Player::Opponent) {
                        self.finish(Outcome::Winner(Player::Opponent));
                    } else if self.config.detect_draws && self.board.is_full() {
                        self.finish(Outcome::Draw);
                    }
                }
            }
        }
        Ok(self.report(opponent_column))
    }

    /// Clears the board and starts a new game, whatever the current status
    pub fn reset(&mut self) -> Snapshot {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        info!("game reset");
        self.snapshot()
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(?outcome, "game finished");
        self.status = GameStatus::Finished(outcome);
    }

    fn report(&self, opponent_column: Option<usize>) -> MoveReport {
        let (winner, draw) = match self.status {
            GameStatus::Finished(Outcome::Winner(player)) => (Some(player), false),
            GameStatus::Finished(Outcome::Draw) => (None, true),
            GameStatus::InProgress => (None, false),
        };
        MoveReport {
            board: self.snapshot(),
            winner,
            draw,
            opponent_column,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            config: GameConfig::default(),
            searcher: Searcher::new(),
        }
    }
}
