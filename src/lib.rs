//! A Connect 4 opponent for a human player
//!
//! The opponent picks its moves with a depth-limited minimax search
//! using alpha-beta pruning. Ties between equally scored columns always
//! go to the leftmost one, so its play is fully deterministic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{GameConfig, GameSession, GameStatus};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut session = GameSession::new(GameConfig::default())?;
//! let report = session.apply_human_move(3)?;
//!
//! assert_eq!(report.opponent_column, Some(0));
//! assert_eq!(session.status(), GameStatus::InProgress);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod terminal;

pub mod moves;

pub mod search;

pub mod config;

pub mod error;

pub mod session;


pub use board::{Board, Cell, Player, Snapshot};
pub use config::GameConfig;
pub use error::{ConfigError, InvalidReason, MoveError};
pub use session::{GameSession, GameStatus, MoveReport};
pub use terminal::Outcome;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a four-cell window must fit in both directions for every line orientation
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
// column digits in move strings are single characters
const_assert!(WIDTH <= 9);
