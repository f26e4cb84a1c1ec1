//! Move selection for the opponent by game tree search

use tracing::debug;

use crate::board::{Board, Player};
use crate::moves::valid_columns;
use crate::terminal::has_four_in_a_row;

/// The evaluation of a position from the opponent's point of view
pub type Score = i64;

/// Leaf score of a position won by the opponent
pub const OPPONENT_WIN_SCORE: Score = 100_000_000_000_000;
/// Leaf score of a position won by the human
///
/// Smaller in magnitude than `OPPONENT_WIN_SCORE`. Only the sign matters
/// when comparing against drawn or unfinished leaves.
pub const HUMAN_WIN_SCORE: Score = -10_000_000_000_000;

/// Stands in for negative infinity as the initial alpha
pub const MIN_SCORE: Score = Score::MIN;
/// Stands in for positive infinity as the initial beta
pub const MAX_SCORE: Score = Score::MAX;

/// A depth-limited minimax search with alpha-beta pruning
///
/// # Notes
/// The opponent is the maximizing side and the human the minimizing side.
/// Leaves are scored only by who has won: `OPPONENT_WIN_SCORE`,
/// `HUMAN_WIN_SCORE`, or 0 for a drawn or undecided position. Columns are
/// tried left to right and only a strictly better score replaces the best
/// column, so among equally scored columns the leftmost one is chosen.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    /// The number of nodes visited by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Searches `depth` plies below `board` within the window `(alpha, beta)`
    ///
    /// Returns the chosen column and its score. The column is `None` at a
    /// leaf: when `depth` is 0, when either side has won, or when the board
    /// is full. `board` itself is never modified; every branch plays on its
    /// own copy.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<usize>, Score) {
        self.node_count += 1;

        let moves = valid_columns(board);
        let opponent_won = has_four_in_a_row(board, Player::Opponent);
        let human_won = has_four_in_a_row(board, Player::Human);
        if depth == 0 || opponent_won || human_won || moves.is_empty() {
            let score = if opponent_won {
                OPPONENT_WIN_SCORE
            } else if human_won {
                HUMAN_WIN_SCORE
            } else {
                0
            };
            return (None, score);
        }

        let mut best_column = moves.first();
        if maximizing {
            let mut value = MIN_SCORE;
            for column in moves.iter() {
                let mut next = *board;
                next.play(column, Player::Opponent);
                let (_, score) = self.search(&next, depth - 1, alpha, beta, false);
                if score > value {
                    value = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    // the human will never allow this line
                    break;
                }
            }
            (best_column, value)
        } else {
            let mut value = MAX_SCORE;
            for column in moves.iter() {
                let mut next = *board;
                next.play(column, Player::Human);
                let (_, score) = self.search(&next, depth - 1, alpha, beta, true);
                if score < value {
                    value = score;
                    best_column = Some(column);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            (best_column, value)
        }
    }

    /// Picks the opponent's reply to `board`, searching `depth` plies
    ///
    /// Returns `None` without searching if no column is playable.
    pub fn choose_move(&mut self, board: &Board, depth: usize) -> Option<(usize, Score)> {
        if valid_columns(board).is_empty() {
            return None;
        }

        self.node_count = 0;
        let (column, score) = self.search(board, depth, MIN_SCORE, MAX_SCORE, true);
        debug!(
            column = ?column,
            score,
            depth,
            nodes = self.node_count,
            "search complete"
        );
        column.map(|column| (column, score))
    }
}
