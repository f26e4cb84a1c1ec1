//! Detection of finished positions

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, WIDTH};

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

// (row step, column step) for horizontal, vertical, and both diagonals
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Whether `player` has four pieces in a line anywhere on the board
///
/// Slides a four-cell window over every start position of every line
/// orientation and stops at the first window fully owned by `player`.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    let piece = Cell::from(player);

    for &(d_row, d_col) in DIRECTIONS.iter() {
        // windows going upwards must start at least three rows from the top
        let rows = match d_row {
            1 => 0..HEIGHT - 3,
            -1 => 3..HEIGHT,
            _ => 0..HEIGHT,
        };
        let max_col = if d_col == 0 { WIDTH } else { WIDTH - 3 };

        for row in rows {
            for col in 0..max_col {
                let window_owned = (0..4).all(|i| {
                    let r = (row as isize + i * d_row) as usize;
                    let c = (col as isize + i * d_col) as usize;
                    board.get(r, c) == piece
                });
                if window_owned {
                    return true;
                }
            }
        }
    }

    false
}

/// The outcome of the position, if it is finished
///
/// A full board without a line of four is a draw.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if has_four_in_a_row(board, Player::Human) {
        Some(Outcome::Winner(Player::Human))
    } else if has_four_in_a_row(board, Player::Opponent) {
        Some(Outcome::Winner(Player::Opponent))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize)], player: Player) -> Board {
        let mut board = Board::new();
        for &(row, col) in cells {
            board.drop_piece(row, col, player);
        }
        board
    }

    #[test]
    fn horizontal() {
        let cells = [(5, 0), (5, 1), (5, 2), (5, 3)];

        let board = board_with(&cells, Player::Opponent);
        assert!(has_four_in_a_row(&board, Player::Opponent));
        assert!(!has_four_in_a_row(&board, Player::Human));

        let board = board_with(&cells, Player::Human);
        assert!(has_four_in_a_row(&board, Player::Human));
        assert!(!has_four_in_a_row(&board, Player::Opponent));
    }

    #[test]
    fn vertical() {
        let board = board_with(&[(0, 6), (1, 6), (2, 6), (3, 6)], Player::Human);
        assert!(has_four_in_a_row(&board, Player::Human));
    }

    #[test]
    fn descending_diagonal() {
        let board = board_with(&[(2, 3), (3, 4), (4, 5), (5, 6)], Player::Opponent);
        assert!(has_four_in_a_row(&board, Player::Opponent));
    }

    #[test]
    fn ascending_diagonal() {
        let board = board_with(&[(5, 0), (4, 1), (3, 2), (2, 3)], Player::Human);
        assert!(has_four_in_a_row(&board, Player::Human));
    }

    #[test]
    fn three_is_not_enough() {
        let board = board_with(&[(5, 4), (5, 5), (5, 6)], Player::Human);
        assert!(!has_four_in_a_row(&board, Player::Human));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn broken_line() {
        let mut board = board_with(&[(5, 0), (5, 1), (5, 3), (5, 4)], Player::Human);
        board.drop_piece(5, 2, Player::Opponent);
        assert!(!has_four_in_a_row(&board, Player::Human));
    }

    #[test]
    fn winner_outcome() {
        let board = board_with(&[(5, 2), (4, 2), (3, 2), (2, 2)], Player::Opponent);
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::Opponent)));
    }
}
