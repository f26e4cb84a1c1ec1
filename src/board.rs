use anyhow::{anyhow, Result};
use serde::Serialize;

use std::fmt;

use crate::{terminal, HEIGHT, WIDTH};

/// One side of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(into = "u8")]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        Cell::from(player).into()
    }
}

/// The contents of a single board position
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(into = "u8")]
pub enum Cell {
    Empty,
    Human,
    Opponent,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Opponent => Cell::Opponent,
        }
    }
}

// wire encoding, must stay 0/1/2
impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        match cell {
            Cell::Empty => 0,
            Cell::Human => 1,
            Cell::Opponent => 2,
        }
    }
}

/// A read-only copy of the board contents, row-major with row 0 at the top
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(transparent)]
pub struct Snapshot(pub [[Cell; WIDTH]; HEIGHT]);

impl Snapshot {
    /// The numeric encoding of every cell: 0 empty, 1 human, 2 opponent
    pub fn to_codes(&self) -> [[u8; WIDTH]; HEIGHT] {
        let mut codes = [[0; WIDTH]; HEIGHT];
        for (row, cells) in self.0.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                codes[row][col] = cell.into();
            }
        }
        codes
    }
}

/// A 6x7 grid of cells addressed as (row, column)
///
/// Row 0 is the top of the board and row `HEIGHT - 1` is the bottom, so
/// pieces settle towards higher row indices. `Board` is `Copy`: exploring a
/// hypothetical move never touches the board it was copied from.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a position from one-indexed column digits, the human moving first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::Human;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is already won
                    if terminal::outcome(&board).is_some() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    if board.play(column - 1, player).is_none() {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether a piece can still be dropped into `col`
    ///
    /// Out-of-range columns are never valid.
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < WIDTH && self.cells[0][col].is_empty()
    }

    /// The lowest empty row of `col`, or `None` if the column is full
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= WIDTH {
            return None;
        }
        (0..HEIGHT).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Writes a piece without any checks; `(row, col)` must come from
    /// `next_open_row`
    pub fn drop_piece(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = player.into();
    }

    /// Drops a piece into `col`, returning the row it landed on
    pub fn play(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.next_open_row(col)?;
        self.drop_piece(row, col, player);
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|col| !self.is_valid_column(col))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Human => 'X',
                    Cell::Opponent => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_settle_to_the_bottom() {
        let mut board = Board::new();
        assert_eq!(board.next_open_row(3), Some(HEIGHT - 1));

        assert_eq!(board.play(3, Player::Human), Some(5));
        assert_eq!(board.play(3, Player::Opponent), Some(4));
        assert_eq!(board.get(5, 3), Cell::Human);
        assert_eq!(board.get(4, 3), Cell::Opponent);
        assert_eq!(board.next_open_row(3), Some(3));
    }

    #[test]
    fn full_column() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            assert!(board.is_valid_column(0));
            board.play(0, Player::Human);
        }

        assert!(!board.is_valid_column(0));
        assert_eq!(board.next_open_row(0), None);
        assert_eq!(board.play(0, Player::Opponent), None);
        assert!(!board.is_full());
    }

    #[test]
    fn out_of_range_column_is_invalid() {
        let board = Board::new();
        assert!(!board.is_valid_column(WIDTH));
        assert_eq!(board.next_open_row(WIDTH), None);
    }

    #[test]
    fn copies_are_independent() {
        let board = Board::new();
        let mut copy = board;
        copy.play(2, Player::Opponent);

        assert_eq!(board.get(5, 2), Cell::Empty);
        assert_eq!(copy.get(5, 2), Cell::Opponent);
    }

    #[test]
    fn from_moves_alternates_players() -> Result<()> {
        let board = Board::from_moves("4455")?;
        assert_eq!(board.get(5, 3), Cell::Human);
        assert_eq!(board.get(4, 3), Cell::Opponent);
        assert_eq!(board.get(5, 4), Cell::Human);
        assert_eq!(board.get(4, 4), Cell::Opponent);
        Ok(())
    }

    #[test]
    fn from_moves_rejects_bad_input() {
        assert!(Board::from_moves("48").is_err());
        assert!(Board::from_moves("4a").is_err());
        assert!(Board::from_moves("1111111").is_err());
        // the human has already connected four in column 1
        assert!(Board::from_moves("12121212").is_err());
    }

    #[test]
    fn snapshot_codes() -> Result<()> {
        let codes = Board::from_moves("12")?.snapshot().to_codes();
        assert_eq!(codes[5], [1, 2, 0, 0, 0, 0, 0]);
        assert!(codes[..5].iter().all(|row| row.iter().all(|&c| c == 0)));
        Ok(())
    }

    #[test]
    fn display() -> Result<()> {
        let board = Board::from_moves("44")?;
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT);
        assert_eq!(lines[4], "...O...");
        assert_eq!(lines[5], "...X...");
        Ok(())
    }
}
