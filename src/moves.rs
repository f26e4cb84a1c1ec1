use crate::board::Board;
use crate::WIDTH;

/// The playable columns of a position, in ascending order
///
/// The ordering is the search's tie-break: the first column to reach
/// the best score is the one that gets played.
#[derive(Copy, Clone, Debug)]
pub struct MoveList {
    size: usize,
    columns: [usize; WIDTH],
}

impl MoveList {
    fn new() -> Self {
        Self {
            size: 0,
            columns: [0; WIDTH],
        }
    }

    // columns are pushed in ascending order, so no sorting is needed
    fn push(&mut self, column: usize) {
        self.columns[self.size] = column;
        self.size += 1;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.columns[..self.size]
    }

    pub fn first(&self) -> Option<usize> {
        self.as_slice().first().copied()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Every column that can still take a piece, left to right
pub fn valid_columns(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    for column in 0..WIDTH {
        if board.is_valid_column(column) {
            moves.push(column);
        }
    }
    moves
}
