use crate::errors::GameError;
use crate::player::Mark;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = 9;

/// The 3×3 grid. Cells are indexed 0-8 reading left to right, top to
/// bottom: row = index / 3, column = index % 3. A cell only ever moves
/// from empty to a mark; it never reverts within a round.
///
/// # Examples
///
/// ```
/// use noughts_engine::board::Board;
/// use noughts_engine::player::Mark;
///
/// let mut board = Board::new();
/// board.place(4, Mark::X).unwrap();
/// assert_eq!(board.cell(4), Some(Mark::X));
/// assert!(!board.is_full());
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a cell; `None` for an empty cell or an index off the
    /// grid.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// True when no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Zero-based indices of the currently empty cells, ascending.
    pub fn free_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Put `mark` into the empty cell at `index`.
    ///
    /// The move validator guarantees both preconditions, so the errors
    /// here are a guard against caller bugs, not an expected path.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfRange`] - `index` is not in 0-8
    /// - [`GameError::CellOccupied`] - the cell already holds a mark
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index })?;
        if cell.is_some() {
            return Err(GameError::CellOccupied { index });
        }
        *cell = Some(mark);
        Ok(())
    }

    /// The triplets a move at `last_index` could have completed: its row,
    /// its column, and whichever diagonals pass through it. The center
    /// cell yields four triplets, corners three, edge cells two.
    pub fn winning_triplets(last_index: usize) -> Vec<[usize; 3]> {
        let row = last_index / 3;
        let col = last_index % 3;
        let mut triplets = vec![
            [row * 3, row * 3 + 1, row * 3 + 2],
            [col, col + 3, col + 6],
        ];
        if matches!(last_index, 0 | 4 | 8) {
            triplets.push([0, 4, 8]);
        }
        if matches!(last_index, 2 | 4 | 6) {
            triplets.push([2, 4, 6]);
        }
        triplets
    }

    /// True iff the move just played at `last_index` completed a line of
    /// `mark`. Only triplets through the last move are inspected; a win
    /// can only newly form through the most recent move.
    pub fn check_win(&self, last_index: usize, mark: Mark) -> bool {
        Self::winning_triplets(last_index)
            .iter()
            .any(|triplet| triplet.iter().all(|&i| self.cells[i] == Some(mark)))
    }
}
