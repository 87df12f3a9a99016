use crate::rules::{self, Grid};
use crate::{CellState, Position};

/// The board: 81 cells plus transient UI state
///
/// Exactly one actor mutates the board at any instant, either the interaction
/// layer responding to input or the solver holding it by exclusive reference
/// for the duration of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; 9]; 9],
    selected: Option<Position>,
    solving: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board: all cells empty, nothing selected
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; 9]; 9],
            selected: None,
            solving: false,
        }
    }

    /// Get the state of a cell
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.row][pos.col]
    }

    /// Select a cell, deselecting any previous selection
    ///
    /// Any in-range cell is selectable; the selection persists until the next
    /// call.
    pub fn select(&mut self, pos: Position) {
        self.selected = Some(pos);
    }

    /// The currently selected cell, if any
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Pencil in a provisional digit at `pos`
    ///
    /// Committed cells keep their value; the guess is dropped.
    pub fn set_guess(&mut self, pos: Position, digit: u8) {
        assert!((1..=9).contains(&digit), "digit {} out of range", digit);
        let cell = &mut self.cells[pos.row][pos.col];
        if !cell.is_committed() {
            *cell = CellState::Guessed(digit);
        }
    }

    /// Promote the guess at `pos` to a committed value
    ///
    /// Validates once against the committed digits of this moment. Returns
    /// false without mutating if the cell is already committed, holds no
    /// guess, or the guess conflicts with its row, column, or box; the guess
    /// stays in place on conflict so the user can pick another digit.
    pub fn commit(&mut self, pos: Position) -> bool {
        let digit = match self.cells[pos.row][pos.col] {
            CellState::Guessed(d) => d,
            CellState::Committed(_) | CellState::Empty => return false,
        };
        if !rules::is_valid(&self.snapshot(), digit, pos) {
            return false;
        }
        self.cells[pos.row][pos.col] = CellState::Committed(digit);
        true
    }

    /// Reset one cell to empty, dropping both guess and committed value
    pub fn clear_cell(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = CellState::Empty;
    }

    /// Reset every cell to empty
    pub fn clear_all(&mut self) {
        self.cells = [[CellState::Empty; 9]; 9];
    }

    /// Project the board to a plain digit grid
    ///
    /// Committed values only; guesses never participate in validity checks or
    /// solving.
    pub fn snapshot(&self) -> Grid {
        let mut grid = [[0u8; 9]; 9];
        for pos in Position::all() {
            if let Some(digit) = self.cells[pos.row][pos.col].committed() {
                grid[pos.row][pos.col] = digit;
            }
        }
        grid
    }

    /// Whether the solver is currently running on this board
    pub fn is_solving(&self) -> bool {
        self.solving
    }

    /// Toggle the solving visual mode
    pub fn set_solving(&mut self, solving: bool) {
        self.solving = solving;
    }

    /// Number of committed cells
    pub fn committed_count(&self) -> usize {
        Position::all()
            .filter(|&pos| self.cells[pos.row][pos.col].is_committed())
            .count()
    }

    // Solver write-through: trial placements bypass validation, the solver
    // has already checked the candidate against its working grid.
    pub(crate) fn place(&mut self, pos: Position, digit: u8) {
        self.cells[pos.row][pos.col] = CellState::Committed(digit);
    }

    pub(crate) fn unplace(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = CellState::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.selected(), None);
        assert!(!board.is_solving());
        for pos in Position::all() {
            assert_eq!(board.cell(pos), CellState::Empty);
        }
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut board = Board::new();
        board.select(Position::new(0, 0));
        board.select(Position::new(5, 7));
        assert_eq!(board.selected(), Some(Position::new(5, 7)));
    }

    #[test]
    fn test_guess_then_commit() {
        let mut board = Board::new();
        let pos = Position::new(3, 3);
        board.set_guess(pos, 4);
        assert_eq!(board.cell(pos), CellState::Guessed(4));
        // Guesses never appear in the snapshot
        assert_eq!(board.snapshot()[3][3], 0);

        assert!(board.commit(pos));
        assert_eq!(board.cell(pos), CellState::Committed(4));
        assert_eq!(board.snapshot()[3][3], 4);
    }

    #[test]
    fn test_commit_rejects_conflicting_guess() {
        let mut board = Board::new();
        board.set_guess(Position::new(0, 0), 1);
        assert!(board.commit(Position::new(0, 0)));

        // 1 is already present in row 0
        let pos = Position::new(0, 1);
        board.set_guess(pos, 1);
        assert!(!board.commit(pos));
        // The guess stays displayed, nothing was committed
        assert_eq!(board.cell(pos), CellState::Guessed(1));
        assert_eq!(board.snapshot()[0][1], 0);
    }

    #[test]
    fn test_commit_is_a_safe_noop_on_filled_or_empty_cells() {
        let mut board = Board::new();
        let pos = Position::new(2, 2);

        // Nothing to commit
        assert!(!board.commit(pos));

        board.set_guess(pos, 8);
        assert!(board.commit(pos));
        // Already filled
        assert!(!board.commit(pos));
        assert_eq!(board.cell(pos), CellState::Committed(8));
    }

    #[test]
    fn test_set_guess_keeps_committed_value() {
        let mut board = Board::new();
        let pos = Position::new(6, 1);
        board.set_guess(pos, 2);
        assert!(board.commit(pos));
        board.set_guess(pos, 9);
        assert_eq!(board.cell(pos), CellState::Committed(2));
    }

    #[test]
    fn test_clear_cell_and_clear_all() {
        let mut board = Board::new();
        board.set_guess(Position::new(0, 0), 3);
        assert!(board.commit(Position::new(0, 0)));
        board.set_guess(Position::new(1, 1), 5);

        board.clear_cell(Position::new(0, 0));
        assert_eq!(board.cell(Position::new(0, 0)), CellState::Empty);
        assert_eq!(board.cell(Position::new(1, 1)), CellState::Guessed(5));

        board.clear_all();
        for pos in Position::all() {
            assert_eq!(board.cell(pos), CellState::Empty);
        }
    }

    #[test]
    fn test_committed_count() {
        let mut board = Board::new();
        assert_eq!(board.committed_count(), 0);
        board.set_guess(Position::new(0, 0), 1);
        assert_eq!(board.committed_count(), 0);
        assert!(board.commit(Position::new(0, 0)));
        assert_eq!(board.committed_count(), 1);
    }
}
