use crate::Position;

/// Plain digit view of the board: committed values only, 0 = empty
pub type Grid = [[u8; 9]; 9];

/// Check whether `digit` can legally occupy `pos` on `grid`
///
/// Returns false if the digit already appears in the same row at a different
/// column, the same column at a different row, or the same 3x3 box at a
/// different cell. The target cell's own stored value never counts as a
/// conflict, so an occupied cell may be probed for overwriting.
pub fn is_valid(grid: &Grid, digit: u8, pos: Position) -> bool {
    assert!((1..=9).contains(&digit), "digit {} out of range", digit);

    // Row and column
    for i in 0..9 {
        if i != pos.col && grid[pos.row][i] == digit {
            return false;
        }
        if i != pos.row && grid[i][pos.col] == digit {
            return false;
        }
    }

    // 3x3 box
    let box_row = (pos.row / 3) * 3;
    let box_col = (pos.col / 3) * 3;
    for row in box_row..box_row + 3 {
        for col in box_col..box_col + 3 {
            if (row != pos.row || col != pos.col) && grid[row][col] == digit {
                return false;
            }
        }
    }

    true
}

/// Find the first empty cell in row-major order
///
/// The scan order is part of the contract: it fixes the solver's search order
/// and therefore which completion is found first when several exist.
pub fn find_empty_cell(grid: &Grid) -> Option<Position> {
    for row in 0..9 {
        for col in 0..9 {
            if grid[row][col] == 0 {
                return Some(Position::new(row, col));
            }
        }
    }
    None
}

/// Check whether the grid is fully filled and satisfies the Sudoku rules
pub fn is_complete(grid: &Grid) -> bool {
    for pos in Position::all() {
        let digit = grid[pos.row][pos.col];
        if digit == 0 || !is_valid(grid, digit, pos) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid() -> Grid {
        [[0; 9]; 9]
    }

    #[test]
    fn test_valid_on_empty_grid() {
        let grid = empty_grid();
        for digit in 1..=9 {
            assert!(is_valid(&grid, digit, Position::new(4, 4)));
        }
    }

    #[test]
    fn test_row_conflict() {
        let mut grid = empty_grid();
        grid[0][0] = 1;
        assert!(!is_valid(&grid, 1, Position::new(0, 8)));
        assert!(is_valid(&grid, 2, Position::new(0, 8)));
    }

    #[test]
    fn test_column_conflict() {
        let mut grid = empty_grid();
        grid[0][3] = 7;
        assert!(!is_valid(&grid, 7, Position::new(8, 3)));
        assert!(is_valid(&grid, 6, Position::new(8, 3)));
    }

    #[test]
    fn test_box_conflict() {
        let mut grid = empty_grid();
        grid[4][4] = 5;
        // Same box, different row and column
        assert!(!is_valid(&grid, 5, Position::new(3, 5)));
        // Different box, different row and column
        assert!(is_valid(&grid, 5, Position::new(0, 8)));
    }

    #[test]
    fn test_cell_never_conflicts_with_itself() {
        let mut grid = empty_grid();
        grid[2][2] = 9;
        assert!(is_valid(&grid, 9, Position::new(2, 2)));
    }

    #[test]
    fn test_find_empty_cell_row_major() {
        let mut grid = empty_grid();
        assert_eq!(find_empty_cell(&grid), Some(Position::new(0, 0)));

        grid[0][0] = 1;
        assert_eq!(find_empty_cell(&grid), Some(Position::new(0, 1)));

        // Fill all of row 0: scan moves to the next row
        for col in 0..9 {
            grid[0][col] = (col + 1) as u8;
        }
        assert_eq!(find_empty_cell(&grid), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_find_empty_cell_full_grid() {
        let grid = [[1; 9]; 9];
        assert_eq!(find_empty_cell(&grid), None);
    }

    #[test]
    fn test_is_complete() {
        assert!(!is_complete(&empty_grid()));

        // A known valid completion
        let solved: Grid = [
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [4, 5, 6, 7, 8, 9, 1, 2, 3],
            [7, 8, 9, 1, 2, 3, 4, 5, 6],
            [2, 3, 1, 5, 6, 4, 8, 9, 7],
            [5, 6, 4, 8, 9, 7, 2, 3, 1],
            [8, 9, 7, 2, 3, 1, 5, 6, 4],
            [3, 1, 2, 6, 4, 5, 9, 7, 8],
            [6, 4, 5, 9, 7, 8, 3, 1, 2],
            [9, 7, 8, 3, 1, 2, 6, 4, 5],
        ];
        assert!(is_complete(&solved));

        let mut broken = solved;
        broken[8][8] = broken[8][7];
        assert!(!is_complete(&broken));
    }
}
