use crate::rules::{self, Grid};
use crate::{Board, Position};

/// One observable mutation during a search
///
/// These are the only two points where the board changes mid-search, and each
/// is followed by exactly one observer call before the search proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStep {
    /// A candidate digit was written into an empty cell
    Trial { pos: Position, digit: u8 },
    /// A dead-end digit was removed again
    Retract { pos: Position, digit: u8 },
}

impl SolveStep {
    /// The cell this step touched
    pub fn pos(&self) -> Position {
        match self {
            SolveStep::Trial { pos, .. } | SolveStep::Retract { pos, .. } => *pos,
        }
    }
}

/// Observer verdict at a yield point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep searching
    Continue,
    /// Unwind immediately with no further mutation
    Cancel,
}

/// Outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The board is fully and validly filled; committed values hold the solution
    Solved,
    /// No completion exists from the current committed digits; every trial was
    /// retracted and the board is exactly as it was before the search
    Unsolvable,
    /// The observer requested cancellation; the board is exactly as it was at
    /// the most recent yield point
    Cancelled,
}

enum Search {
    Solved,
    Exhausted,
    Cancelled,
}

/// Naive backtracking solver over a [`Board`]
///
/// Candidates are tried in increasing order at the first empty cell in
/// row-major order, so the completion found first is the lexicographically
/// earliest one under that ordering.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve without animation, returning whether a completion was found
    pub fn solve(&self, board: &mut Board) -> bool {
        matches!(
            self.solve_with(board, &mut |_, _| Control::Continue),
            SolveOutcome::Solved
        )
    }

    /// Solve, yielding to `observer` after every trial and every retraction
    ///
    /// The observer sees the live board after each mutation and may return
    /// [`Control::Cancel`] to abandon the search; the solver then unwinds
    /// without touching the board again. A board with no empty cells is
    /// already solved: the observer is never called and no cell changes.
    pub fn solve_with<F>(&self, board: &mut Board, observer: &mut F) -> SolveOutcome
    where
        F: FnMut(&Board, SolveStep) -> Control,
    {
        let mut grid = board.snapshot();
        match self.search(&mut grid, board, observer) {
            Search::Solved => SolveOutcome::Solved,
            Search::Exhausted => SolveOutcome::Unsolvable,
            Search::Cancelled => SolveOutcome::Cancelled,
        }
    }

    // The working grid mirrors the board's committed digits; both are updated
    // at every trial and retraction so the observer always sees live state.
    fn search<F>(&self, grid: &mut Grid, board: &mut Board, observer: &mut F) -> Search
    where
        F: FnMut(&Board, SolveStep) -> Control,
    {
        let pos = match rules::find_empty_cell(grid) {
            Some(pos) => pos,
            None => return Search::Solved,
        };

        for digit in 1..=9u8 {
            if !rules::is_valid(grid, digit, pos) {
                continue;
            }

            grid[pos.row][pos.col] = digit;
            board.place(pos, digit);
            if observer(board, SolveStep::Trial { pos, digit }) == Control::Cancel {
                return Search::Cancelled;
            }

            match self.search(grid, board, observer) {
                // A found solution is never undone
                Search::Solved => return Search::Solved,
                Search::Cancelled => return Search::Cancelled,
                Search::Exhausted => {
                    grid[pos.row][pos.col] = 0;
                    board.unplace(pos);
                    if observer(board, SolveStep::Retract { pos, digit }) == Control::Cancel {
                        return Search::Cancelled;
                    }
                }
            }
        }

        Search::Exhausted
    }
}
