//! Interactive Sudoku engine: board state, validity rules, and a
//! step-observable backtracking solver.
//!
//! The board holds 81 cells, each [`CellState::Empty`], a provisional
//! [`CellState::Guessed`] pencil mark, or an authoritative
//! [`CellState::Committed`] digit. Guesses are promoted by [`Board::commit`],
//! which validates against the row/column/box uniqueness rules exactly once,
//! at commit time. [`Solver::solve_with`] fills the remaining cells by naive
//! depth-first backtracking, yielding to an observer after every trial
//! placement and every retraction so a caller can animate the search and
//! cancel it at any yield point.

mod board;
mod cell;
mod rules;
mod solver;

pub use board::Board;
pub use cell::{CellState, Position};
pub use rules::{find_empty_cell, is_complete, is_valid, Grid};
pub use solver::{Control, SolveOutcome, SolveStep, Solver};
