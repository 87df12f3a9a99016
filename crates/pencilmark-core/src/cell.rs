/// A position on the 9x9 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position, asserting both coordinates are in range
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9, "position ({}, {}) out of range", row, col);
        Self { row, col }
    }

    /// Index of the 3x3 box containing this position (0-8, row-major)
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position { row, col }))
    }
}

/// The state of a single cell
///
/// A provisional pencil mark and an authoritative value cannot coexist:
/// committing replaces the guess, and clearing drops both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Nothing entered
    #[default]
    Empty,
    /// Provisional pencil mark, not yet validated
    Guessed(u8),
    /// Authoritative value, validated at commit time (or solver-placed)
    Committed(u8),
}

impl CellState {
    /// The authoritative digit, if any
    pub fn committed(&self) -> Option<u8> {
        match self {
            CellState::Committed(d) => Some(*d),
            _ => None,
        }
    }

    /// The pencil-mark digit, if any
    pub fn guess(&self) -> Option<u8> {
        match self {
            CellState::Guessed(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, CellState::Committed(_))
    }
}
