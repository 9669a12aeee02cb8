//! Board position type.

use std::fmt::{self, Display};

/// A cell position identified by zero-based row and column.
///
/// # Examples
///
/// ```
/// use cluegrid_core::Position;
///
/// let pos = Position::new(3, 7);
/// assert_eq!(pos.row(), 3);
/// assert_eq!(pos.col(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from zero-based row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based for human-facing text such as hint explanations
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}
