//! Rows, columns, and boxes as scan units.

use std::fmt::{self, Display};

use cluegrid_core::{GridSize, Position};

/// A scan unit: one row, column, or box of the grid.
///
/// Techniques scan units in a fixed order (all rows, then all columns,
/// then all boxes, each by ascending index), so hint results are
/// deterministic for a given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its zero-based index.
    Row(u8),
    /// A column identified by its zero-based index.
    Col(u8),
    /// A box identified by its zero-based index, left to right, top to
    /// bottom.
    Box(u8),
}

impl Unit {
    /// Returns all units of a grid in row, column, box order.
    #[must_use]
    pub fn all(size: GridSize) -> Vec<Self> {
        let n = size.n();
        (0..n)
            .map(Self::Row)
            .chain((0..n).map(Self::Col))
            .chain((0..n).map(Self::Box))
            .collect()
    }

    /// Returns the positions of this unit in scan order.
    #[must_use]
    pub fn positions(self, size: GridSize) -> Vec<Position> {
        let n = size.n();
        match self {
            Self::Row(row) => (0..n).map(|col| Position::new(row, col)).collect(),
            Self::Col(col) => (0..n).map(|row| Position::new(row, col)).collect(),
            Self::Box(index) => size
                .box_positions(size.box_origin_of_index(index))
                .collect(),
        }
    }

    /// Returns `true` if this unit contains `pos`.
    #[must_use]
    pub fn contains(self, size: GridSize, pos: Position) -> bool {
        match self {
            Self::Row(row) => pos.row() == row,
            Self::Col(col) => pos.col() == col,
            Self::Box(index) => size.box_index(pos) == index,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based, for hint explanation text
        match self {
            Self::Row(row) => write!(f, "row {}", row + 1),
            Self::Col(col) => write!(f, "column {}", col + 1),
            Self::Box(index) => write!(f, "box {}", index + 1),
        }
    }
}
