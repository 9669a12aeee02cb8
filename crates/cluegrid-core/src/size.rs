//! Supported grid sizes and their box geometry.

use derive_more::{Display, Error};

use crate::Position;

/// A supported grid size with its box shape.
///
/// Box dimensions are an explicit lookup, not derived from `sqrt(n)`: the
/// 6×6 grid uses 2×3 boxes, which no square root produces. Every other
/// component obtains geometry exclusively through this type.
///
/// # Examples
///
/// ```
/// use cluegrid_core::GridSize;
///
/// let size = GridSize::Six;
/// assert_eq!(size.n(), 6);
/// assert_eq!((size.box_rows(), size.box_cols()), (2, 3));
///
/// let size = GridSize::Nine;
/// assert_eq!((size.box_rows(), size.box_cols()), (3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    /// A 6×6 grid with 2×3 boxes.
    Six,
    /// A 9×9 grid with 3×3 boxes.
    Nine,
}

/// Error returned when a side length has no supported box factorization.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("grid size {n} has no supported box factorization")]
pub struct UnsupportedSizeError {
    /// The rejected side length.
    pub n: u8,
}

impl GridSize {
    /// Array containing all supported sizes, smallest first.
    pub const ALL: [Self; 2] = [Self::Six, Self::Nine];

    /// Resolves a side length to a supported size.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedSizeError`] if `n` is not a supported side
    /// length. This is a configuration error: callers reject it before any
    /// generation or solving starts.
    pub fn from_n(n: u8) -> Result<Self, UnsupportedSizeError> {
        match n {
            6 => Ok(Self::Six),
            9 => Ok(Self::Nine),
            n => Err(UnsupportedSizeError { n }),
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn n(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Nine => 9,
        }
    }

    /// Returns the number of rows in one box.
    #[must_use]
    pub const fn box_rows(self) -> u8 {
        match self {
            Self::Six => 2,
            Self::Nine => 3,
        }
    }

    /// Returns the number of columns in one box.
    #[must_use]
    pub const fn box_cols(self) -> u8 {
        match self {
            Self::Six => 3,
            Self::Nine => 3,
        }
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let n = self.n() as usize;
        n * n
    }

    /// Returns the top-left position of the box containing `pos`.
    #[must_use]
    pub fn box_origin(self, pos: Position) -> Position {
        let row = pos.row() / self.box_rows() * self.box_rows();
        let col = pos.col() / self.box_cols() * self.box_cols();
        Position::new(row, col)
    }

    /// Returns the index of the box containing `pos`.
    ///
    /// Boxes are numbered left to right, top to bottom.
    #[must_use]
    pub fn box_index(self, pos: Position) -> u8 {
        let boxes_per_row = self.n() / self.box_cols();
        pos.row() / self.box_rows() * boxes_per_row + pos.col() / self.box_cols()
    }

    /// Returns the top-left position of the box with the given index.
    #[must_use]
    pub fn box_origin_of_index(self, index: u8) -> Position {
        let boxes_per_row = self.n() / self.box_cols();
        Position::new(
            index / boxes_per_row * self.box_rows(),
            index % boxes_per_row * self.box_cols(),
        )
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let n = self.n();
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }

    /// Returns an iterator over the positions of the box containing `pos`.
    pub fn box_positions(self, pos: Position) -> impl Iterator<Item = Position> {
        let origin = self.box_origin(pos);
        (0..self.box_rows()).flat_map(move |dr| {
            (0..self.box_cols()).map(move |dc| Position::new(origin.row() + dr, origin.col() + dc))
        })
    }

    /// Converts a position to its row-major cell index.
    #[must_use]
    pub fn cell_index(self, pos: Position) -> usize {
        usize::from(pos.row()) * usize::from(self.n()) + usize::from(pos.col())
    }
}
