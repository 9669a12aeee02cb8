//! The board type and its consistency check.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{GridSize, Position, UnsupportedSizeError};

/// An N×N board mapping positions to values, where `0` means empty.
///
/// The grid upholds one rule, the consistency invariant: no filled cell may
/// share its value with another cell in the same row, column, or box.
/// [`Grid::is_consistent_placement`] is the sole arbiter of that rule; every
/// other component defers to it.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Grid, GridSize, Position};
///
/// let mut grid = Grid::empty(GridSize::Six);
/// grid.set(Position::new(0, 0), 4);
///
/// // Same row, same box, and same column are all excluded
/// assert!(!grid.is_consistent_placement(Position::new(0, 5), 4));
/// assert!(!grid.is_consistent_placement(Position::new(1, 2), 4));
/// assert!(!grid.is_consistent_placement(Position::new(5, 0), 4));
/// assert!(grid.is_consistent_placement(Position::new(5, 5), 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an empty grid of the given size.
    #[must_use]
    pub fn empty(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![0; size.cell_count()],
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the value at `pos`, or `0` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[self.size.cell_index(pos)]
    }

    /// Sets the value at `pos`.
    ///
    /// This does not enforce the consistency invariant; use
    /// [`Grid::is_consistent_placement`] first when legality matters.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds the grid's side length.
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(value <= self.size.n(), "value out of range: {value}");
        let i = self.size.cell_index(pos);
        self.cells[i] = value;
    }

    /// Clears the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        let i = self.size.cell_index(pos);
        self.cells[i] = 0;
    }

    /// Returns `true` if placing `value` at `pos` would not conflict with
    /// any filled cell in the same row, column, or box.
    ///
    /// The cell at `pos` itself is excluded from the check, so the question
    /// "is the current value of this cell consistent?" can be asked directly.
    #[must_use]
    pub fn is_consistent_placement(&self, pos: Position, value: u8) -> bool {
        let n = self.size.n();
        for i in 0..n {
            let row_peer = Position::new(pos.row(), i);
            if row_peer != pos && self.get(row_peer) == value {
                return false;
            }
            let col_peer = Position::new(i, pos.col());
            if col_peer != pos && self.get(col_peer) == value {
                return false;
            }
        }
        self.size
            .box_positions(pos)
            .all(|peer| peer == pos || self.get(peer) != value)
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Returns `true` if the grid is complete and every cell satisfies the
    /// consistency invariant.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.is_complete()
            && self
                .size
                .positions()
                .all(|pos| self.is_consistent_placement(pos, self.get(pos)))
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Returns the raw cells in row-major order.
    ///
    /// Intended for callers that persist grids in their own flat format.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Error produced when parsing a grid from its compact string form.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The number of cells does not match any supported grid size.
    #[display("{}", _0)]
    BadCellCount(UnsupportedSizeError),
    /// A character is neither a digit in range nor an empty-cell marker.
    #[display("invalid cell character {c:?}")]
    BadCell {
        /// The offending character.
        c: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from digits with `.` or `_` marking empty cells.
    ///
    /// Whitespace is ignored, so rows may be laid out freely in test
    /// fixtures. The grid size is inferred from the cell count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            match c {
                '.' | '_' => values.push(0),
                c => {
                    let value = c.to_digit(10).ok_or(ParseGridError::BadCell { c })?;
                    #[expect(clippy::cast_possible_truncation)]
                    values.push(value as u8);
                }
            }
        }
        let n = match values.len() {
            36 => 6,
            81 => 9,
            len => {
                #[expect(clippy::cast_possible_truncation)]
                let n = (len as f64).sqrt() as u8;
                return Err(ParseGridError::BadCellCount(UnsupportedSizeError { n }));
            }
        };
        let size = GridSize::from_n(n).map_err(ParseGridError::BadCellCount)?;
        if let Some(&v) = values.iter().find(|&&v| v > size.n()) {
            return Err(ParseGridError::BadCell {
                c: char::from(b'0' + v),
            });
        }
        Ok(Self { size, cells: values })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size.n() {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..self.size.n() {
                if col != 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    0 => write!(f, ".")?,
                    v => write!(f, "{v}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut grid = Grid::empty(GridSize::Nine);
        let pos = Position::new(4, 4);

        grid.set(pos, 7);
        assert_eq!(grid.get(pos), 7);
        assert_eq!(grid.filled_count(), 1);

        grid.clear(pos);
        assert_eq!(grid.get(pos), 0);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    #[should_panic(expected = "value out of range")]
    fn test_set_rejects_value_above_n() {
        let mut grid = Grid::empty(GridSize::Six);
        grid.set(Position::new(0, 0), 7);
    }

    #[test]
    fn test_consistency_ignores_target_cell() {
        // A filled cell's own value must count as consistent with itself
        let mut grid = Grid::empty(GridSize::Nine);
        let pos = Position::new(2, 3);
        grid.set(pos, 5);

        assert!(grid.is_consistent_placement(pos, 5));
    }

    #[test]
    fn test_six_by_six_box_conflict() {
        // In a 6×6 grid, (0, 0) and (1, 2) share a 2×3 box
        let mut grid = Grid::empty(GridSize::Six);
        grid.set(Position::new(0, 0), 3);

        assert!(!grid.is_consistent_placement(Position::new(1, 2), 3));
        // (2, 0) is in the box below, only the column constraint applies
        assert!(!grid.is_consistent_placement(Position::new(2, 0), 3));
        assert!(grid.is_consistent_placement(Position::new(2, 1), 3));
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid: Grid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        assert_eq!(grid.size(), GridSize::Nine);
        assert_eq!(grid.get(Position::new(0, 0)), 5);
        assert_eq!(grid.get(Position::new(0, 2)), 0);
        assert_eq!(grid.filled_count(), 30);

        let round_trip: Grid = grid.to_string().parse().unwrap();
        assert_eq!(round_trip, grid);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "12".parse::<Grid>(),
            Err(ParseGridError::BadCellCount(_))
        ));
        assert!(matches!(
            "x".repeat(36).parse::<Grid>(),
            Err(ParseGridError::BadCell { c: 'x' })
        ));
        // 9 is out of range for a 6×6 grid
        assert!(matches!(
            format!("9{}", ".".repeat(35)).parse::<Grid>(),
            Err(ParseGridError::BadCell { c: '9' })
        ));
    }

    #[test]
    fn test_is_valid_solution() {
        let solution: Grid = "
            123 456
            456 123
            231 564
            564 231
            312 645
            645 312
        "
        .parse()
        .unwrap();
        assert!(solution.is_valid_solution());

        let mut broken = solution.clone();
        broken.set(Position::new(0, 0), 2);
        assert!(!broken.is_valid_solution());

        let mut incomplete = solution;
        incomplete.clear(Position::new(3, 3));
        assert!(!incomplete.is_valid_solution());
    }

    proptest! {
        #[test]
        fn prop_placement_conflicts_are_symmetric(
            row_a in 0_u8..9, col_a in 0_u8..9,
            row_b in 0_u8..9, col_b in 0_u8..9,
            value in 1_u8..=9,
        ) {
            let a = Position::new(row_a, col_a);
            let b = Position::new(row_b, col_b);
            prop_assume!(a != b);

            // If placing at `a` blocks `b`, then placing at `b` blocks `a`
            let mut grid = Grid::empty(GridSize::Nine);
            grid.set(a, value);
            let blocks_b = !grid.is_consistent_placement(b, value);

            let mut grid = Grid::empty(GridSize::Nine);
            grid.set(b, value);
            let blocks_a = !grid.is_consistent_placement(a, value);

            prop_assert_eq!(blocks_b, blocks_a);
        }
    }
}
