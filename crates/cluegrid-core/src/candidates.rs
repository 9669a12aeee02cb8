//! Per-cell candidate sets derived from a grid.

use crate::{Grid, GridSize, Position, value_set::ValueSet};

/// Candidate sets for every cell of a grid, computed on demand.
///
/// This is derived state, never authoritative: it is recomputed from the
/// current [`Grid`] whenever a caller needs it, so it cannot drift out of
/// sync with the board. Filled cells carry an empty candidate set.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Candidates, Grid, GridSize, Position};
///
/// let mut grid = Grid::empty(GridSize::Nine);
/// grid.set(Position::new(0, 0), 5);
///
/// let candidates = Candidates::from_grid(&grid);
/// assert!(!candidates.at(Position::new(0, 8)).contains(5));
/// assert!(candidates.at(Position::new(0, 8)).contains(6));
/// assert!(candidates.at(Position::new(0, 0)).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    size: GridSize,
    sets: Vec<ValueSet>,
}

impl Candidates {
    /// Computes candidate sets for every cell of `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let sets = size
            .positions()
            .map(|pos| {
                if grid.get(pos) != 0 {
                    return ValueSet::EMPTY;
                }
                ValueSet::full(size)
                    .iter()
                    .filter(|&v| grid.is_consistent_placement(pos, v))
                    .collect()
            })
            .collect();
        Self { size, sets }
    }

    /// Returns the candidate set at `pos`.
    #[must_use]
    pub fn at(&self, pos: Position) -> ValueSet {
        self.sets[self.size.cell_index(pos)]
    }

    /// Returns the grid size these candidates were computed for.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }
}
