//! Full-solution generation by randomized backtracking.

use cluegrid_core::{Grid, GridSize, Position, value_set::ValueSet};
use rand::{Rng, seq::SliceRandom};

/// Fills an empty grid into one complete, consistent solution.
///
/// The first row is seeded with a random permutation of `1..=n`, then the
/// remaining cells are filled by backtracking, trying candidate values in
/// a freshly shuffled order at every cell so grid shapes carry no bias
/// from the scan order. The search is exhaustive, so it always succeeds
/// for the supported sizes; no retry policy is needed.
///
/// # Examples
///
/// ```
/// use cluegrid_core::GridSize;
/// use cluegrid_generator::generate_solution;
///
/// let solution = generate_solution(GridSize::Nine, &mut rand::rng());
/// assert!(solution.is_valid_solution());
/// ```
pub fn generate_solution<R: Rng + ?Sized>(size: GridSize, rng: &mut R) -> Grid {
    let mut grid = Grid::empty(size);

    let mut first_row: Vec<u8> = (1..=size.n()).collect();
    first_row.shuffle(rng);
    for (col, &value) in (0..).zip(&first_row) {
        grid.set(Position::new(0, col), value);
    }

    let filled = fill_remaining(&mut grid, rng);
    debug_assert!(filled, "exhaustive backtracking cannot fail");
    grid
}

fn fill_remaining<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let size = grid.size();
    let Some(pos) = size.positions().find(|&pos| grid.get(pos) == 0) else {
        return true;
    };

    let mut values: Vec<u8> = ValueSet::full(size)
        .iter()
        .filter(|&v| grid.is_consistent_placement(pos, v))
        .collect();
    values.shuffle(rng);

    for value in values {
        grid.set(pos, value);
        if fill_remaining(grid, rng) {
            return true;
        }
        grid.clear(pos);
    }
    false
}
