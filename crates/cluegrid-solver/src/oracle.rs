//! Backtracking search: solution counting and direct solving.

use cluegrid_core::{Grid, Position, value_set::ValueSet};

/// Counts completions of a partial grid, stopping at `cap`.
///
/// The only cap used elsewhere in the engine is `2`, which answers the
/// question that matters: zero solutions (over-carved), exactly one
/// (uniquely solvable), or more than one (ambiguous).
///
/// The search always branches on the empty cell with the fewest remaining
/// candidates, breaking ties in row-major order. On sparse 9×9 boards this
/// most-constrained-cell rule is what keeps carving tractable.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Grid, GridSize};
/// use cluegrid_solver::count_solutions;
///
/// // An empty grid has a vast number of completions; the cap stops early
/// let empty = Grid::empty(GridSize::Six);
/// assert_eq!(count_solutions(&empty, 2), 2);
/// ```
#[must_use]
pub fn count_solutions(grid: &Grid, cap: usize) -> usize {
    if !givens_consistent(grid) {
        return 0;
    }
    let mut work = grid.clone();
    let mut found = 0;
    count_completions(&mut work, cap, &mut found);
    found
}

/// Returns the first completion found by the backtracking search, if any.
///
/// When the grid is uniquely solvable this is *the* solution. The search
/// order matches [`count_solutions`], so results are deterministic for a
/// given input.
#[must_use]
pub fn solve(grid: &Grid) -> Option<Grid> {
    if !givens_consistent(grid) {
        return None;
    }
    let mut work = grid.clone();
    solve_in_place(&mut work).then_some(work)
}

/// Checks every filled cell against the rest of its row, column, and box.
///
/// The search only validates values it places itself, so grids arriving
/// with conflicting givens must be rejected before counting starts.
fn givens_consistent(grid: &Grid) -> bool {
    grid.size().positions().all(|pos| {
        let value = grid.get(pos);
        value == 0 || grid.is_consistent_placement(pos, value)
    })
}

/// Picks the empty cell with the fewest candidates, row-major tie-break.
///
/// Returns `None` when the grid is complete. A returned cell may carry an
/// empty candidate set, which marks a dead branch.
fn most_constrained_cell(grid: &Grid) -> Option<(Position, ValueSet)> {
    let size = grid.size();
    let mut best: Option<(Position, ValueSet)> = None;
    for pos in size.positions() {
        if grid.get(pos) != 0 {
            continue;
        }
        let candidates: ValueSet = ValueSet::full(size)
            .iter()
            .filter(|&v| grid.is_consistent_placement(pos, v))
            .collect();
        match &best {
            Some((_, current)) if current.len() <= candidates.len() => {}
            _ => {
                let decided = candidates.len() <= 1;
                best = Some((pos, candidates));
                if decided {
                    break;
                }
            }
        }
    }
    best
}

fn count_completions(grid: &mut Grid, cap: usize, found: &mut usize) {
    let Some((pos, candidates)) = most_constrained_cell(grid) else {
        *found += 1;
        return;
    };
    for value in candidates {
        grid.set(pos, value);
        count_completions(grid, cap, found);
        grid.clear(pos);
        if *found >= cap {
            return;
        }
    }
}

fn solve_in_place(grid: &mut Grid) -> bool {
    let Some((pos, candidates)) = most_constrained_cell(grid) else {
        return true;
    };
    for value in candidates {
        grid.set(pos, value);
        if solve_in_place(grid) {
            return true;
        }
        grid.clear(pos);
    }
    false
}
