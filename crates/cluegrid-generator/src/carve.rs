//! Clue removal with a uniqueness-preserving oracle check.

use cluegrid_core::{Grid, Position};
use cluegrid_solver::count_solutions;
use log::warn;
use rand::{Rng, RngExt, seq::SliceRandom};

/// Removal attempts allowed per cell of the grid.
const ATTEMPT_BUDGET_FACTOR: usize = 3;

/// Carves clues out of a complete solution while preserving uniqueness.
///
/// Cells are visited in a shuffled order (falling back to uniform random
/// re-picks once the shuffled pass is exhausted). Each visit tentatively
/// clears a filled cell and asks the oracle whether exactly one completion
/// remains; if not, the value is restored. Carving stops once
/// `target_clue_count` filled cells remain or the attempt budget runs out.
///
/// Budget exhaustion is a graceful degradation, not an error: the result
/// keeps more clues than the nominal target. Callers may rely on "at least
/// `target_clue_count` clues", never on an exact count.
pub fn carve<R: Rng + ?Sized>(solution: &Grid, target_clue_count: usize, rng: &mut R) -> Grid {
    let size = solution.size();
    let mut clues = solution.clone();

    let mut order: Vec<Position> = size.positions().collect();
    order.shuffle(rng);
    let mut order = order.into_iter();

    let budget = size.cell_count() * ATTEMPT_BUDGET_FACTOR;
    for _ in 0..budget {
        if clues.filled_count() <= target_clue_count {
            break;
        }
        let pos = order.next().unwrap_or_else(|| {
            Position::new(
                rng.random_range(0..size.n()),
                rng.random_range(0..size.n()),
            )
        });
        let value = clues.get(pos);
        if value == 0 {
            continue;
        }

        clues.clear(pos);
        if count_solutions(&clues, 2) != 1 {
            clues.set(pos, value);
        }
    }

    let remaining = clues.filled_count();
    if remaining > target_clue_count {
        warn!("carving budget exhausted with {remaining} clues (target {target_clue_count})");
    }
    clues
}

#[cfg(test)]
mod tests {
    use cluegrid_core::{Difficulty, GridSize};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use crate::generate_solution;

    use super::*;

    #[test]
    fn test_carved_grid_is_unique_sub_grid() {
        let mut rng = Pcg64::seed_from_u64(11);
        let solution = generate_solution(GridSize::Six, &mut rng);
        let target = Difficulty::Medium.clue_target(GridSize::Six);
        let clues = carve(&solution, target, &mut rng);

        assert!(clues.filled_count() >= target);
        assert_eq!(count_solutions(&clues, 2), 1);
        for pos in GridSize::Six.positions() {
            let clue = clues.get(pos);
            assert!(clue == 0 || clue == solution.get(pos));
        }
    }

    #[test]
    fn test_target_equal_to_cell_count_removes_nothing() {
        let mut rng = Pcg64::seed_from_u64(11);
        let solution = generate_solution(GridSize::Six, &mut rng);
        let clues = carve(&solution, GridSize::Six.cell_count(), &mut rng);
        assert_eq!(clues, solution);
    }
}
