//! A carved puzzle paired with its full solution.

use crate::{Difficulty, Grid, GridSize, Position};

/// An immutable puzzle: carved clues, the complete solution, and metadata.
///
/// A `Puzzle` is created once by the generator and never mutated. Callers
/// hold it for the duration of one play session and pass it back into solver
/// and validation calls; the engine itself retains no session state.
///
/// Invariants, established at construction:
///
/// - `solution` is a complete, consistent grid;
/// - every non-zero cell of `clues` equals the corresponding solution cell;
/// - the generator additionally guarantees that `clues` admits exactly one
///   completion (checked with the solution-counting oracle, which lives in
///   the solver crate and is therefore re-verified there, not here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: GridSize,
    difficulty: Difficulty,
    clues: Grid,
    solution: Grid,
    seed: Option<String>,
}

impl Puzzle {
    /// Creates a puzzle from a carved clue grid and its solution.
    ///
    /// # Panics
    ///
    /// Panics if the grids disagree in size, if `solution` is not a valid
    /// complete grid, or if `clues` is not a sub-grid of `solution`. These
    /// are construction bugs in the generator, not runtime conditions.
    #[must_use]
    pub fn new(
        difficulty: Difficulty,
        clues: Grid,
        solution: Grid,
        seed: Option<String>,
    ) -> Self {
        let size = solution.size();
        assert_eq!(clues.size(), size, "clue and solution sizes disagree");
        assert!(solution.is_valid_solution(), "solution grid is not valid");
        assert!(
            size.positions()
                .all(|pos| clues.get(pos) == 0 || clues.get(pos) == solution.get(pos)),
            "clues are not a sub-grid of the solution"
        );
        Self {
            size,
            difficulty,
            clues,
            solution,
            seed,
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the difficulty tier the puzzle was carved for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the carved clue grid.
    #[must_use]
    pub const fn clues(&self) -> &Grid {
        &self.clues
    }

    /// Returns the complete solution grid.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the seed string for seeded puzzles, if any.
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Returns the number of clue cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.clues.filled_count()
    }

    /// Returns `true` if `pos` holds a pre-filled clue.
    #[must_use]
    pub fn is_clue(&self, pos: Position) -> bool {
        self.clues.get(pos) != 0
    }
}
