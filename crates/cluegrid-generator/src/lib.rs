//! Puzzle generation for cluegrid.
//!
//! Generation runs in two phases, both driven by a caller-supplied random
//! source: [`generate_solution`] fills an empty grid by randomized
//! backtracking, then [`carve`] removes cells one at a time, consulting the
//! solver crate's solution-counting oracle so that every removal preserves
//! unique solvability. [`generate_puzzle`] chains the two for a difficulty
//! tier, and [`generate_seeded_puzzle`] pins all randomness to a hash of a
//! calendar-day key so that everyone sharing a date key gets the identical
//! daily puzzle.
//!
//! Generation is CPU-bound, synchronous, and unbounded in the worst case;
//! interactive callers run it off the latency-sensitive thread.
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::{Difficulty, GridSize};
//! use cluegrid_generator::generate_puzzle;
//!
//! let mut rng = rand::rng();
//! let puzzle = generate_puzzle(GridSize::Six, Difficulty::Easy, &mut rng);
//! assert!(puzzle.clue_count() >= Difficulty::Easy.clue_target(GridSize::Six));
//! ```

pub mod carve;
pub mod fill;
pub mod seeded;

use cluegrid_core::{Difficulty, GridSize, Puzzle};
use rand::Rng;

pub use self::{
    carve::carve,
    fill::generate_solution,
    seeded::{DAILY_DIFFICULTY, GenerateError, generate_seeded_puzzle},
};

/// Generates a puzzle of the requested size and difficulty.
///
/// The returned [`Puzzle`] upholds the uniqueness invariant: its clue grid
/// admits exactly one completion, the stored solution. The clue count is
/// at least the difficulty's target; it exceeds the target only when the
/// carving attempt budget runs out first.
pub fn generate_puzzle<R: Rng + ?Sized>(
    size: GridSize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Puzzle {
    let solution = generate_solution(size, rng);
    let clues = carve(&solution, difficulty.clue_target(size), rng);
    Puzzle::new(difficulty, clues, solution, None)
}
