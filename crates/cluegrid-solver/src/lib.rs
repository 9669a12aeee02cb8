//! Solving engines for cluegrid puzzles.
//!
//! Two engines live here:
//!
//! - The **solvability oracle** ([`count_solutions`], [`solve`]):
//!   backtracking search with most-constrained-cell selection, used by the
//!   generator to preserve uniqueness while carving and available to callers
//!   that need a direct reveal when no deductive hint applies.
//! - The **hint engine** ([`next_hint`]): human-style deductive techniques
//!   tried in ascending difficulty order, producing one explainable
//!   [`HintStep`] at a time.
//!
//! # Examples
//!
//! ```
//! use cluegrid_solver::{count_solutions, next_hint};
//!
//! let grid = "
//!     123 456
//!     456 123
//!     231 564
//!     564 231
//!     312 645
//!     64. 312
//! "
//! .parse()?;
//!
//! assert_eq!(count_solutions(&grid, 2), 1);
//! let step = next_hint(&grid).expect("one cell left is a naked single");
//! assert_eq!(step.value, 5);
//! # Ok::<(), cluegrid_core::ParseGridError>(())
//! ```

pub mod hint;
pub mod oracle;
pub mod technique;
pub mod unit;

pub use self::{
    hint::{HintStep, TechniqueKind, next_hint},
    oracle::{count_solutions, solve},
    technique::{BoxedTechnique, Technique, ordered_techniques},
    unit::Unit,
};
