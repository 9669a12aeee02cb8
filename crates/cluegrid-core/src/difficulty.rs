//! Difficulty tiers and their clue budgets.

use std::fmt::{self, Display};

use crate::GridSize;

/// An ordered difficulty tier.
///
/// The ordering is by challenge: `Easy < Medium < Hard < Expert`. Each tier
/// maps to a fixed clue budget per grid size via [`Difficulty::clue_target`];
/// the mapping is a lookup table, never computed.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Difficulty, GridSize};
///
/// assert!(Difficulty::Easy < Difficulty::Expert);
/// assert!(
///     Difficulty::Expert.clue_target(GridSize::Nine)
///         < Difficulty::Easy.clue_target(GridSize::Nine)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Generous clues; solvable with singles alone.
    Easy,
    /// Fewer clues; occasional pair logic required.
    Medium,
    /// Sparse clues.
    Hard,
    /// The sparsest clue budget the carver targets.
    Expert,
}

impl Difficulty {
    /// Array containing all tiers, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the number of clues the carver aims to retain.
    ///
    /// Carving stops once this many filled cells remain. The budget is a
    /// target, not a guarantee: a carve that runs out of attempts leaves
    /// more clues than this (never fewer).
    #[must_use]
    pub const fn clue_target(self, size: GridSize) -> usize {
        match (size, self) {
            (GridSize::Six, Self::Easy) => 22,
            (GridSize::Six, Self::Medium) => 18,
            (GridSize::Six, Self::Hard) => 15,
            (GridSize::Six, Self::Expert) => 12,
            (GridSize::Nine, Self::Easy) => 38,
            (GridSize::Nine, Self::Medium) => 32,
            (GridSize::Nine, Self::Hard) => 27,
            (GridSize::Nine, Self::Expert) => 24,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        f.write_str(name)
    }
}
