//! Deductive solving techniques.
//!
//! Each technique implements the [`Technique`] trait and scans a
//! [`HintBoard`] for its pattern, producing at most one [`HintStep`] per
//! call. Scan order is deterministic: rows before columns before boxes,
//! ascending values, row-major cells.

use std::fmt::Debug;

use cluegrid_core::{Candidates, Grid, GridSize, Position, value_set::ValueSet};

pub use self::{
    hidden_single::HiddenSingle, naked_pair::NakedPair, naked_single::NakedSingle,
    pointing_pair::PointingPair,
};
use crate::HintStep;

mod hidden_single;
mod naked_pair;
mod naked_single;
mod pointing_pair;

/// Returns all techniques in ascending difficulty order.
///
/// The order is the hint engine's contract: the first technique that finds
/// a step wins, so easier explanations always take precedence.
///
/// # Examples
///
/// ```
/// use cluegrid_solver::technique::ordered_techniques;
///
/// let techniques = ordered_techniques();
/// assert_eq!(techniques.len(), 4);
/// assert_eq!(techniques[0].kind().name(), "Naked Single");
/// ```
#[must_use]
pub fn ordered_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedPair::new()),
        Box::new(PointingPair::new()),
    ]
}

/// A deductive solving technique.
pub trait Technique: Debug {
    /// Returns which technique this is.
    fn kind(&self) -> crate::TechniqueKind;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Scans the board and returns the first step this technique finds.
    ///
    /// Returns `None` when the pattern does not occur anywhere on the
    /// board; that is a valid terminal state, not an error.
    fn find_step(&self, board: &HintBoard<'_>) -> Option<HintStep>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A board together with its derived candidate sets.
///
/// Candidates are recomputed from the grid at construction, never carried
/// between calls, so they cannot drift from the authoritative cell values.
#[derive(Debug)]
pub struct HintBoard<'a> {
    grid: &'a Grid,
    candidates: Candidates,
}

impl<'a> HintBoard<'a> {
    /// Computes candidates for `grid` and wraps both for technique scans.
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            candidates: Candidates::from_grid(grid),
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Returns `true` if the cell at `pos` is empty.
    #[must_use]
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.grid.get(pos) == 0
    }

    /// Returns the candidate set at `pos` (empty for filled cells).
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> ValueSet {
        self.candidates.at(pos)
    }
}
