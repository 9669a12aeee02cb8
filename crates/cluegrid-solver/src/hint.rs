//! Hint steps and the top-level hint entry point.

use std::fmt::{self, Display};

use cluegrid_core::{Grid, Position};
use tinyvec::ArrayVec;

use crate::technique::{HintBoard, ordered_techniques};

/// The deductive technique that produced a hint, ordered by difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TechniqueKind {
    /// A cell whose candidate set has exactly one member.
    NakedSingle,
    /// A value with exactly one legal cell within a unit.
    HiddenSingle,
    /// Two cells in a unit sharing an identical two-value candidate set.
    NakedPair,
    /// A value confined, within a box, to a single row or column.
    PointingPair,
}

impl TechniqueKind {
    /// Returns the human-readable technique name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NakedSingle => "Naked Single",
            Self::HiddenSingle => "Hidden Single",
            Self::NakedPair => "Naked Pair",
            Self::PointingPair => "Pointing Pair",
        }
    }
}

impl Display for TechniqueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cells that justify a hint; a pointing triple needs at most three.
pub type SupportingCells = ArrayVec<[Position; 4]>;

/// One human-explainable deductive step.
///
/// Produced fresh on each request and never persisted by the engine. For
/// the single techniques, `value` is the digit to place at `cell`; for the
/// pair techniques, `cell` and `value` are a representative of the pattern
/// and `supporting_cells` carries the full pair or confinement.
///
/// The explanation text is generated from a per-technique template with
/// 1-based coordinates. Only `technique`, `cell`, and `value` are contract;
/// the wording may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintStep {
    /// The technique that produced this step.
    pub technique: TechniqueKind,
    /// The cell the step is about.
    pub cell: Position,
    /// The value the step places or confines.
    pub value: u8,
    /// Cells supporting the deduction (pair and pointing techniques only).
    pub supporting_cells: SupportingCells,
    /// Human-readable justification with 1-based coordinates.
    pub explanation: String,
}

/// Finds the next human-explainable deductive step for a board.
///
/// Techniques are tried in ascending difficulty order, from naked single
/// up to pointing pair, and the first applicable one wins. `None` is not an error: it means no simple logical step exists,
/// which callers typically answer with a direct reveal via
/// [`solve`](crate::solve) or by withholding further free hints.
///
/// # Examples
///
/// ```
/// use cluegrid_core::Position;
/// use cluegrid_solver::{TechniqueKind, next_hint};
///
/// let grid = "
///     12_ 456
///     456 123
///     231 564
///     564 231
///     312 645
///     645 312
/// "
/// .parse()?;
///
/// let step = next_hint(&grid).expect("single empty cell");
/// assert_eq!(step.technique, TechniqueKind::NakedSingle);
/// assert_eq!(step.cell, Position::new(0, 2));
/// assert_eq!(step.value, 3);
/// # Ok::<(), cluegrid_core::ParseGridError>(())
/// ```
#[must_use]
pub fn next_hint(grid: &Grid) -> Option<HintStep> {
    let board = HintBoard::new(grid);
    ordered_techniques()
        .iter()
        .find_map(|technique| technique.find_step(&board))
}

#[cfg(test)]
mod tests {
    use cluegrid_core::{Grid, GridSize};

    use super::*;

    #[test]
    fn test_naked_single_on_six_grid() {
        // Solution row 0 is [1,2,3,4,5,6]; only (0, 2) is empty anywhere,
        // so the hint must be a naked single placing the missing 3
        let grid: Grid = "
            12_ 456
            456 123
            231 564
            564 231
            312 645
            645 312
        "
        .parse()
        .unwrap();

        let step = next_hint(&grid).unwrap();
        assert_eq!(step.technique, TechniqueKind::NakedSingle);
        assert_eq!(step.cell, Position::new(0, 2));
        assert_eq!(step.value, 3);
        assert!(step.supporting_cells.is_empty());
        // 1-based coordinates appear in the explanation
        assert!(step.explanation.contains("row 1"));
        assert!(step.explanation.contains("column 3"));
        assert!(step.explanation.contains('3'));
    }

    #[test]
    fn test_hidden_single_in_row_three() {
        // Value 5 is excluded from every cell of row 3 except column 7:
        // box 3 covers columns 0-2, box 4 covers columns 3-5, and columns
        // 6 and 8 each see a 5 directly
        let mut grid = Grid::empty(GridSize::Nine);
        grid.set(Position::new(4, 0), 5);
        grid.set(Position::new(5, 3), 5);
        grid.set(Position::new(0, 6), 5);
        grid.set(Position::new(8, 8), 5);

        let step = next_hint(&grid).unwrap();
        assert_eq!(step.technique, TechniqueKind::HiddenSingle);
        assert_eq!(step.cell, Position::new(3, 7));
        assert_eq!(step.value, 5);
    }

    #[test]
    fn test_no_hint_on_empty_grid() {
        // An empty grid admits no deduction at all
        assert_eq!(next_hint(&Grid::empty(GridSize::Nine)), None);
        assert_eq!(next_hint(&Grid::empty(GridSize::Six)), None);
    }

    #[test]
    fn test_no_hint_on_complete_grid() {
        let grid: Grid = "
            123 456
            456 123
            231 564
            564 231
            312 645
            645 312
        "
        .parse()
        .unwrap();
        assert_eq!(next_hint(&grid), None);
    }

    #[test]
    fn test_single_placements_match_oracle_solution() {
        // Hint soundness: placement hints agree with the unique solution
        let puzzle: Grid = "
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
        let solution = crate::solve(&puzzle).unwrap();

        let before = puzzle.filled_count();
        let mut grid = puzzle;
        while let Some(step) = next_hint(&grid) {
            match step.technique {
                TechniqueKind::NakedSingle | TechniqueKind::HiddenSingle => {
                    assert_eq!(
                        step.value,
                        solution.get(step.cell),
                        "unsound hint at {}",
                        step.cell
                    );
                    grid.set(step.cell, step.value);
                }
                // Pair steps report eliminations, not placements; stop here
                _ => break,
            }
        }
        // Progress was made and every placement kept the grid uniquely solvable
        assert!(grid.filled_count() > before);
        assert_eq!(crate::count_solutions(&grid, 2), 1);
    }
}
