use cluegrid_core::{Position, value_set::ValueSet};

use super::{BoxedTechnique, HintBoard, Technique};
use crate::{HintStep, TechniqueKind, Unit, hint::SupportingCells};

const KIND: TechniqueKind = TechniqueKind::NakedPair;

/// Finds two cells in a unit sharing an identical two-value candidate set.
///
/// Those two values are locked into the pair, so every other cell of the
/// unit can drop them. A pair is only reported when it eliminates
/// something: at least one other cell of the unit must still hold one of
/// the pair values as a candidate, otherwise the step teaches nothing.
///
/// The reported `cell` and `value` are a representative (the first pair
/// cell and the smaller value); the full pair travels in
/// `supporting_cells`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair;

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedPair {
    fn kind(&self) -> TechniqueKind {
        KIND
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, board: &HintBoard<'_>) -> Option<HintStep> {
        let size = board.size();
        for unit in Unit::all(size) {
            let positions = unit.positions(size);
            let pair_cells: Vec<(Position, ValueSet)> = positions
                .iter()
                .filter(|&&pos| board.is_empty_cell(pos))
                .map(|&pos| (pos, board.candidates_at(pos)))
                .filter(|(_, candidates)| candidates.len() == 2)
                .collect();

            for (i, &(first, pair)) in pair_cells.iter().enumerate() {
                let Some(&(second, _)) = pair_cells[i + 1..]
                    .iter()
                    .find(|(_, candidates)| *candidates == pair)
                else {
                    continue;
                };
                let eliminates = positions.iter().any(|&pos| {
                    pos != first
                        && pos != second
                        && board.is_empty_cell(pos)
                        && !(board.candidates_at(pos) & pair).is_empty()
                });
                if !eliminates {
                    continue;
                }

                let mut values = pair.iter();
                let (low, high) = (values.next()?, values.next()?);
                let mut supporting = SupportingCells::new();
                supporting.push(first);
                supporting.push(second);
                return Some(HintStep {
                    technique: KIND,
                    cell: first,
                    value: low,
                    supporting_cells: supporting,
                    explanation: format!(
                        "The cells at row {}, column {} and row {}, column {} form a naked \
                         pair of {low} and {high} in {unit}; no other cell there can hold \
                         those values.",
                        first.row() + 1,
                        first.col() + 1,
                        second.row() + 1,
                        second.col() + 1,
                    ),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use cluegrid_core::{Grid, GridSize};

    use super::*;

    /// Builds a 9×9 grid where (0, 0) and (0, 4) both have candidates
    /// {1, 2} while the rest of row 0 stays open.
    ///
    /// Columns 0 and 4 carry 3-8, and each top box carries a 9, so the two
    /// cells exclude everything except 1 and 2.
    fn grid_with_pair_in_row() -> Grid {
        "
            ___ ___ ___
            _9_ ___ ___
            ___ 9__ ___
            3__ _4_ ___
            4__ _5_ ___
            5__ _6_ ___
            6__ _3_ ___
            7__ _8_ ___
            8__ _7_ ___
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn test_reports_pair_with_eliminations() {
        let grid = grid_with_pair_in_row();
        let board = HintBoard::new(&grid);
        assert_eq!(
            board.candidates_at(Position::new(0, 0)),
            ValueSet::from_iter([1, 2])
        );
        assert_eq!(
            board.candidates_at(Position::new(0, 4)),
            ValueSet::from_iter([1, 2])
        );

        let step = NakedPair::new().find_step(&board).unwrap();
        assert_eq!(step.technique, TechniqueKind::NakedPair);
        assert_eq!(step.cell, Position::new(0, 0));
        assert_eq!(step.value, 1);
        assert_eq!(
            step.supporting_cells.as_slice(),
            [Position::new(0, 0), Position::new(0, 4)]
        );
        assert!(step.explanation.contains("naked pair"));
        // Cell coordinates are spelled out like the single-technique text
        assert!(step.explanation.contains("row 1, column 1"));
        assert!(step.explanation.contains("row 1, column 5"));
        assert!(!step.explanation.contains("R1C1"));
    }

    #[test]
    fn test_none_without_pairs() {
        let grid = Grid::empty(GridSize::Nine);
        let board = HintBoard::new(&grid);
        assert_eq!(NakedPair::new().find_step(&board), None);
    }
}
