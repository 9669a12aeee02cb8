use super::{BoxedTechnique, HintBoard, Technique};
use crate::{HintStep, TechniqueKind, hint::SupportingCells};

const KIND: TechniqueKind = TechniqueKind::NakedSingle;

/// Finds a cell whose candidate set has exactly one member.
///
/// The simplest deduction: if everything but one value is excluded from a
/// cell by its row, column, and box, that value must go there. Cells are
/// scanned in row-major order, so the reported step is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedSingle {
    fn kind(&self) -> TechniqueKind {
        KIND
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, board: &HintBoard<'_>) -> Option<HintStep> {
        for pos in board.size().positions() {
            if !board.is_empty_cell(pos) {
                continue;
            }
            if let Some(value) = board.candidates_at(pos).as_single() {
                return Some(HintStep {
                    technique: KIND,
                    cell: pos,
                    value,
                    supporting_cells: SupportingCells::new(),
                    explanation: format!(
                        "The cell at row {}, column {} has exactly one candidate: {value}.",
                        pos.row() + 1,
                        pos.col() + 1,
                    ),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use cluegrid_core::{Grid, GridSize, Position};

    use super::*;

    #[test]
    fn test_finds_single_candidate_cell() {
        // Fill row 0 and column 0 so that (0, 0) can only hold 9
        let mut grid = Grid::empty(GridSize::Nine);
        for i in 1..9 {
            grid.set(Position::new(0, i), i);
        }
        grid.set(Position::new(8, 0), 8);

        let board = HintBoard::new(&grid);
        let step = NakedSingle::new().find_step(&board).unwrap();
        assert_eq!(step.cell, Position::new(0, 0));
        assert_eq!(step.value, 9);
    }

    #[test]
    fn test_reports_first_in_row_major_order() {
        let grid: Grid = "
            12_ 45_
            456 123
            231 564
            564 231
            312 645
            645 312
        "
        .parse()
        .unwrap();

        // Both (0, 2) and (0, 5) are naked singles; row-major order wins
        let board = HintBoard::new(&grid);
        let step = NakedSingle::new().find_step(&board).unwrap();
        assert_eq!(step.cell, Position::new(0, 2));
        assert_eq!(step.value, 3);
    }

    #[test]
    fn test_none_when_no_single() {
        let board_grid = Grid::empty(GridSize::Six);
        let board = HintBoard::new(&board_grid);
        assert_eq!(NakedSingle::new().find_step(&board), None);
    }
}
