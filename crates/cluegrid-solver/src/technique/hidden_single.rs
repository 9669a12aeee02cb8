use super::{BoxedTechnique, HintBoard, Technique};
use crate::{HintStep, TechniqueKind, Unit, hint::SupportingCells};

const KIND: TechniqueKind = TechniqueKind::HiddenSingle;

/// Finds a value with exactly one legal cell within a unit.
///
/// The cell itself may hold several candidates; what pins the value is
/// that every other cell of the unit excludes it. Units are scanned rows
/// first, then columns, then boxes, with ascending values inside each
/// unit, so ties resolve deterministically.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for HiddenSingle {
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
            for value in 1..=size.n() {
                let mut holders = positions
                    .iter()
                    .filter(|&&pos| {
                        board.is_empty_cell(pos) && board.candidates_at(pos).contains(value)
                    })
                    .copied();
                let first = holders.next();
                if let (Some(cell), None) = (first, holders.next()) {
                    return Some(HintStep {
                        technique: KIND,
                        cell,
                        value,
                        supporting_cells: SupportingCells::new(),
                        explanation: format!(
                            "In {unit}, {value} fits only at row {}, column {}.",
                            cell.row() + 1,
                            cell.col() + 1,
                        ),
                    });
                }
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
    fn test_pins_value_in_multi_candidate_cell() {
        // Six scattered 4s leave (4, 2) as the only cell of row 4 that can
        // hold a 4, even though that cell still has many candidates
        let mut grid = Grid::empty(GridSize::Nine);
        grid.set(Position::new(0, 0), 4);
        grid.set(Position::new(3, 8), 4);
        grid.set(Position::new(5, 3), 4);
        grid.set(Position::new(6, 4), 4);
        grid.set(Position::new(7, 7), 4);
        grid.set(Position::new(8, 1), 4);

        let board = HintBoard::new(&grid);
        assert!(board.candidates_at(Position::new(4, 2)).len() > 1);

        let step = HiddenSingle::new().find_step(&board).unwrap();
        assert_eq!(step.cell, Position::new(4, 2));
        assert_eq!(step.value, 4);
        assert!(step.explanation.contains("column 3"));
    }

    #[test]
    fn test_six_grid_uses_2x3_box_exclusions() {
        // The 6 at (0, 3) blocks all of box 1's share of row 1 (2×3 boxes),
        // leaving (1, 1) as the only cell of row 1 that can hold a 6
        let mut grid = Grid::empty(GridSize::Six);
        grid.set(Position::new(0, 3), 6);
        grid.set(Position::new(3, 0), 6);
        grid.set(Position::new(5, 2), 6);

        let board = HintBoard::new(&grid);
        let step = HiddenSingle::new().find_step(&board).unwrap();
        assert_eq!(step.value, 6);
        assert_eq!(step.cell, Position::new(1, 1));
    }

    #[test]
    fn test_none_on_empty_grid() {
        let grid = Grid::empty(GridSize::Nine);
        let board = HintBoard::new(&grid);
        assert_eq!(HiddenSingle::new().find_step(&board), None);
    }
}
