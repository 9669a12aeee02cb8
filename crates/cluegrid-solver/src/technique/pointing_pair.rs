use cluegrid_core::Position;

use super::{BoxedTechnique, HintBoard, Technique};
use crate::{HintStep, TechniqueKind, Unit, hint::SupportingCells};

const KIND: TechniqueKind = TechniqueKind::PointingPair;

/// Finds a value confined, within a box, to a single row or column.
///
/// When the two or three remaining candidate cells for a value inside a
/// box all share a row (or column), the value must land in that box's
/// share of the line, so it can be removed from the rest of the line.
/// Reported only when such an elimination target exists outside the box.
///
/// The reported `cell` is the first confining cell; all confining cells
/// travel in `supporting_cells`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointingPair;

impl PointingPair {
    /// Creates a new `PointingPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for PointingPair {
    fn kind(&self) -> TechniqueKind {
        KIND
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, board: &HintBoard<'_>) -> Option<HintStep> {
        let size = board.size();
        for box_index in 0..size.n() {
            let box_unit = Unit::Box(box_index);
            let box_positions = box_unit.positions(size);
            for value in 1..=size.n() {
                let holders: Vec<Position> = box_positions
                    .iter()
                    .filter(|&&pos| {
                        board.is_empty_cell(pos) && board.candidates_at(pos).contains(value)
                    })
                    .copied()
                    .collect();
                if !(2..=3).contains(&holders.len()) {
                    continue;
                }

                let line = if holders.iter().all(|pos| pos.row() == holders[0].row()) {
                    Unit::Row(holders[0].row())
                } else if holders.iter().all(|pos| pos.col() == holders[0].col()) {
                    Unit::Col(holders[0].col())
                } else {
                    continue;
                };

                let eliminates = line.positions(size).iter().any(|&pos| {
                    size.box_index(pos) != box_index
                        && board.is_empty_cell(pos)
                        && board.candidates_at(pos).contains(value)
                });
                if !eliminates {
                    continue;
                }

                let mut supporting = SupportingCells::new();
                supporting.extend(holders.iter().copied());
                return Some(HintStep {
                    technique: KIND,
                    cell: holders[0],
                    value,
                    supporting_cells: supporting,
                    explanation: format!(
                        "In {box_unit}, {value} only fits in {line}, so it can be removed \
                         from the rest of {line}.",
                    ),
                });
            }
        }
        None
    }
}
