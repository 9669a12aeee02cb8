//! Core data structures for the cluegrid puzzle engine.
//!
//! This crate provides the shared types used by generation, solving, and
//! validation: grid geometry, positions, value bitsets, on-demand candidate
//! computation, the difficulty table, and the immutable [`Puzzle`] value.
//!
//! # Overview
//!
//! - [`size`]: Supported grid sizes and their box geometry
//! - [`position`]: Board position (row, col) type
//! - [`grid`]: The board itself, with the row/column/box consistency check
//! - [`value_set`]: Sets of cell values represented as bitsets
//! - [`candidates`]: Per-cell candidate sets derived from a grid
//! - [`difficulty`]: The ordered difficulty tiers and their clue budgets
//! - [`puzzle`]: A carved puzzle paired with its full solution
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::{Grid, GridSize, Position};
//!
//! let mut grid = Grid::empty(GridSize::Nine);
//! grid.set(Position::new(0, 0), 5);
//!
//! // 5 is now excluded from the rest of row 0
//! assert!(!grid.is_consistent_placement(Position::new(0, 8), 5));
//! assert!(grid.is_consistent_placement(Position::new(0, 8), 6));
//! ```

pub mod candidates;
pub mod difficulty;
pub mod grid;
pub mod position;
pub mod puzzle;
pub mod size;
pub mod value_set;

pub use self::{
    candidates::Candidates,
    difficulty::Difficulty,
    grid::{Grid, ParseGridError},
    position::Position,
    puzzle::Puzzle,
    size::{GridSize, UnsupportedSizeError},
};
