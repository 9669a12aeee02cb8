//! Submission handling for cluegrid puzzles.
//!
//! This crate sits at the end of a play session: the finished grid, the
//! elapsed time, and the move count come in, and a [`ValidationResult`]
//! comes out. Correctness against the stored solution gates acceptance;
//! timing and move-count plausibility are reported as soft
//! [`ValidationFlags`] for the caller's policy to act on. For shared
//! daily puzzles, [`integrity_hash`] provides a keyed tamper-detection
//! hash over the submission.

pub mod integrity;
pub mod validation;

pub use self::{
    integrity::{integrity_hash, verify_integrity},
    validation::{
        PlausibilityBounds, ValidationFlags, ValidationResult, validate, validate_with_bounds,
    },
};
