//! Submission validation against the stored solution.

use bitflags::bitflags;
use cluegrid_core::{Difficulty, Grid, GridSize, Puzzle};
use log::debug;

bitflags! {
    /// Findings attached to a validated submission.
    ///
    /// [`SOLUTION_INVALID`](Self::SOLUTION_INVALID) is the only rejecting
    /// flag. The remaining flags are soft plausibility signals; policy for
    /// them (warn, block, ignore) belongs to the caller.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ValidationFlags: u8 {
        /// The submitted grid does not match the stored solution.
        const SOLUTION_INVALID = 1 << 0;
        /// Elapsed time is below the plausible minimum for the tier.
        const TOO_FAST = 1 << 1;
        /// Elapsed time is above the plausible maximum for the tier.
        const TOO_SLOW = 1 << 2;
        /// Move count is below the plausible minimum for the tier.
        const TOO_FEW_MOVES = 1 << 3;
        /// Move count is above the plausible maximum for the tier.
        const TOO_MANY_MOVES = 1 << 4;
    }
}

/// Outcome of validating a completed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    /// `true` when the submission matches the stored solution.
    pub accepted: bool,
    /// All findings, rejecting and soft alike.
    pub flags: ValidationFlags,
}

impl ValidationResult {
    /// Returns `true` if any soft plausibility flag is set.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.flags
            .intersects(ValidationFlags::all() - ValidationFlags::SOLUTION_INVALID)
    }
}

/// Per-tier bounds on plausible solve time and move count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlausibilityBounds {
    /// Fastest believable solve, in seconds.
    pub min_seconds: u32,
    /// Slowest believable solve, in seconds.
    pub max_seconds: u32,
    /// Fewest believable moves.
    pub min_moves: u32,
    /// Most believable moves.
    pub max_moves: u32,
}

impl PlausibilityBounds {
    /// Looks up the fixed bounds for a difficulty tier and grid size.
    ///
    /// The numbers are heuristic, not contractual: a 6×6 Easy grid can be
    /// finished in well under a minute, while a 9×9 Expert grid solved in
    /// ninety seconds is almost certainly not a human playing fairly.
    #[must_use]
    pub const fn for_tier(difficulty: Difficulty, size: GridSize) -> Self {
        match (size, difficulty) {
            (GridSize::Six, Difficulty::Easy) => Self::new(20, 900, 12, 150),
            (GridSize::Six, Difficulty::Medium) => Self::new(40, 1200, 16, 200),
            (GridSize::Six, Difficulty::Hard) => Self::new(60, 1800, 19, 250),
            (GridSize::Six, Difficulty::Expert) => Self::new(90, 2700, 22, 300),
            (GridSize::Nine, Difficulty::Easy) => Self::new(90, 3600, 40, 400),
            (GridSize::Nine, Difficulty::Medium) => Self::new(150, 5400, 45, 450),
            (GridSize::Nine, Difficulty::Hard) => Self::new(240, 7200, 50, 500),
            (GridSize::Nine, Difficulty::Expert) => Self::new(360, 10800, 52, 600),
        }
    }

    const fn new(min_seconds: u32, max_seconds: u32, min_moves: u32, max_moves: u32) -> Self {
        Self {
            min_seconds,
            max_seconds,
            min_moves,
            max_moves,
        }
    }
}

/// Validates a completed submission against the puzzle's stored solution.
///
/// Correctness gates acceptance: the submitted grid must match the stored
/// solution cell for cell, so empty cells, wrong values, and size
/// mismatches all reject with [`ValidationFlags::SOLUTION_INVALID`].
/// Plausibility bounds for the puzzle's tier are then applied to
/// `elapsed_seconds` and `move_count`; violations are reported as soft
/// flags on an otherwise accepted result, never as rejections.
///
/// # Examples
///
/// ```
/// use cluegrid_core::GridSize;
/// use cluegrid_game::validate;
/// use cluegrid_generator::generate_seeded_puzzle;
///
/// let puzzle = generate_seeded_puzzle(GridSize::Six, "2024-09-30")?;
/// let result = validate(&puzzle, puzzle.solution(), 300, 30);
/// assert!(result.accepted);
/// assert!(!result.is_flagged());
/// # Ok::<(), cluegrid_generator::GenerateError>(())
/// ```
#[must_use]
pub fn validate(
    puzzle: &Puzzle,
    submitted: &Grid,
    elapsed_seconds: u32,
    move_count: u32,
) -> ValidationResult {
    let bounds = PlausibilityBounds::for_tier(puzzle.difficulty(), puzzle.size());
    validate_with_bounds(puzzle, submitted, elapsed_seconds, move_count, bounds)
}

/// Like [`validate`], with caller-supplied plausibility bounds.
#[must_use]
pub fn validate_with_bounds(
    puzzle: &Puzzle,
    submitted: &Grid,
    elapsed_seconds: u32,
    move_count: u32,
    bounds: PlausibilityBounds,
) -> ValidationResult {
    let mut flags = ValidationFlags::empty();

    if submitted != puzzle.solution() {
        flags |= ValidationFlags::SOLUTION_INVALID;
    }

    if elapsed_seconds < bounds.min_seconds {
        flags |= ValidationFlags::TOO_FAST;
    } else if elapsed_seconds > bounds.max_seconds {
        flags |= ValidationFlags::TOO_SLOW;
    }

    if move_count < bounds.min_moves {
        flags |= ValidationFlags::TOO_FEW_MOVES;
    } else if move_count > bounds.max_moves {
        flags |= ValidationFlags::TOO_MANY_MOVES;
    }

    let result = ValidationResult {
        accepted: !flags.contains(ValidationFlags::SOLUTION_INVALID),
        flags,
    };
    if result.is_flagged() {
        debug!(
            "submission flagged {:?} ({elapsed_seconds}s, {move_count} moves)",
            result.flags
        );
    }
    result
}
