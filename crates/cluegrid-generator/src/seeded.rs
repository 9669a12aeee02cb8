//! Deterministic daily-puzzle generation.

use cluegrid_core::{Difficulty, GridSize, Puzzle};
use derive_more::{Display, Error};
use log::debug;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use sha2::{Digest, Sha256};

use crate::{carve, generate_solution};
use cluegrid_solver::count_solutions;

/// The difficulty tier every daily puzzle is carved for.
pub const DAILY_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Defensive retries when the final uniqueness re-check fails.
const MAX_SEED_ATTEMPTS: u32 = 3;

/// Error returned when seeded generation exhausts its retry budget.
///
/// This should not occur with a correct generator; it exists to surface a
/// latent bug rather than hand out an ambiguous daily puzzle.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("seeded generation failed for {date_key:?} after {attempts} attempts")]
pub struct GenerateError {
    /// The date key generation was attempted for.
    pub date_key: String,
    /// How many seed derivations were tried.
    pub attempts: u32,
}

/// Generates the shared daily puzzle for a calendar-day key.
///
/// `date_key` is an opaque, caller-normalized string (typically a calendar
/// day like `"2024-09-30"` in a fixed time zone). Its SHA-256 digest seeds
/// a PCG-64 stream that drives all randomness in generation and carving,
/// so the same key always yields the byte-identical [`Puzzle`]. Stability
/// is all that is asked of the hash; collision resistance is irrelevant.
///
/// The finished puzzle is re-checked against the oracle before being
/// returned. A failed re-check perturbs the seed derivation and retries.
///
/// # Errors
///
/// Returns [`GenerateError`] if every retry produces a puzzle that fails
/// the uniqueness re-check, which indicates a generator bug rather than
/// bad input.
///
/// # Examples
///
/// ```
/// use cluegrid_core::GridSize;
/// use cluegrid_generator::generate_seeded_puzzle;
///
/// let a = generate_seeded_puzzle(GridSize::Six, "2024-09-30")?;
/// let b = generate_seeded_puzzle(GridSize::Six, "2024-09-30")?;
/// assert_eq!(a, b);
/// assert_eq!(a.seed(), Some("2024-09-30"));
/// # Ok::<(), cluegrid_generator::GenerateError>(())
/// ```
pub fn generate_seeded_puzzle(size: GridSize, date_key: &str) -> Result<Puzzle, GenerateError> {
    for attempt in 0..MAX_SEED_ATTEMPTS {
        let mut rng = Pcg64::from_seed(derive_seed(date_key, attempt));
        let solution = generate_solution(size, &mut rng);
        let clues = carve(&solution, DAILY_DIFFICULTY.clue_target(size), &mut rng);

        if count_solutions(&clues, 2) == 1 {
            return Ok(Puzzle::new(
                DAILY_DIFFICULTY,
                clues,
                solution,
                Some(date_key.to_owned()),
            ));
        }
        debug!("seeded puzzle for {date_key:?} failed uniqueness re-check (attempt {attempt})");
    }
    Err(GenerateError {
        date_key: date_key.to_owned(),
        attempts: MAX_SEED_ATTEMPTS,
    })
}

/// Derives a 32-byte PCG seed from the date key.
///
/// Attempt 0 hashes the key alone, keeping the primary derivation stable;
/// retries fold the attempt number into the digest.
fn derive_seed(date_key: &str, attempt: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(date_key.as_bytes());
    if attempt > 0 {
        hasher.update(b"#");
        hasher.update(attempt.to_be_bytes());
    }
    hasher.finalize().into()
}
