//! Keyed tamper-detection hash for shared puzzle submissions.

use cluegrid_core::Grid;
use sha2::{Digest, Sha256};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Computes the keyed integrity hash for a submission.
///
/// The hash is SHA-256 over a length-delimited encoding of the key, the
/// puzzle id, the submitted grid (side length plus raw cell bytes), the
/// user id, and the timestamp, rendered as lowercase hex. Length
/// delimiting keeps field boundaries unambiguous, so `("ab", "c")` and
/// `("a", "bc")` hash differently.
///
/// The same inputs always yield the same hash, letting the caller detect
/// replayed or client-tampered submissions to shared daily puzzles. Key
/// storage and rotation are the caller's concern.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Grid, GridSize};
/// use cluegrid_game::{integrity_hash, verify_integrity};
///
/// let grid = Grid::empty(GridSize::Six);
/// let hash = integrity_hash(b"server-key", "daily-2024-09-30", &grid, "user-7", 1_727_654_400_000);
/// assert!(verify_integrity(b"server-key", "daily-2024-09-30", &grid, "user-7", 1_727_654_400_000, &hash));
/// ```
#[must_use]
pub fn integrity_hash(
    key: &[u8],
    puzzle_id: &str,
    submitted: &Grid,
    user_id: &str,
    timestamp_ms: u64,
) -> String {
    let mut hasher = Sha256::new();
    update_field(&mut hasher, key);
    update_field(&mut hasher, puzzle_id.as_bytes());
    update_field(&mut hasher, &[submitted.size().n()]);
    update_field(&mut hasher, submitted.cells());
    update_field(&mut hasher, user_id.as_bytes());
    update_field(&mut hasher, &timestamp_ms.to_be_bytes());
    to_hex(&hasher.finalize())
}

/// Recomputes the integrity hash and compares it against `expected`.
#[must_use]
pub fn verify_integrity(
    key: &[u8],
    puzzle_id: &str,
    submitted: &Grid,
    user_id: &str,
    timestamp_ms: u64,
    expected: &str,
) -> bool {
    integrity_hash(key, puzzle_id, submitted, user_id, timestamp_ms) == expected
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
}

fn to_hex(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 2);
    for &byte in digest {
        out.push(char::from(HEX[usize::from(byte >> 4)]));
        out.push(char::from(HEX[usize::from(byte & 0x0f)]));
    }
    out
}

#[cfg(test)]
mod tests {
    use cluegrid_core::{GridSize, Position};

    use super::*;

    const KEY: &[u8] = b"test-key";
    const TS: u64 = 1_727_654_400_000;

    fn sample_grid() -> Grid {
        let mut grid = Grid::empty(GridSize::Six);
        grid.set(Position::new(0, 0), 1);
        grid.set(Position::new(5, 5), 2);
        grid
    }

    #[test]
    fn test_hash_is_deterministic_hex() {
        let grid = sample_grid();
        let a = integrity_hash(KEY, "p1", &grid, "u1", TS);
        let b = integrity_hash(KEY, "p1", &grid, "u1", TS);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_depends_on_every_input() {
        let grid = sample_grid();
        let base = integrity_hash(KEY, "p1", &grid, "u1", TS);

        assert_ne!(base, integrity_hash(b"other-key", "p1", &grid, "u1", TS));
        assert_ne!(base, integrity_hash(KEY, "p2", &grid, "u1", TS));
        assert_ne!(base, integrity_hash(KEY, "p1", &grid, "u2", TS));
        assert_ne!(base, integrity_hash(KEY, "p1", &grid, "u1", TS + 1));

        let mut other = grid.clone();
        other.set(Position::new(0, 0), 3);
        assert_ne!(base, integrity_hash(KEY, "p1", &other, "u1", TS));
    }

    #[test]
    fn test_field_boundaries_are_unambiguous() {
        let grid = sample_grid();
        let a = integrity_hash(KEY, "ab", &grid, "c", TS);
        let b = integrity_hash(KEY, "a", &grid, "bc", TS);
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_round_trip() {
        let grid = sample_grid();
        let hash = integrity_hash(KEY, "p1", &grid, "u1", TS);
        assert!(verify_integrity(KEY, "p1", &grid, "u1", TS, &hash));
        assert!(!verify_integrity(KEY, "p1", &grid, "u1", TS + 1, &hash));
        assert!(!verify_integrity(KEY, "p1", &grid, "u1", TS, "deadbeef"));
    }
}
