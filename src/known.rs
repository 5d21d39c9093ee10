//! Best-known results and request validation.

use crate::error::{Error, Result};

/// Smallest supported board.
pub const MIN_SIZE: usize = 3;

/// Largest supported board.
pub const MAX_SIZE: usize = 30;

/// Largest known number of peaceable pairs for `n = 1..=30` (OEIS A250000).
pub const BEST_KNOWN: [usize; 30] = [
    0, 0, 1, 2, 4, 5, 7, 9, 12, 14, 17, 21, 24, 28, 32, 37, 42, 47, 52, 58, 64, 70, 77, 84, 91,
    98, 105, 114, 122, 131,
];

/// Best-known pair count for an `n x n` board, if tabulated.
pub fn best_known_pairs(n: usize) -> Option<usize> {
    n.checked_sub(1).and_then(|i| BEST_KNOWN.get(i)).copied()
}

/// Checks that `n` is a supported board size.
pub fn validate_size(n: usize) -> Result<()> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&n) {
        return Err(Error::BoardSize {
            n,
            min: MIN_SIZE,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

/// Checks that `pairs` pairs can be seeded on an `n x n` board with at
/// least one square to spare.
pub fn validate_pairs(n: usize, pairs: usize) -> Result<()> {
    let fits = pairs
        .checked_mul(2)
        .is_some_and(|queens| queens < n * n);
    if !fits {
        return Err(Error::TooManyPairs { pairs, n });
    }
    Ok(())
}

/// Validates a `(n, m)` request and resolves the seed pair count, falling
/// back to the best-known value when `pairs` is `None`.
pub fn resolve_request(n: usize, pairs: Option<usize>) -> Result<usize> {
    validate_size(n)?;
    let pairs = match pairs {
        Some(pairs) => pairs,
        None => best_known_pairs(n).unwrap_or(0),
    };
    validate_pairs(n, pairs)?;
    Ok(pairs)
}
