//! Recoverable errors.
//!
//! Only configuration and input validation can fail at runtime. Misuse of
//! the grid model (placing on an occupied square, removing from an empty
//! one) is a caller bug and panics instead.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("board size must be between {min} and {max}, got {n}")]
    BoardSize { n: usize, min: usize, max: usize },

    #[error("cannot seed {pairs} pairs on a {n}x{n} board (need 2 * pairs < {n}^2)")]
    TooManyPairs { pairs: usize, n: usize },

    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("annealing schedule needs at least one step")]
    ZeroSteps,

    #[error("hill-climbing needs at least one attempt per pair count")]
    ZeroAttempts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        let err = Error::TooManyPairs { pairs: 13, n: 5 };
        assert_eq!(
            err.to_string(),
            "cannot seed 13 pairs on a 5x5 board (need 2 * pairs < 5^2)"
        );

        let err = Error::BoardSize { n: 2, min: 3, max: 30 };
        assert!(err.to_string().contains("got 2"));
    }
}
