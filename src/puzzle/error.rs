//! Errors raised when a puzzle is constructed from caller-supplied parameters.
//!
//! The canonical instances (`UK_COINS` / `UK_TARGET`, `LIMIT`) never produce
//! any of these.

use thiserror::Error;

/// Everything that can go wrong while building or checking a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A coin of value zero never advances the running total.
    #[error("denomination at position {index} is zero")]
    ZeroDenomination {
        /// Position of the offending coin in the supplied list.
        index: usize,
    },

    /// Coin recursion depth grows with the target.
    #[error("target {target} exceeds the supported maximum of {max}")]
    TargetTooLarge {
        /// The requested target.
        target: u32,
        /// The largest accepted target.
        max: u32,
    },

    /// The sieve keeps one bit per integer and pairs every abundant number.
    #[error("bound {bound} exceeds the supported maximum of {max}")]
    BoundTooLarge {
        /// The requested bound.
        bound: u32,
        /// The largest accepted bound.
        max: u32,
    },

    /// The primary algorithm and its cross-check disagree.
    #[error("{puzzle}: verification failed (expected {expected}, got {actual})")]
    VerificationFailed {
        /// Name of the puzzle being verified.
        puzzle: &'static str,
        /// Answer from the cross-check.
        expected: u64,
        /// Answer from the primary algorithm.
        actual: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_denomination() {
        let err = PuzzleError::ZeroDenomination { index: 3 };
        assert_eq!(err.to_string(), "denomination at position 3 is zero");
    }

    #[test]
    fn test_display_target_too_large() {
        let err = PuzzleError::TargetTooLarge {
            target: 5000,
            max: 2000,
        };
        assert_eq!(
            err.to_string(),
            "target 5000 exceeds the supported maximum of 2000"
        );
    }

    #[test]
    fn test_display_verification_failed() {
        let err = PuzzleError::VerificationFailed {
            puzzle: "coin-sums",
            expected: 4,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "coin-sums: verification failed (expected 4, got 5)"
        );
    }
}
