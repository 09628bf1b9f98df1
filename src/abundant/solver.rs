//! The abundant-number sieve.
//!
//! Every integer in `[1, bound]` is classified by the sum of its proper
//! divisors. Each abundant number found is paired with every abundant number
//! found so far (itself included) and the pair sums are marked reachable.
//! The answer is the sum of the integers in `[1, bound]` left unmarked.
//!
//! All integers above 28123 are known to be expressible, which is why that
//! bound is the canonical one.

use crate::puzzle::error::PuzzleError;
use crate::puzzle::solver::{Puzzle, SolutionStats};
use bit_vec::BitVec;
use std::fmt::{Display, Formatter};

/// The canonical bound.
pub const LIMIT: u32 = 28_123;

/// Largest bound accepted by [`AbundantSieve::new`].
pub const MAX_BOUND: u32 = 200_000;

/// Sum of the proper divisors of `n`: every `i >= 1` with `2i <= n` that divides `n`.
///
/// `n` itself is never included, so `proper_divisor_sum(1) == 0`.
#[must_use]
pub fn proper_divisor_sum(n: u32) -> u64 {
    (1..=n / 2).filter(|i| n % i == 0).map(u64::from).sum()
}

/// Where an integer falls relative to the sum of its proper divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Proper divisors sum to less than the number.
    Deficient,
    /// Proper divisors sum to exactly the number.
    Perfect,
    /// Proper divisors sum to more than the number.
    Abundant,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deficient => write!(f, "deficient"),
            Self::Perfect => write!(f, "perfect"),
            Self::Abundant => write!(f, "abundant"),
        }
    }
}

/// Classifies `n` by comparing it with [`proper_divisor_sum`].
#[must_use]
pub fn classify(n: u32) -> Classification {
    match proper_divisor_sum(n).cmp(&u64::from(n)) {
        std::cmp::Ordering::Less => Classification::Deficient,
        std::cmp::Ordering::Equal => Classification::Perfect,
        std::cmp::Ordering::Greater => Classification::Abundant,
    }
}

/// Whether `n` is abundant.
#[must_use]
pub fn is_abundant(n: u32) -> bool {
    classify(n) == Classification::Abundant
}

const fn check_bound(bound: u32) -> Result<(), PuzzleError> {
    if bound > MAX_BOUND {
        return Err(PuzzleError::BoundTooLarge {
            bound,
            max: MAX_BOUND,
        });
    }
    Ok(())
}

/// The sieve over `[1, bound]`.
///
/// The abundant list and the reachable set are populated by [`Puzzle::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbundantSieve {
    bound: u32,
    /// In ascending order, which lets the pairing loop stop early.
    abundant: Vec<u32>,
    /// Bit `s` is set when `s` is the sum of two abundant numbers. Sums above
    /// the bound are never stored.
    reachable: BitVec,
    stats: SolutionStats,
}

impl AbundantSieve {
    /// Creates a sieve over `[1, bound]`.
    ///
    /// # Errors
    ///
    /// `PuzzleError::BoundTooLarge` if `bound` exceeds [`MAX_BOUND`].
    pub fn new(bound: u32) -> Result<Self, PuzzleError> {
        check_bound(bound)?;
        Ok(Self::with_bound(bound))
    }

    /// The sieve over `[1, LIMIT]`.
    #[must_use]
    pub fn euler() -> Self {
        Self::with_bound(LIMIT)
    }

    fn with_bound(bound: u32) -> Self {
        Self {
            bound,
            abundant: Vec::new(),
            reachable: BitVec::new(),
            stats: SolutionStats::default(),
        }
    }

    /// The upper end of the range, inclusive.
    #[must_use]
    pub const fn bound(&self) -> u32 {
        self.bound
    }

    /// Abundant numbers up to the bound, ascending. Empty until solved.
    #[must_use]
    pub fn abundant_numbers(&self) -> &[u32] {
        &self.abundant
    }

    /// Whether `n` was found to be a sum of two abundant numbers.
    #[must_use]
    pub fn is_reachable(&self, n: u32) -> bool {
        self.reachable.get(n as usize).unwrap_or(false)
    }

    /// Integers in `[1, bound]` that are not a sum of two abundant numbers.
    ///
    /// Before `solve` has run nothing is reachable, so this yields the whole range.
    pub fn non_expressible(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=self.bound).filter(move |&n| !self.is_reachable(n))
    }
}

impl Puzzle for AbundantSieve {
    const NAME: &'static str = "non-abundant-sums";

    fn solve(&mut self) -> u64 {
        let bound = self.bound as usize;
        self.abundant.clear();
        self.reachable = BitVec::from_elem(self.bound as usize + 1, false);
        self.stats = SolutionStats::default();

        for n in 1..=self.bound {
            if !is_abundant(n) {
                continue;
            }
            self.abundant.push(n);

            for &a in &self.abundant {
                let sum = (a + n) as usize;
                if sum > bound {
                    break;
                }
                self.reachable.set(sum, true);
                self.stats.pair_sums += 1;
            }
        }

        self.stats.abundant = self.abundant.len();
        self.stats.reachable = self.reachable.iter().filter(|&bit| bit).count();

        self.non_expressible().map(u64::from).sum()
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}

/// Sum of the integers in `[1, bound]` that are not a sum of two abundant numbers.
///
/// # Errors
///
/// `PuzzleError::BoundTooLarge` if `bound` exceeds [`MAX_BOUND`].
pub fn non_abundant_sum(bound: u32) -> Result<u64, PuzzleError> {
    let mut sieve = AbundantSieve::new(bound)?;
    Ok(sieve.solve())
}

/// Same answer as [`non_abundant_sum`], computed independently.
///
/// Divisor sums for the whole range come from a sieve of multiples instead of
/// trial division, and pairs are enumerated over the finished abundant list.
///
/// # Errors
///
/// `PuzzleError::BoundTooLarge` if `bound` exceeds [`MAX_BOUND`].
pub fn non_abundant_sum_by_sieve(bound: u32) -> Result<u64, PuzzleError> {
    check_bound(bound)?;
    let size = bound as usize + 1;

    let mut divisor_sums = vec![0_usize; size];
    for divisor in 1..size {
        for multiple in (2 * divisor..size).step_by(divisor) {
            divisor_sums[multiple] += divisor;
        }
    }

    let abundant: Vec<usize> = (1..size).filter(|&n| divisor_sums[n] > n).collect();

    let mut reachable = BitVec::from_elem(size, false);
    for (i, &a) in abundant.iter().enumerate() {
        for &b in &abundant[i..] {
            if a + b >= size {
                break;
            }
            reachable.set(a + b, true);
        }
    }

    Ok((1..size)
        .filter(|&n| !reachable[n])
        .map(|n| n as u64)
        .sum())
}
