//! Coin-sum counting.
//!
//! The count is defined by a binary recursion over a running total and a
//! shrinking view of the denomination list:
//!
//! - if the total equals the target, this is one way;
//! - if the total has overshot, or no denominations remain, there are none;
//! - otherwise add the ways that use one more of the first coin (list
//!   unchanged) to the ways that never use it again (list minus its head).
//!
//! Coins are available in unlimited supply. Because each branch either grows
//! the total or drops a coin, every multiset of coins is reached exactly once.

use crate::puzzle::error::PuzzleError;
use crate::puzzle::solver::{Puzzle, SolutionStats};
use clap::ValueEnum;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// Coin values in the order the recursion consumes them.
pub type Denominations = SmallVec<[u32; 8]>;

/// The eight coins in general circulation in the UK, in pence.
pub const UK_COINS: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

/// Two pounds, in pence.
pub const UK_TARGET: u32 = 200;

/// Largest target accepted. The recursion nests once per coin added to the
/// running total, so a target this size with a 1p coin is about 2000 frames deep.
pub const MAX_TARGET: u32 = 2_000;

/// How the recursion is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Plain recursion with no caching.
    #[default]
    Naive,
    /// The same recursion with results cached per `(total, remaining coins)`.
    Memoized,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Memoized => write!(f, "memoized"),
        }
    }
}

/// A coin-sum problem: a target amount and the coins that may be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSums {
    target: u32,
    denominations: Denominations,
    strategy: Strategy,
    stats: SolutionStats,
}

impl CoinSums {
    /// Creates a problem counting the ways `denominations` make `target`.
    ///
    /// Duplicate values are treated as distinct coins.
    ///
    /// # Errors
    ///
    /// `PuzzleError::TargetTooLarge` if `target` exceeds [`MAX_TARGET`], or
    /// `PuzzleError::ZeroDenomination` if any coin has value zero.
    pub fn new(
        target: u32,
        denominations: impl IntoIterator<Item = u32>,
    ) -> Result<Self, PuzzleError> {
        let denominations: Denominations = denominations.into_iter().collect();
        check_input(target, &denominations)?;
        Ok(Self::from_parts(target, denominations))
    }

    /// The two-pound problem over the UK coins.
    #[must_use]
    pub fn uk() -> Self {
        Self::from_parts(UK_TARGET, Denominations::from_slice(&UK_COINS))
    }

    fn from_parts(target: u32, denominations: Denominations) -> Self {
        Self {
            target,
            denominations,
            strategy: Strategy::default(),
            stats: SolutionStats::default(),
        }
    }

    /// Selects the evaluation strategy. The answer does not depend on it.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The amount to be made.
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// The coins available, in recursion order.
    #[must_use]
    pub fn denominations(&self) -> &[u32] {
        &self.denominations
    }

    /// The evaluation strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Puzzle for CoinSums {
    const NAME: &'static str = "coin-sums";

    fn solve(&mut self) -> u64 {
        let mut walker = Walker {
            target: u64::from(self.target),
            memo: match self.strategy {
                Strategy::Naive => None,
                Strategy::Memoized => Some(FxHashMap::default()),
            },
            stats: SolutionStats::default(),
        };

        let ways = walker.count(0, &self.denominations);
        self.stats = walker.stats;
        ways
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}

/// State threaded through one evaluation of the recursion.
struct Walker {
    target: u64,
    /// Keyed by running total and number of coins still in view; the view is
    /// always a suffix of the full list, so its length identifies it.
    memo: Option<FxHashMap<(u64, usize), u64>>,
    stats: SolutionStats,
}

impl Walker {
    fn count(&mut self, total: u64, coins: &[u32]) -> u64 {
        self.stats.calls += 1;

        if total == self.target {
            return 1;
        }

        let Some((&first, rest)) = coins.split_first() else {
            return 0;
        };

        if total > self.target {
            return 0;
        }

        let key = (total, coins.len());
        if let Some(&ways) = self.memo.as_ref().and_then(|memo| memo.get(&key)) {
            self.stats.memo_hits += 1;
            return ways;
        }

        let with_first = self.count(total.saturating_add(u64::from(first)), coins);
        let without_first = self.count(total, rest);
        let ways = with_first.saturating_add(without_first);

        if let Some(memo) = self.memo.as_mut() {
            memo.insert(key, ways);
        }

        ways
    }
}

/// Rejects inputs the recursion cannot finish: oversized targets and zero coins.
fn check_input(target: u32, coins: &[u32]) -> Result<(), PuzzleError> {
    if target > MAX_TARGET {
        return Err(PuzzleError::TargetTooLarge {
            target,
            max: MAX_TARGET,
        });
    }
    if let Some(index) = coins.iter().position(|&coin| coin == 0) {
        return Err(PuzzleError::ZeroDenomination { index });
    }
    Ok(())
}

/// Counts the ways `coins` make `target` by the recursion, without caching.
///
/// # Errors
///
/// Same as [`CoinSums::new`].
pub fn count_ways(target: u32, coins: &[u32]) -> Result<u64, PuzzleError> {
    check_input(target, coins)?;
    let mut walker = Walker {
        target: u64::from(target),
        memo: None,
        stats: SolutionStats::default(),
    };
    Ok(walker.count(0, coins))
}

/// Counts the ways `coins` make `target` with a bottom-up table.
///
/// `ways[v]` holds the number of ways to make `v` from the coins processed so
/// far; folding in one coin at a time keeps each multiset counted once.
/// Agrees with [`count_ways`] for every input.
///
/// # Errors
///
/// Same as [`CoinSums::new`].
pub fn count_ways_table(target: u32, coins: &[u32]) -> Result<u64, PuzzleError> {
    check_input(target, coins)?;
    let target = target as usize;
    let mut ways = vec![0_u64; target + 1];
    ways[0] = 1;

    for coin in coins.iter().map(|&coin| coin as usize) {
        for value in coin..=target {
            ways[value] = ways[value].saturating_add(ways[value - coin]);
        }
    }

    Ok(ways[target])
}
