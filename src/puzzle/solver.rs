//! The interface every puzzle solver implements.

use std::fmt::Debug;

/// Counters gathered while a puzzle is being solved.
///
/// Not every solver fills every field; unused counters stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionStats {
    /// Number of recursive calls made (coin sums).
    pub calls: usize,
    /// Number of calls answered from the memo table (coin sums).
    pub memo_hits: usize,
    /// Number of abundant numbers found (non-abundant sums).
    pub abundant: usize,
    /// Number of pair sums recorded, duplicates included (non-abundant sums).
    pub pair_sums: usize,
    /// Number of distinct reachable sums (non-abundant sums).
    pub reachable: usize,
}

/// A puzzle whose answer is a single non-negative integer.
pub trait Puzzle: Debug {
    /// Short, stable name used in reports and error messages.
    const NAME: &'static str;

    /// Runs the computation and returns the answer.
    ///
    /// Calling `solve` again recomputes from scratch and resets the statistics.
    fn solve(&mut self) -> u64;

    /// Statistics from the most recent call to `solve`.
    fn stats(&self) -> SolutionStats;
}
