#![deny(missing_docs)]
//! This crate provides solvers for two small combinatorial puzzles from Project Euler.

/// The `abundant` module sums the integers that cannot be written as the sum of two
/// abundant numbers (problem 23).
pub mod abundant;

/// The `coin_sums` module counts the ways a set of coins can make an exact amount
/// (problem 31).
pub mod coin_sums;

/// The `puzzle` module holds the trait, statistics and errors shared by the solvers.
pub mod puzzle;
