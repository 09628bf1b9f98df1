#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Integers that are not the sum of two abundant numbers (Project Euler 23).

/// Divisor sums, classification and the pairing sieve.
pub mod solver;
