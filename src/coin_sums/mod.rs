#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Counting the ways a set of coins can make an exact amount (Project Euler 31).

/// The recursive counter and its bottom-up cross-check.
pub mod solver;
