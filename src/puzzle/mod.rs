#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Shared plumbing for the individual puzzle solvers.

pub mod error;
pub mod solver;
