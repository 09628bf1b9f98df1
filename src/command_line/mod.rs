//! Command-line parsing and reporting for the `euler` binary.

pub mod cli;
