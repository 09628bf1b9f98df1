//! # euler
//!
//! `euler` is a small command-line front end for two Project Euler solvers.
//!
//! ## Usage
//!
//! ```sh
//! euler [SUBCOMMAND] [OPTIONS]
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`coin-sums`**: Count the ways coins can make an amount (problem 31).
//!     ```sh
//!     euler coin-sums [--target 200] [--coins 1,2,5,10,20,50,100,200] [--strategy naive|memoized]
//!     ```
//!
//! 2.  **`non-abundant-sums`**: Sum the integers up to a bound that are not the sum of
//!     two abundant numbers (problem 23).
//!     ```sh
//!     euler non-abundant-sums [--bound 28123]
//!     ```
//!
//! 3.  **`completions`**: Print a shell completion script.
//!     ```sh
//!     euler completions bash
//!     ```
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Print inputs and timing to stderr (default: `false`).
//! -   `-v, --verify`: Cross-check the answer with an independent algorithm (default: `false`).
//! -   `-s, --stats`: Print a statistics table after the answer (default: `false`).
//!
//! The answer is always printed alone on the first line of stdout. With no options
//! the output matches the standalone `problem031` and `problem023` binaries.

use crate::command_line::cli::{Cli, run};
use clap::Parser;

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory figures
/// in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
