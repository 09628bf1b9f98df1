#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use euler_puzzles::abundant::solver::{AbundantSieve, LIMIT, non_abundant_sum_by_sieve};
use euler_puzzles::coin_sums::solver::{CoinSums, Strategy, UK_COINS, UK_TARGET, count_ways_table};
use euler_puzzles::puzzle::error::PuzzleError;
use euler_puzzles::puzzle::solver::{Puzzle, SolutionStats};
use itertools::Itertools;
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the euler application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "euler", version, about = "Solvers for Project Euler problems 23 and 31")]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute (e.g. `coin-sums`, `non-abundant-sums`).
    #[clap(subcommand)]
    pub command: Commands,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Count the ways the given coins can make the target amount (problem 31).
    CoinSums {
        /// The amount to make, at most `MAX_TARGET`.
        #[arg(short, long, default_value_t = UK_TARGET)]
        target: u32,

        /// Comma-separated coin values, used in the order given.
        #[arg(short, long, value_delimiter = ',', default_values_t = UK_COINS)]
        coins: Vec<u32>,

        /// How the recursion is evaluated. The answer does not depend on it.
        #[arg(long, default_value_t = Strategy::Naive)]
        strategy: Strategy,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Sum the integers up to the bound that are not the sum of two abundant numbers (problem 23).
    NonAbundantSums {
        /// Upper end of the range, inclusive.
        #[arg(short, long, default_value_t = LIMIT)]
        bound: u32,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across the puzzle subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Print inputs, the raw answer and timing to stderr.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Recompute the answer with an independent algorithm and fail if they differ.
    #[arg(short, long, default_value_t = false)]
    pub(crate) verify: bool,

    /// Print a statistics table after the answer.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,
}

/// Dispatches a parsed command line.
///
/// # Errors
///
/// Any `PuzzleError` raised while building, solving or verifying the puzzle.
pub(crate) fn run(cli: Cli) -> Result<(), PuzzleError> {
    match cli.command {
        Commands::CoinSums {
            target,
            coins,
            strategy,
            common,
        } => run_coin_sums(target, coins, strategy, &common),
        Commands::NonAbundantSums { bound, common } => run_non_abundant_sums(bound, &common),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Solves a coin-sum problem and reports the count.
///
/// # Errors
///
/// `PuzzleError::TargetTooLarge` for an oversized target,
/// `PuzzleError::ZeroDenomination` for a zero coin, or
/// `PuzzleError::VerificationFailed` if the table disagrees with the recursion.
pub(crate) fn run_coin_sums(
    target: u32,
    coins: Vec<u32>,
    strategy: Strategy,
    common: &CommonOptions,
) -> Result<(), PuzzleError> {
    let puzzle = CoinSums::new(target, coins)?.with_strategy(strategy);

    if common.debug {
        eprintln!("Target: {}", puzzle.target());
        eprintln!("Coins: {}", puzzle.denominations().iter().join(", "));
        eprintln!("Strategy: {}", puzzle.strategy());
    }

    let coins = puzzle.denominations().to_vec();
    solve_and_report(
        puzzle,
        common,
        || count_ways_table(target, &coins),
        |s| vec![("Recursive calls", s.calls), ("Memo hits", s.memo_hits)],
    )
}

/// Runs the abundant-number sieve and reports the non-expressible sum.
///
/// # Errors
///
/// `PuzzleError::BoundTooLarge` for an oversized bound, or
/// `PuzzleError::VerificationFailed` if the divisor sieve disagrees.
pub(crate) fn run_non_abundant_sums(bound: u32, common: &CommonOptions) -> Result<(), PuzzleError> {
    let puzzle = AbundantSieve::new(bound)?;

    if common.debug {
        eprintln!("Bound: {}", puzzle.bound());
    }

    solve_and_report(
        puzzle,
        common,
        || non_abundant_sum_by_sieve(bound),
        |s| {
            vec![
                ("Abundant numbers", s.abundant),
                ("Pair sums", s.pair_sums),
                ("Reachable sums", s.reachable),
            ]
        },
    )
}

/// Solves a puzzle, prints the answer, then optionally verifies and prints statistics.
///
/// The answer is always the first line on stdout.
///
/// # Arguments
/// * `puzzle` - The puzzle to solve.
/// * `common` - `CommonOptions` controlling debug output, verification and statistics.
/// * `cross_check` - Computes the answer independently, only called with `--verify`.
/// * `rows` - Selects the counters shown in the statistics table.
///
/// # Errors
///
/// `PuzzleError::VerificationFailed` if the cross-check disagrees, or any
/// error the cross-check itself returns.
pub(crate) fn solve_and_report<P: Puzzle>(
    mut puzzle: P,
    common: &CommonOptions,
    cross_check: impl FnOnce() -> Result<u64, PuzzleError>,
    rows: impl Fn(&SolutionStats) -> Vec<(&'static str, usize)>,
) -> Result<(), PuzzleError> {
    let (answer, elapsed) = solve(&mut puzzle);
    println!("{answer}");

    if common.debug {
        eprintln!("Solution: {answer}");
        eprintln!("Time: {elapsed:?}");
    }

    if common.verify {
        verify_solution(P::NAME, answer, cross_check()?)?;
    }

    if common.stats {
        print_stats(P::NAME, elapsed, &rows(&puzzle.stats()), memory_usage());
    }

    Ok(())
}

/// Runs `solve` and measures it.
pub(crate) fn solve<P: Puzzle>(puzzle: &mut P) -> (u64, Duration) {
    let time = Instant::now();
    let answer = puzzle.solve();
    (answer, time.elapsed())
}

/// Compares the primary answer with the cross-check.
///
/// # Errors
///
/// `PuzzleError::VerificationFailed` when they differ.
pub(crate) fn verify_solution(
    puzzle: &'static str,
    actual: u64,
    expected: u64,
) -> Result<(), PuzzleError> {
    let ok = actual == expected;
    println!("Verified: {ok:?}");
    if ok {
        Ok(())
    } else {
        Err(PuzzleError::VerificationFailed {
            puzzle,
            expected,
            actual,
        })
    }
}

/// Allocated and resident memory in MiB, if jemalloc can report them.
pub(crate) fn memory_usage() -> Option<(f64, f64)> {
    const MIB: f64 = 1024.0 * 1024.0;

    epoch::advance().ok()?;
    let allocated = stats::allocated::mib().ok()?.read().ok()?;
    let resident = stats::resident::mib().ok()?.read().ok()?;
    Some((allocated as f64 / MIB, resident as f64 / MIB))
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints the statistics table.
///
/// # Arguments
/// * `name` - The puzzle name.
/// * `elapsed` - Duration spent solving.
/// * `rows` - Labelled counters, printed with a per-second rate.
/// * `memory` - Allocated and resident memory in MiB, when available.
pub(crate) fn print_stats(
    name: &str,
    elapsed: Duration,
    rows: &[(&'static str, usize)],
    memory: Option<(f64, f64)>,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Puzzle Statistics ]==========================");
    stat_line("Puzzle", name);
    for &(label, value) in rows {
        stat_line_with_rate(label, value, elapsed_secs);
    }
    if let Some((allocated, resident)) = memory {
        stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
        stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    }
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use euler_puzzles::coin_sums::solver::MAX_TARGET;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_coin_sums_defaults() {
        let cli = Cli::try_parse_from(["euler", "coin-sums"]).unwrap();
        match cli.command {
            Commands::CoinSums {
                target,
                coins,
                strategy,
                common,
            } => {
                assert_eq!(target, UK_TARGET);
                assert_eq!(coins, UK_COINS.to_vec());
                assert_eq!(strategy, Strategy::Naive);
                assert!(!common.debug && !common.verify && !common.stats);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_coin_sums_arguments() {
        let cli = Cli::try_parse_from([
            "euler",
            "coin-sums",
            "--target",
            "10",
            "--coins",
            "1,2,5",
            "--strategy",
            "memoized",
            "--verify",
        ])
        .unwrap();
        match cli.command {
            Commands::CoinSums {
                target,
                coins,
                strategy,
                common,
            } => {
                assert_eq!(target, 10);
                assert_eq!(coins, vec![1, 2, 5]);
                assert_eq!(strategy, Strategy::Memoized);
                assert!(common.verify);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_non_abundant_sums_bound() {
        let cli = Cli::try_parse_from(["euler", "non-abundant-sums", "-b", "100", "-s"]).unwrap();
        match cli.command {
            Commands::NonAbundantSums { bound, common } => {
                assert_eq!(bound, 100);
                assert!(common.stats);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["euler"]).is_err());
    }

    #[test]
    fn test_verify_solution() {
        assert_eq!(verify_solution("coin-sums", 3, 3), Ok(()));
        assert_eq!(
            verify_solution("coin-sums", 3, 4),
            Err(PuzzleError::VerificationFailed {
                puzzle: "coin-sums",
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_run_coin_sums_verified() {
        let common = CommonOptions {
            verify: true,
            ..CommonOptions::default()
        };
        assert_eq!(run_coin_sums(10, vec![1, 2, 5], Strategy::Naive, &common), Ok(()));
    }

    #[test]
    fn test_run_coin_sums_rejects_zero() {
        assert_eq!(
            run_coin_sums(10, vec![0], Strategy::Naive, &CommonOptions::default()),
            Err(PuzzleError::ZeroDenomination { index: 0 })
        );
    }

    #[test]
    fn test_run_coin_sums_rejects_large_target() {
        let common = CommonOptions {
            verify: true,
            ..CommonOptions::default()
        };
        assert_eq!(
            run_coin_sums(MAX_TARGET + 1, vec![MAX_TARGET + 1], Strategy::Naive, &common),
            Err(PuzzleError::TargetTooLarge {
                target: MAX_TARGET + 1,
                max: MAX_TARGET,
            })
        );
        assert_eq!(
            run_coin_sums(4_000_000_000, vec![1_000_000_000], Strategy::Memoized, &common),
            Err(PuzzleError::TargetTooLarge {
                target: 4_000_000_000,
                max: MAX_TARGET,
            })
        );
    }

    #[test]
    fn test_run_non_abundant_sums_verified() {
        let common = CommonOptions {
            verify: true,
            stats: true,
            ..CommonOptions::default()
        };
        assert_eq!(run_non_abundant_sums(1000, &common), Ok(()));
    }

    #[test]
    fn test_solve_and_report_detects_mismatch() {
        let common = CommonOptions {
            verify: true,
            ..CommonOptions::default()
        };
        let puzzle = CoinSums::new(4, [1, 2]).unwrap();
        let result = solve_and_report(puzzle, &common, || Ok(99), |_| Vec::new());
        assert_eq!(
            result,
            Err(PuzzleError::VerificationFailed {
                puzzle: "coin-sums",
                expected: 99,
                actual: 3,
            })
        );
    }
}
