//! Prints the sum of all positive integers up to 28123 that are not the sum of
//! two abundant numbers.

use euler_puzzles::abundant::solver::AbundantSieve;
use euler_puzzles::puzzle::solver::Puzzle;

fn main() {
    println!("{}", AbundantSieve::euler().solve());
}
