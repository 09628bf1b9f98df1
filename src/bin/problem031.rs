//! Prints the number of ways two pounds can be made from UK coins.

use euler_puzzles::coin_sums::solver::CoinSums;
use euler_puzzles::puzzle::solver::Puzzle;

fn main() {
    println!("{}", CoinSums::uk().solve());
}
