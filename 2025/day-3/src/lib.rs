//! Maximum joltage from banks of batteries.
//!
//! Each bank is a line of single-digit ratings. Part 1 turns on two batteries
//! per bank, part 2 turns on twelve; in both cases the batteries keep their
//! order and the resulting digits are read as one decimal number.

pub mod accumulator;
pub mod aggregate;
pub mod bank;
pub mod error;
pub mod pair;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod subsequence;

pub use accumulator::PrecisionAccumulator;
pub use aggregate::{aggregate, sum_pair_max, sum_subsequence_max, Mode, RunningTotal};
pub use bank::{Digit, DigitBank};
pub use error::JoltageError;
pub use pair::max_pair;
pub use subsequence::{max_subsequence, Selection};
