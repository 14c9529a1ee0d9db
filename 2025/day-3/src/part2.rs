use miette::*;

use crate::aggregate::{aggregate, Mode};
use crate::parser::parse_banks;

/// Batteries turned on per bank.
pub const JOLTAGE_DIGITS: i64 = 12;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let banks = parse_banks(input)?;
    let total_joltage = aggregate(&banks, Mode::Subsequence { k: JOLTAGE_DIGITS })?;

    Ok(total_joltage.to_string())
}
