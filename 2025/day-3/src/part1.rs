use miette::*;

use crate::aggregate::{aggregate, Mode};
use crate::parser::parse_banks;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let banks = parse_banks(input)?;
    let total_joltage = aggregate(&banks, Mode::Pair)?;

    Ok(total_joltage.to_string())
}
