use std::fmt;

use num_bigint::BigUint;
use rayon::prelude::*;

use crate::accumulator::PrecisionAccumulator;
use crate::bank::DigitBank;
use crate::error::JoltageError;
use crate::pair::max_pair;
use crate::subsequence::{max_subsequence, Selection};

/// How each bank contributes to the total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Best two-battery joltage per bank.
    Pair,
    /// Best `k`-battery joltage per bank.
    Subsequence { k: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunningTotal {
    Bounded(u64),
    Unbounded(BigUint),
}

impl fmt::Display for RunningTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunningTotal::Bounded(total) => write!(f, "{total}"),
            RunningTotal::Unbounded(total) => write!(f, "{total}"),
        }
    }
}

#[tracing::instrument(skip(banks), fields(bank_count = banks.len()))]
pub fn aggregate(banks: &[DigitBank], mode: Mode) -> Result<RunningTotal, JoltageError> {
    match mode {
        Mode::Pair => Ok(RunningTotal::Bounded(sum_pair_max(banks))),
        Mode::Subsequence { k } => sum_subsequence_max(banks, k).map(RunningTotal::Unbounded),
    }
}

/// Sum of [`max_pair`] over every bank. Each term is at most 99.
pub fn sum_pair_max(banks: &[DigitBank]) -> u64 {
    let total: u64 = banks.par_iter().map(|bank| u64::from(max_pair(bank))).sum();
    tracing::debug!(total, "pair pass done");
    total
}

/// Sum of [`max_subsequence`] over every bank, without a width limit.
///
/// Selections are computed in parallel; the running total is folded on the
/// calling thread and the first bad selection aborts the pass.
pub fn sum_subsequence_max(banks: &[DigitBank], k: i64) -> Result<BigUint, JoltageError> {
    let selections: Vec<Selection> = banks
        .par_iter()
        .map(|bank| max_subsequence(bank, k))
        .collect();

    let mut acc = PrecisionAccumulator::new();
    for selection in &selections {
        tracing::trace!(%selection, "accumulating");
        acc.add(selection)?;
    }

    let total = acc.into_total();
    tracing::debug!(%total, k, "subsequence pass done");
    Ok(total)
}
