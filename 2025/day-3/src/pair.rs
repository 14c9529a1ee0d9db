use itertools::Itertools;

use crate::bank::DigitBank;

/// Largest two-digit joltage `10 * a + b` from batteries `a` before `b`.
///
/// Banks with fewer than two batteries have no pair and yield `0`.
///
/// # Examples:
/// ```text
/// 12345           -> 45
/// 811111111111119 -> 89
/// ```
pub fn max_pair(bank: &DigitBank) -> u8 {
    bank.digits()
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.value() * 10 + b.value())
        .max()
        .unwrap_or(0)
}
