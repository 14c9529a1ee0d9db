use std::fmt;

use crate::bank::{Digit, DigitBank};

/// Batteries picked from a bank, in bank order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(Vec<Digit>);

impl Selection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    /// Raw digit values, most significant first.
    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|d| d.value()).collect()
    }

    /// The selection read as a decimal number, if it fits in a `u64`.
    /// An empty selection reads as `0`.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.iter().try_fold(0u64, |acc, d| {
            acc.checked_mul(10)?.checked_add(u64::from(d.value()))
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|d| write!(f, "{d}"))
    }
}

/// Finds the largest number that can be formed by keeping exactly `k`
/// batteries from `bank` while preserving their relative order.
///
/// A non-positive `k` selects nothing, and a `k` at or past the bank length
/// keeps the whole bank.
///
/// # Examples:
/// ```text
/// 987654321111111, k = 12 -> 987654321111
/// 234234234234278, k = 12 -> 434234234278
/// ```
pub fn max_subsequence(bank: &DigitBank, k: i64) -> Selection {
    if k <= 0 {
        return Selection::default();
    }
    let k = usize::try_from(k).unwrap_or(usize::MAX);

    let digits = bank.digits();
    let n = digits.len();

    if k >= n {
        return Selection(digits.to_vec());
    }

    let mut stack: Vec<Digit> = Vec::with_capacity(k);

    for (i, &digit) in digits.iter().enumerate() {
        // Batteries left to scan, this one included.
        let remaining = n - i;

        // A smaller top may only go if the rest of the bank can still fill `k` slots.
        while let Some(&top) = stack.last() {
            if top < digit && stack.len() - 1 + remaining >= k {
                stack.pop();
            } else {
                break;
            }
        }

        if stack.len() < k {
            stack.push(digit);
        }
    }

    stack.truncate(k);
    Selection(stack)
}
