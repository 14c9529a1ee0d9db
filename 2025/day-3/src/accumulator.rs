use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::JoltageError;
use crate::subsequence::Selection;

/// Running sum of selections read as unbounded base-10 integers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrecisionAccumulator {
    total: BigUint,
}

impl PrecisionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, selection: &Selection) -> Result<(), JoltageError> {
        self.add_digits(&selection.values())
    }

    /// Adds the number spelled by `digits`, most significant first.
    /// No digits adds nothing; any value above 9 leaves the total untouched.
    pub fn add_digits(&mut self, digits: &[u8]) -> Result<(), JoltageError> {
        if digits.is_empty() {
            return Ok(());
        }

        let value = BigUint::from_radix_be(digits, 10).ok_or_else(|| {
            JoltageError::InternalInvariantViolation {
                selection: digits.to_vec(),
            }
        })?;

        self.total += value;
        Ok(())
    }

    pub fn total(&self) -> &BigUint {
        &self.total
    }

    pub fn into_total(self) -> BigUint {
        self.total
    }

    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bank::DigitBank;
    use crate::subsequence::max_subsequence;

    #[test]
    fn sums_selections() -> Result<(), JoltageError> {
        let mut acc = PrecisionAccumulator::new();
        for line in ["987654321111111", "81111111111119"] {
            let bank: DigitBank = line.parse()?;
            acc.add(&max_subsequence(&bank, 12))?;
        }
        assert_eq!(acc.total().to_string(), "1798765432230");
        Ok(())
    }

    #[test]
    fn empty_selection_contributes_zero() -> Result<(), JoltageError> {
        let mut acc = PrecisionAccumulator::new();
        acc.add(&Selection::default())?;
        acc.add_digits(&[])?;
        assert!(acc.is_zero());
        Ok(())
    }

    #[test]
    fn grows_past_u64() -> Result<(), JoltageError> {
        let mut acc = PrecisionAccumulator::new();
        let nines = [9u8; 20];
        acc.add_digits(&nines)?;
        acc.add_digits(&nines)?;
        assert_eq!(acc.total().to_string(), "199999999999999999998");
        assert!(acc.total() > &BigUint::from(u64::MAX));
        Ok(())
    }

    #[test]
    fn rejects_non_digit_values() {
        let mut acc = PrecisionAccumulator::new();
        acc.add_digits(&[4, 2]).unwrap();

        assert_eq!(
            acc.add_digits(&[1, 10, 3]),
            Err(JoltageError::InternalInvariantViolation {
                selection: vec![1, 10, 3]
            })
        );
        assert_eq!(acc.total(), &BigUint::from(42u32));
    }
}
