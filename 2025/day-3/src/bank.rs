use std::fmt;
use std::str::FromStr;

use crate::error::JoltageError;

/// A single battery joltage rating, always in `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const MAX: Digit = Digit(9);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = JoltageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(JoltageError::DigitOutOfRange(value))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = JoltageError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(JoltageError::InvalidCharacter {
                character: c,
                position: 0,
            })
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of batteries, in the order they sit in the bank.
///
/// Banks are built once by the input layer and only ever read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitBank(Vec<Digit>);

impl DigitBank {
    /// Builds a bank from raw values, rejecting anything above 9.
    pub fn from_digits(values: &[u8]) -> Result<Self, JoltageError> {
        values
            .iter()
            .map(|&v| Digit::try_from(v))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for DigitBank {
    type Err = JoltageError;

    /// Surrounding whitespace is ignored; a blank line is an empty bank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Digit::try_from(character).map_err(|_| JoltageError::InvalidCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for DigitBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|d| write!(f, "{d}"))
    }
}
