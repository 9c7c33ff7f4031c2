//! # Numeral Systems
//!
//! Digit alphabets and radix conversion for the four programmer bases.
//! Parsing goes through [`BigInt`] so an entry is never truncated before it
//! is masked; formatting always produces uppercase digits.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Active numeral system for entry and display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Base {
    Hex,
    #[default]
    Dec,
    Oct,
    Bin,
}

impl Base {
    /// All bases in panel order
    pub const ALL: [Base; 4] = [Base::Hex, Base::Dec, Base::Oct, Base::Bin];

    /// Radix of this base
    #[inline]
    pub const fn radix(self) -> u32 {
        match self {
            Base::Hex => 16,
            Base::Dec => 10,
            Base::Oct => 8,
            Base::Bin => 2,
        }
    }

    /// Short uppercase name (`HEX`, `DEC`, `OCT`, `BIN`)
    pub const fn name(self) -> &'static str {
        match self {
            Base::Hex => "HEX",
            Base::Dec => "DEC",
            Base::Oct => "OCT",
            Base::Bin => "BIN",
        }
    }

    /// Check whether `digit` belongs to this base's alphabet.
    ///
    /// Hex letters are accepted in either case.
    #[inline]
    pub fn accepts(self, digit: char) -> bool {
        digit.is_digit(self.radix())
    }

    /// Check that every character of `text` is a digit of this base
    pub fn is_valid(self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| self.accepts(c))
    }

    /// Parse a digit string in this base.
    ///
    /// Returns `None` for empty strings or strings containing characters
    /// outside the alphabet (signs and separators included).
    pub fn parse(self, text: &str) -> Option<BigInt> {
        if !self.is_valid(text) {
            return None;
        }
        BigInt::parse_bytes(text.as_bytes(), self.radix())
    }

    /// Format a masked word, uppercase
    pub fn format_u64(self, value: u64) -> String {
        match self {
            Base::Hex => format!("{:X}", value),
            Base::Dec => value.to_string(),
            Base::Oct => format!("{:o}", value),
            Base::Bin => format!("{:b}", value),
        }
    }

    /// Number of digits needed to show `bits` bits in this base
    pub const fn digits_for(self, bits: u32) -> u32 {
        match self {
            Base::Hex => (bits + 3) / 4,
            Base::Oct => (bits + 2) / 3,
            Base::Bin => bits,
            // ceil(bits * log10(2)); 20 for 64 bits
            Base::Dec => (bits * 30103 + 99_999) / 100_000,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Base {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" | "16" => Ok(Base::Hex),
            "dec" | "10" => Ok(Base::Dec),
            "oct" | "8" => Ok(Base::Oct),
            "bin" | "2" => Ok(Base::Bin),
            other => Err(CalcError::InvalidBase(other.to_string())),
        }
    }
}
