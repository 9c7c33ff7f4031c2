//! Calculator modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Arithmetic mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Decimal-only floating point arithmetic
    Standard,
    /// Multi-base integer arithmetic with bitwise operators
    #[default]
    Programmer,
}

impl Mode {
    /// Label shown above the display
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Standard => "BASIC ARITHMETIC ENGINE",
            Mode::Programmer => "MULTI-BASE ENGINE + BITWISE",
        }
    }

    #[inline]
    pub const fn is_programmer(self) -> bool {
        matches!(self, Mode::Programmer)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::Programmer => write!(f, "programmer"),
        }
    }
}

impl FromStr for Mode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" | "basic" => Ok(Mode::Standard),
            "programmer" | "prog" => Ok(Mode::Programmer),
            other => Err(CalcError::InvalidMode(other.to_string())),
        }
    }
}
