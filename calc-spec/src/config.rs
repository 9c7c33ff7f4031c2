//! # Calculator Configuration
//!
//! Start-up selectors and engine limits. Nothing here is persisted; a front
//! end builds a config once and hands it to the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::base::Base;
use crate::mode::Mode;
use crate::width::BitWidth;

/// What `x / 0` and `x MOD 0` produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// Show `0` and carry on
    #[default]
    Zero,
    /// Show `ERR` until the next digit or AC
    Error,
}

impl FromStr for DivisionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(DivisionPolicy::Zero),
            "error" | "err" => Ok(DivisionPolicy::Error),
            _ => Err(ConfigError::InvalidDivisionPolicy),
        }
    }
}

impl fmt::Display for DivisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionPolicy::Zero => write!(f, "zero"),
            DivisionPolicy::Error => write!(f, "error"),
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Mode selected at start-up and after construction
    pub mode: Mode,
    /// Base selected at start-up
    pub base: Base,
    /// Word size selected at start-up
    pub bit_width: BitWidth,
    /// Maximum digits accepted in a Standard-mode entry (1-32)
    pub max_digits: u8,
    /// Number of completed computations kept in history (at least 1)
    pub history_limit: usize,
    /// Result of dividing by zero
    pub division_policy: DivisionPolicy,
}

impl CalcConfig {
    /// Default configuration:
    /// - Programmer mode, DEC base, 64-bit words
    /// - 16 digit Standard entries
    /// - 50 history entries
    /// - division by zero shows `0`
    pub const DEFAULT: Self = Self {
        mode: Mode::Programmer,
        base: Base::Dec,
        bit_width: BitWidth::W64,
        max_digits: 16,
        history_limit: 50,
        division_policy: DivisionPolicy::Zero,
    };

    /// Create a new configuration with validation
    pub const fn new(
        mode: Mode,
        base: Base,
        bit_width: BitWidth,
        max_digits: u8,
        history_limit: usize,
        division_policy: DivisionPolicy,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            mode,
            base,
            bit_width,
            max_digits,
            history_limit,
            division_policy,
        };

        if max_digits < 1 || max_digits > 32 {
            return Err(ConfigError::InvalidMaxDigits);
        }
        if history_limit < 1 {
            return Err(ConfigError::InvalidHistoryLimit);
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_digits < 1 || self.max_digits > 32 {
            return Err(ConfigError::InvalidMaxDigits);
        }
        if self.history_limit < 1 {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CalcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CalcConfig {{ mode: {}, base: {}, width: {}, max_digits: {}, history: {}, x/0: {} }}",
            self.mode,
            self.base,
            self.bit_width,
            self.max_digits,
            self.history_limit,
            self.division_policy,
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// Max digits must be in range [1, 32]
    InvalidMaxDigits,
    /// History limit must be at least 1
    InvalidHistoryLimit,
    /// Division policy must be `zero` or `error`
    InvalidDivisionPolicy,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxDigits => {
                write!(f, "max_digits must be in range [1, 32]")
            }
            ConfigError::InvalidHistoryLimit => {
                write!(f, "history_limit must be at least 1")
            }
            ConfigError::InvalidDivisionPolicy => {
                write!(f, "division policy must be 'zero' or 'error'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalcConfig::DEFAULT;
        assert_eq!(config.mode, Mode::Programmer);
        assert_eq!(config.base, Base::Dec);
        assert_eq!(config.bit_width, BitWidth::W64);
        assert_eq!(config.max_digits, 16);
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.division_policy, DivisionPolicy::Zero);
        assert_eq!(CalcConfig::default(), config);
    }

    #[test]
    fn test_validation() {
        let ok = CalcConfig::new(
            Mode::Standard,
            Base::Hex,
            BitWidth::W8,
            32,
            1,
            DivisionPolicy::Error,
        );
        assert!(ok.is_ok());

        assert_eq!(
            CalcConfig::new(Mode::Standard, Base::Dec, BitWidth::W8, 0, 10, DivisionPolicy::Zero)
                .unwrap_err(),
            ConfigError::InvalidMaxDigits
        );
        assert_eq!(
            CalcConfig::new(Mode::Standard, Base::Dec, BitWidth::W8, 33, 10, DivisionPolicy::Zero)
                .unwrap_err(),
            ConfigError::InvalidMaxDigits
        );
        assert_eq!(
            CalcConfig::new(Mode::Standard, Base::Dec, BitWidth::W8, 16, 0, DivisionPolicy::Zero)
                .unwrap_err(),
            ConfigError::InvalidHistoryLimit
        );

        let mut config = CalcConfig::DEFAULT;
        config.history_limit = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidHistoryLimit));
    }

    #[test]
    fn test_division_policy_parse() {
        assert_eq!("zero".parse::<DivisionPolicy>(), Ok(DivisionPolicy::Zero));
        assert_eq!("ERR".parse::<DivisionPolicy>(), Ok(DivisionPolicy::Error));
        assert_eq!(
            "panic".parse::<DivisionPolicy>(),
            Err(ConfigError::InvalidDivisionPolicy)
        );
    }

    #[test]
    fn test_display() {
        let text = CalcConfig::DEFAULT.to_string();
        assert!(text.contains("programmer"));
        assert!(text.contains("64-bit"));
        assert!(text.contains("x/0: zero"));
    }
}
