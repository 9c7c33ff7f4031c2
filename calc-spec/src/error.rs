//! # Error Types for the calculator core

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Selector errors
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Invalid base: {0}")]
    InvalidBase(String),

    #[error("Invalid bit width: {0} (valid: 8, 16, 32, 64)")]
    InvalidBitWidth(u32),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Bit index {index} out of range for {width}-bit word")]
    BitOutOfRange { index: u32, width: u32 },

    // Evaluation errors
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,
}

pub type Result<T> = std::result::Result<T, CalcError>;
