//! # Programmer Calculator Specification
//!
//! Core types shared by the calculator engine, the input layer and the
//! display layer.
//!
//! ## Key Features
//! - Two modes: Standard (`f64`, decimal) and Programmer (integer, multi-base)
//! - Four numeral systems: HEX, DEC, OCT, BIN
//! - Four bit widths: 8, 16, 32, 64 (all Programmer results are masked)
//! - Closed operator set: `+ - * / MOD AND OR XOR NAND NOR LSH RSH`
//! - Unary operations: `NOT`, `+/-`, `%`

pub mod base;
pub mod config;
pub mod error;
pub mod input;
pub mod mode;
pub mod operator;
pub mod value;
pub mod width;

pub use base::Base;
pub use config::{CalcConfig, ConfigError, DivisionPolicy};
pub use error::{CalcError, Result};
pub use input::{Input, InputKind};
pub use mode::Mode;
pub use operator::{Operator, OperatorFamily, UnaryOp};
pub use value::{is_exponent_form, Value};
pub use width::BitWidth;

/// Display contents after a reset
pub const DEFAULT_DISPLAY: &str = "0";

/// Decimal separator accepted in Standard mode
pub const DECIMAL_POINT: char = '.';
