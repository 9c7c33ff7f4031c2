//! # Operand Values
//!
//! A stored operand is either a masked Programmer word or a Standard-mode
//! float. Arbitrary precision only exists inside the evaluator; anything kept
//! in the calculator state has already been masked to the active bit width.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base::Base;
use crate::mode::Mode;

/// Operand held by the calculator state
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Programmer mode word, already masked
    Int(u64),
    /// Standard mode number
    Real(f64),
}

impl Value {
    /// Zero of the representation used by `mode`
    pub const fn zero(mode: Mode) -> Self {
        match mode {
            Mode::Programmer => Value::Int(0),
            Mode::Standard => Value::Real(0.0),
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Value::Int(v) => v == 0,
            Value::Real(v) => v == 0.0,
        }
    }

    /// Integer view; reals are truncated toward zero
    pub fn as_u64(&self) -> u64 {
        match *self {
            Value::Int(v) => v,
            Value::Real(v) if v.is_finite() && v > 0.0 => v as u64,
            Value::Real(_) => 0,
        }
    }

    /// Floating point view
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(v) => v as f64,
            Value::Real(v) => v,
        }
    }

    /// Render for the display in `base` (reals are always decimal)
    pub fn render(&self, base: Base) -> String {
        match *self {
            Value::Int(v) => base.format_u64(v),
            Value::Real(v) => format_real(v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Base::Dec))
    }
}

/// Format a Standard-mode number the way the display shows it.
///
/// Integral values print without a fractional part and `-0` prints as `0`.
/// Magnitudes from `1e21` up or below `1e-6` switch to exponent notation with
/// a signed exponent (`1e+32`, `3.5e-7`).
pub fn format_real(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    format!("{}", value)
}

/// Whether a Standard-mode display holds an exponent rendering
#[inline]
pub fn is_exponent_form(text: &str) -> bool {
    text.contains('e')
}
