//! # Operator Definitions
//!
//! Binary operators are organized by family:
//! - Arithmetic: `+ - * / MOD`
//! - Logical: `AND OR XOR NAND NOR`
//! - Shift: `LSH RSH`
//!
//! Standard mode only accepts `+ - * /`. Everything else is Programmer-only.
//! Unary operations (`NOT`, `+/-`, `%`) apply immediately to the shown value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mode::Mode;

/// Binary operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    // ========== Arithmetic ==========
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b` (integer division in Programmer mode)
    Div,
    /// `a MOD b`
    Mod,

    // ========== Logical ==========
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `!(a & b)`
    Nand,
    /// `!(a | b)`
    Nor,

    // ========== Shift ==========
    /// `a << b`
    Lsh,
    /// `a >> b`
    Rsh,
}

impl Operator {
    /// Every operator, keypad order
    pub const ALL: [Operator; 12] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Nand,
        Operator::Nor,
        Operator::Lsh,
        Operator::Rsh,
    ];

    /// Parse a keypad symbol or keyword (case-insensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" | "×" | "X" => Some(Operator::Mul),
            "/" | "÷" => Some(Operator::Div),
            "MOD" => Some(Operator::Mod),
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "XOR" => Some(Operator::Xor),
            "NAND" => Some(Operator::Nand),
            "NOR" => Some(Operator::Nor),
            "LSH" | "<<" => Some(Operator::Lsh),
            "RSH" | ">>" => Some(Operator::Rsh),
            _ => None,
        }
    }

    /// Symbol shown on the expression line
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "MOD",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Nand => "NAND",
            Operator::Nor => "NOR",
            Operator::Lsh => "LSH",
            Operator::Rsh => "RSH",
        }
    }

    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Mod
        )
    }

    #[inline]
    pub const fn is_logical(self) -> bool {
        matches!(
            self,
            Operator::And | Operator::Or | Operator::Xor | Operator::Nand | Operator::Nor
        )
    }

    #[inline]
    pub const fn is_shift(self) -> bool {
        matches!(self, Operator::Lsh | Operator::Rsh)
    }

    /// Operators whose right-hand zero is a division by zero
    #[inline]
    pub const fn divides(self) -> bool {
        matches!(self, Operator::Div | Operator::Mod)
    }

    /// Get the operator family
    #[inline]
    pub const fn family(self) -> OperatorFamily {
        if self.is_arithmetic() {
            OperatorFamily::Arithmetic
        } else if self.is_logical() {
            OperatorFamily::Logical
        } else {
            OperatorFamily::Shift
        }
    }

    /// Check whether the operator exists in `mode`
    #[inline]
    pub const fn available_in(self, mode: Mode) -> bool {
        match mode {
            Mode::Programmer => true,
            Mode::Standard => matches!(
                self,
                Operator::Add | Operator::Sub | Operator::Mul | Operator::Div
            ),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operator family
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorFamily {
    /// `+ - * / MOD`
    Arithmetic = 0,
    /// `AND OR XOR NAND NOR`
    Logical = 1,
    /// `LSH RSH`
    Shift = 2,
}

impl fmt::Display for OperatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatorFamily::Arithmetic => "arithmetic",
            OperatorFamily::Logical => "logical",
            OperatorFamily::Shift => "shift",
        };
        write!(f, "{}", name)
    }
}

/// Operation applied immediately to the shown value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnaryOp {
    /// Bitwise complement, masked (Programmer)
    Not,
    /// Sign flip (Standard) or masked two's complement (Programmer)
    Negate,
    /// Divide by one hundred (Standard)
    Percent,
}

impl UnaryOp {
    /// Parse a keypad symbol or keyword (case-insensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "NOT" | "~" => Some(UnaryOp::Not),
            "+/-" | "NEG" | "±" => Some(UnaryOp::Negate),
            "%" => Some(UnaryOp::Percent),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "NOT",
            UnaryOp::Negate => "+/-",
            UnaryOp::Percent => "%",
        }
    }

    #[inline]
    pub const fn available_in(self, mode: Mode) -> bool {
        match self {
            UnaryOp::Not => matches!(mode, Mode::Programmer),
            UnaryOp::Negate => true,
            UnaryOp::Percent => matches!(mode, Mode::Standard),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_family() {
        assert_eq!(Operator::Add.family(), OperatorFamily::Arithmetic);
        assert_eq!(Operator::Mod.family(), OperatorFamily::Arithmetic);
        assert_eq!(Operator::Nand.family(), OperatorFamily::Logical);
        assert_eq!(Operator::Rsh.family(), OperatorFamily::Shift);
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Operator::from_token("xor"), Some(Operator::Xor));
        assert_eq!(Operator::from_token("×"), Some(Operator::Mul));
        assert_eq!(Operator::from_token("<<"), Some(Operator::Lsh));
        assert_eq!(Operator::from_token("POW"), None);
        assert_eq!(UnaryOp::from_token("not"), Some(UnaryOp::Not));
        assert_eq!(UnaryOp::from_token("+/-"), Some(UnaryOp::Negate));
    }

    #[test]
    fn test_symbol_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_standard_mode_subset() {
        let standard: Vec<_> = Operator::ALL
            .iter()
            .filter(|op| op.available_in(Mode::Standard))
            .collect();
        assert_eq!(standard.len(), 4);
        assert!(!Operator::Mod.available_in(Mode::Standard));
        assert!(Operator::Xor.available_in(Mode::Programmer));
    }

    #[test]
    fn test_unary_availability() {
        assert!(UnaryOp::Not.available_in(Mode::Programmer));
        assert!(!UnaryOp::Not.available_in(Mode::Standard));
        assert!(UnaryOp::Percent.available_in(Mode::Standard));
        assert!(!UnaryOp::Percent.available_in(Mode::Programmer));
        assert!(UnaryOp::Negate.available_in(Mode::Standard));
    }
}
