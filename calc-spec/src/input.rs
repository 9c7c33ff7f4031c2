//! Calculator inputs
//!
//! Every keypad button, keyboard key and selector click ends up as one
//! [`Input`]. The [`InputKind`] tag mirrors the keypad's button categories and
//! is what a front end attaches to a raw token before dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base::Base;
use crate::mode::Mode;
use crate::operator::{Operator, UnaryOp};
use crate::width::BitWidth;

/// Button category of a raw keypad token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// `0`-`9` and `.`
    Number,
    /// `A`-`F`
    Hex,
    /// `+ - * / MOD` and the Standard-mode `+/-`, `%`
    Operator,
    /// `AND OR XOR NAND NOR LSH RSH NOT`
    Bitwise,
    /// `AC`, `DEL`, `=`
    Action,
}

/// A single dispatched input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Digit or decimal point
    Digit(char),
    /// Binary operator
    Operator(Operator),
    /// Immediate unary operation
    Unary(UnaryOp),
    /// `=`
    Equals,
    /// `AC`
    Clear,
    /// `DEL`
    Delete,
    /// Mode selector
    SetMode(Mode),
    /// Base selector
    SetBase(Base),
    /// Word size selector
    SetBitWidth(BitWidth),
    /// Bit grid cell click (bit index, 0 = least significant)
    ToggleBit(u32),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Digit(d) => write!(f, "{}", d),
            Input::Operator(op) => write!(f, "{}", op),
            Input::Unary(op) => write!(f, "{}", op),
            Input::Equals => write!(f, "="),
            Input::Clear => write!(f, "AC"),
            Input::Delete => write!(f, "DEL"),
            Input::SetMode(mode) => write!(f, ":mode {}", mode),
            Input::SetBase(base) => write!(f, ":base {}", base),
            Input::SetBitWidth(width) => write!(f, ":bits {}", width.bits()),
            Input::ToggleBit(index) => write!(f, ":toggle {}", index),
        }
    }
}
