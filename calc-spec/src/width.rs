//! Word sizes and masking

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalcError;

/// Word size used to mask every Programmer-mode result
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitWidth {
    W8 = 8,
    W16 = 16,
    W32 = 32,
    #[default]
    W64 = 64,
}

impl BitWidth {
    /// All widths, widest first (selector order)
    pub const ALL: [BitWidth; 4] = [BitWidth::W64, BitWidth::W32, BitWidth::W16, BitWidth::W8];

    /// Try to convert from a bit count
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(BitWidth::W8),
            16 => Some(BitWidth::W16),
            32 => Some(BitWidth::W32),
            64 => Some(BitWidth::W64),
            _ => None,
        }
    }

    /// Number of bits
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Largest representable value (`2^bits - 1`)
    #[inline]
    pub const fn max_value(self) -> u64 {
        match self {
            BitWidth::W64 => u64::MAX,
            _ => (1u64 << self.bits()) - 1,
        }
    }

    /// Truncate a word to this width
    #[inline]
    pub const fn mask_u64(self, value: u64) -> u64 {
        value & self.max_value()
    }

    /// Truncate an arbitrary-precision integer to this width.
    ///
    /// Negative values wrap two's-complement style, so `-1` masks to all ones.
    pub fn mask(self, value: &BigInt) -> u64 {
        let mask = BigInt::from(self.max_value());
        let masked = value & &mask;
        // The AND with a non-negative mask is always in [0, max_value]
        masked.to_u64().unwrap_or(0)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = CalcError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(CalcError::InvalidBitWidth(bits))
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> u32 {
        width.bits()
    }
}
