//! Four-base readout of the current word

use calc_spec::{Base, BitWidth};
use serde::Serialize;

/// Bits per binary group
pub const BIN_GROUP: usize = 8;

/// HEX / DEC / OCT / BIN renderings of one masked value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadixReadout {
    pub hex: String,
    pub dec: String,
    pub oct: String,
    pub bin: String,
}

impl RadixReadout {
    /// Build the readout for `value` masked to `width`
    pub fn new(value: u64, width: BitWidth) -> Self {
        let value = width.mask_u64(value);
        Self {
            hex: Base::Hex.format_u64(value),
            dec: Base::Dec.format_u64(value),
            oct: Base::Oct.format_u64(value),
            bin: group_binary(value, width),
        }
    }

    /// Readout line for one base
    pub fn get(&self, base: Base) -> &str {
        match base {
            Base::Hex => &self.hex,
            Base::Dec => &self.dec,
            Base::Oct => &self.oct,
            Base::Bin => &self.bin,
        }
    }
}

/// Binary digits, zero-padded to the full width, one space every 8 bits
pub fn group_binary(value: u64, width: BitWidth) -> String {
    let padded = format!("{:0width$b}", value, width = width.bits() as usize);
    padded
        .as_bytes()
        .chunks(BIN_GROUP)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
