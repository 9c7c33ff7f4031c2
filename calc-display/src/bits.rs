//! Bit visualizer model
//!
//! One cell per bit of the active width, most significant bit first. Cells
//! carry their bit index so a click can be mapped straight back to
//! [`toggle`].

use calc_spec::{BitWidth, CalcError};
use serde::Serialize;

/// Cells per visual group
pub const GROUP_SIZE: u32 = 8;

/// A single toggle cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitCell {
    /// Bit index, 0 = least significant
    pub index: u32,
    pub set: bool,
}

/// Grid of `width` cells for one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitGrid {
    pub width: u32,
    pub cells: Vec<BitCell>,
}

impl BitGrid {
    pub fn new(value: u64, width: BitWidth) -> Self {
        let cells = (0..width.bits())
            .rev()
            .map(|index| BitCell {
                index,
                set: (value >> index) & 1 == 1,
            })
            .collect();
        Self {
            width: width.bits(),
            cells,
        }
    }

    /// Reassemble the value the grid shows
    pub fn value(&self) -> u64 {
        self.cells
            .iter()
            .filter(|cell| cell.set)
            .fold(0u64, |acc, cell| acc | (1u64 << cell.index))
    }

    /// Number of set cells
    pub fn ones(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.set).count() as u32
    }

    /// Text rendering: `0`/`1` per cell, a gap every 8 cells
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.cells.len() / 8);
        for cell in &self.cells {
            out.push(if cell.set { '1' } else { '0' });
            if cell.index % GROUP_SIZE == 0 && cell.index != 0 {
                out.push(' ');
            }
        }
        out
    }

    /// Bit index header for each group (`63 .. 56` style), MSB first
    pub fn group_labels(&self) -> Vec<(u32, u32)> {
        (0..self.width / GROUP_SIZE)
            .rev()
            .map(|g| (g * GROUP_SIZE + GROUP_SIZE - 1, g * GROUP_SIZE))
            .collect()
    }
}

/// Flip bit `index` of `value`, keeping the result inside `width`
pub fn toggle(value: u64, index: u32, width: BitWidth) -> Result<u64, CalcError> {
    if index >= width.bits() {
        return Err(CalcError::BitOutOfRange {
            index,
            width: width.bits(),
        });
    }
    Ok(width.mask_u64(value ^ (1u64 << index)))
}
