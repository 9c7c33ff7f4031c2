//! # Calculator Display
//!
//! Turns calculator state into what the user sees:
//!
//! - [`RadixReadout`]: the current word in HEX, DEC, OCT and BIN at once
//! - [`BitGrid`]: one toggle cell per bit, most significant first
//! - [`Panel`]: a full snapshot (display line, expression line, readouts,
//!   bits, history) that renders as text or serializes with serde
//!
//! Everything here is a pure function of its inputs. A display that failed
//! to parse is handed in as zero by the caller.
//!
//! ## Example
//!
//! ```rust
//! use calc_display::RadixReadout;
//! use calc_spec::BitWidth;
//!
//! let readout = RadixReadout::new(0xF0, BitWidth::W8);
//! assert_eq!(readout.dec, "240");
//! assert_eq!(readout.bin, "11110000");
//! ```

pub mod bits;
pub mod panel;
pub mod radix;

pub use bits::{toggle, BitCell, BitGrid};
pub use panel::{Panel, ERROR_DISPLAY, READY};
pub use radix::{group_binary, RadixReadout};
