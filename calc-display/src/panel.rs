//! Calculator panel snapshot and text rendering

use calc_spec::{Base, BitWidth, CalcError, Mode};
use serde::Serialize;

use crate::bits::BitGrid;
use crate::radix::RadixReadout;

/// Shown on the display while an error is latched
pub const ERROR_DISPLAY: &str = "ERR";

/// Expression line placeholder in Programmer mode
pub const READY: &str = "READY";

/// Everything a front end needs to draw the calculator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub mode: Mode,
    pub base: Base,
    pub bit_width: BitWidth,
    /// Main display line
    pub display: String,
    /// Pending operation, e.g. `FF XOR`
    pub expression: String,
    /// Latched error message, if any
    pub error: Option<String>,
    /// Four-base readout (Programmer mode only)
    pub readout: Option<RadixReadout>,
    /// Bit grid (Programmer mode only)
    pub bits: Option<BitGrid>,
    /// Completed computations, oldest first
    pub history: Vec<String>,
}

impl Panel {
    /// Build a panel from the calculator's current state.
    ///
    /// `value` is the masked word behind `display`; it drives the readout and
    /// the bit grid and is ignored in Standard mode.
    pub fn new(
        mode: Mode,
        base: Base,
        bit_width: BitWidth,
        display: &str,
        expression: &str,
        value: u64,
        error: Option<&CalcError>,
    ) -> Self {
        let programmer = mode.is_programmer();
        Self {
            mode,
            base,
            bit_width,
            display: match error {
                Some(_) => ERROR_DISPLAY.to_string(),
                None => display.to_string(),
            },
            expression: expression.to_string(),
            error: error.map(|e| e.to_string()),
            readout: programmer.then(|| RadixReadout::new(value, bit_width)),
            bits: programmer.then(|| BitGrid::new(value, bit_width)),
            history: Vec::new(),
        }
    }

    /// Attach history lines
    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.history = history;
        self
    }

    /// Render the panel as plain text
    pub fn render(&self) -> String {
        let mut output = String::new();

        match self.mode {
            Mode::Programmer => output.push_str(&format!(
                "[{}] {} {}\n",
                self.mode.label(),
                self.base,
                self.bit_width
            )),
            Mode::Standard => output.push_str(&format!("[{}]\n", self.mode.label())),
        }

        let expression = if self.expression.is_empty() && self.mode.is_programmer() {
            READY
        } else {
            self.expression.as_str()
        };
        output.push_str(&format!("  {}\n", expression));
        output.push_str(&format!("  {:>24}\n", self.display));

        if let Some(readout) = &self.readout {
            output.push('\n');
            for base in Base::ALL {
                let digits = base.digits_for(self.bit_width.bits()) as usize;
                let marker = if base == self.base { '>' } else { ' ' };
                output.push_str(&format!(
                    "{}{} {:>digits$}\n",
                    marker,
                    base,
                    readout.get(base),
                    digits = digits
                ));
            }
        }

        if let Some(bits) = &self.bits {
            output.push('\n');
            let labels = bits
                .group_labels()
                .iter()
                .map(|(hi, lo)| format!("{:<4}{:>4}", hi, lo))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&format!(" {}\n", labels));
            output.push_str(&format!(" {}\n", bits.render()));
        }

        if let Some(error) = &self.error {
            output.push_str(&format!("\n! {}\n", error));
        }

        if !self.history.is_empty() {
            output.push_str("\nhistory:\n");
            for line in &self.history {
                output.push_str(&format!("  {}\n", line));
            }
        }

        output
    }
}
