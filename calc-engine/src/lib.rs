//! # Calculator Engine
//!
//! Input dispatch, state and evaluation for a two-mode calculator.
//!
//! ## Features
//!
//! - **Programmer mode**: HEX/DEC/OCT/BIN entry, 8/16/32/64-bit words,
//!   arithmetic, bitwise and shift operators, bit toggling
//! - **Standard mode**: decimal entry with `+ - * /`, sign and percent
//! - **Two's complement wrap**: every Programmer result is masked to the word
//! - **Repeated `=`**: reapplies the last operator and right operand
//! - **History**: bounded log of completed computations
//!
//! ## Example
//!
//! ```rust
//! use calc_engine::Calculator;
//! use calc_spec::{Base, Input, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.handle(Input::SetBase(Base::Hex));
//! calc.handle_all([
//!     Input::Digit('F'),
//!     Input::Digit('F'),
//!     Input::Operator(Operator::Xor),
//!     Input::Digit('F'),
//!     Input::Equals,
//! ]);
//! assert_eq!(calc.display(), "F0");
//! ```

pub mod calculator;
pub mod evaluate;
pub mod history;
pub mod state;

pub use calculator::{Calculator, IgnoreReason, Response};
pub use evaluate::{apply_binary, apply_unary};
pub use history::{History, HistoryEntry};
pub use state::{CalculatorState, Phase};

use calc_spec::{CalcConfig, CalcError, Input};

/// Simple evaluation helper
///
/// Feeds `inputs` to a fresh calculator and returns it.
pub fn run<I>(config: CalcConfig, inputs: I) -> Result<Calculator, CalcError>
where
    I: IntoIterator<Item = Input>,
{
    let mut calc = Calculator::with_config(config)?;
    calc.handle_all(inputs);
    Ok(calc)
}
