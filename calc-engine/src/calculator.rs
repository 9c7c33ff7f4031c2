//! Calculator controller
//!
//! [`Calculator`] owns the state and is the only thing that mutates it.
//! Every front end action goes through [`Calculator::handle`]; inputs that
//! make no sense in the current mode or base are dropped and reported as
//! [`Response::Ignored`], never as errors.

use std::fmt;

use calc_display::{bits, BitGrid, Panel, RadixReadout};
use calc_spec::{
    Base, BitWidth, CalcConfig, CalcError, DivisionPolicy, Input, Mode, Operator, UnaryOp,
    Value, DECIMAL_POINT, DEFAULT_DISPLAY,
};
use tracing::{debug, trace, warn};

use crate::evaluate;
use crate::history::{History, HistoryEntry};
use crate::state::{CalculatorState, Phase};

/// Outcome of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Applied,
    Ignored(IgnoreReason),
}

impl Response {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Response::Applied)
    }
}

/// Why an input was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Digit outside the active base's alphabet
    InvalidDigit,
    /// Entry would not fit the active bit width
    Overflow,
    /// Standard entry already has `max_digits` digits
    DigitLimit,
    /// Second decimal point
    DuplicatePoint,
    /// Operator or action not offered by the current mode
    UnavailableInMode,
    /// Bit index outside the active width
    BitOutOfRange,
    /// `=` with nothing pending and nothing to repeat
    NothingToRepeat,
    /// Selector already set
    Unchanged,
    /// An error is shown; only digits, AC and selectors are accepted
    ErrorLatched,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            IgnoreReason::InvalidDigit => "digit not valid in this base",
            IgnoreReason::Overflow => "entry exceeds bit width",
            IgnoreReason::DigitLimit => "digit limit reached",
            IgnoreReason::DuplicatePoint => "entry already has a decimal point",
            IgnoreReason::UnavailableInMode => "not available in this mode",
            IgnoreReason::BitOutOfRange => "bit index out of range",
            IgnoreReason::NothingToRepeat => "nothing to repeat",
            IgnoreReason::Unchanged => "already selected",
            IgnoreReason::ErrorLatched => "clear the error first",
        };
        write!(f, "{}", reason)
    }
}

/// Programmer / standard calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    config: CalcConfig,
    history: History,
}

impl Calculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(CalcConfig::DEFAULT)
    }

    /// Create a calculator from a validated configuration
    pub fn with_config(config: CalcConfig) -> Result<Self, CalcError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CalcConfig) -> Self {
        Self {
            state: CalculatorState::new(&config),
            history: History::new(config.history_limit),
            config,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Main display line
    pub fn display(&self) -> &str {
        &self.state.display_value
    }

    /// Value behind the display (zero if it does not parse)
    pub fn value(&self) -> Value {
        self.state.current_value()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.state.error.as_ref()
    }

    /// Dispatch one input
    pub fn handle(&mut self, input: Input) -> Response {
        trace!(%input, display = %self.state.display_value, "input");

        let response = match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::Operator(op) => self.choose_operator(op),
            Input::Unary(op) => self.apply_unary(op),
            Input::Equals => self.equals(),
            Input::Clear => self.clear(),
            Input::Delete => self.delete(),
            Input::SetMode(mode) => self.set_mode(mode),
            Input::SetBase(base) => self.set_base(base),
            Input::SetBitWidth(width) => self.set_bit_width(width),
            Input::ToggleBit(index) => self.toggle_bit(index),
        };

        if let Response::Ignored(reason) = response {
            debug!(%input, %reason, "input ignored");
        }
        response
    }

    /// Dispatch a sequence of inputs, returning how many were applied
    pub fn handle_all<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = Input>,
    {
        inputs
            .into_iter()
            .filter(|input| self.handle(*input).is_applied())
            .count()
    }

    // ========================================================================
    // Digit entry
    // ========================================================================

    pub fn input_digit(&mut self, digit: char) -> Response {
        let digit = digit.to_ascii_uppercase();
        let valid = match self.state.mode {
            Mode::Programmer => self.state.base.accepts(digit),
            Mode::Standard => digit.is_ascii_digit() || digit == DECIMAL_POINT,
        };
        if !valid {
            return Response::Ignored(IgnoreReason::InvalidDigit);
        }

        if self.state.error.is_some() {
            self.state.reset();
        }

        let fresh = self.state.starts_new_entry();
        let current = self.state.display_value.as_str();

        let candidate = if fresh {
            if digit == DECIMAL_POINT {
                format!("0{}", DECIMAL_POINT)
            } else {
                digit.to_string()
            }
        } else if digit == DECIMAL_POINT {
            if current.contains(DECIMAL_POINT) {
                return Response::Ignored(IgnoreReason::DuplicatePoint);
            }
            format!("{}{}", current, digit)
        } else if current == DEFAULT_DISPLAY {
            digit.to_string()
        } else {
            format!("{}{}", current, digit)
        };

        match self.state.mode {
            Mode::Programmer => {
                let fits = self
                    .state
                    .base
                    .parse(&candidate)
                    .and_then(|v| num_traits::ToPrimitive::to_u64(&v))
                    .map_or(false, |v| v <= self.state.bit_width.max_value());
                if !fits {
                    return Response::Ignored(IgnoreReason::Overflow);
                }
            }
            Mode::Standard => {
                let digits = candidate.chars().filter(|c| c.is_ascii_digit()).count();
                if digits > self.config.max_digits as usize {
                    return Response::Ignored(IgnoreReason::DigitLimit);
                }
            }
        }

        if fresh {
            if self.state.phase() == Phase::ResultShown {
                // A digit after `=` starts a new calculation
                self.state.first_operand = None;
                self.state.last_operation = None;
            }
            self.state.awaiting_second_operand = false;
            self.state.entry_committed = false;
        }
        self.state.display_value = candidate;
        Response::Applied
    }

    // ========================================================================
    // Operators
    // ========================================================================

    pub fn choose_operator(&mut self, op: Operator) -> Response {
        if !op.available_in(self.state.mode) {
            return Response::Ignored(IgnoreReason::UnavailableInMode);
        }
        if self.state.error.is_some() {
            return Response::Ignored(IgnoreReason::ErrorLatched);
        }

        if self.state.pending_operator.is_some() && self.state.awaiting_second_operand {
            debug!(from = ?self.state.pending_operator, to = %op, "operator override");
            self.state.pending_operator = Some(op);
            return Response::Applied;
        }

        let input = self.state.current_value();
        match (self.state.first_operand, self.state.pending_operator) {
            (Some(lhs), Some(pending)) => {
                let Some(result) = self.compute(pending, lhs, input) else {
                    return Response::Applied;
                };
                self.state.show(result);
                self.state.first_operand = Some(result);
            }
            _ => self.state.first_operand = Some(input),
        }

        self.state.pending_operator = Some(op);
        self.state.awaiting_second_operand = true;
        self.state.entry_committed = false;
        self.state.last_operation = None;
        Response::Applied
    }

    pub fn equals(&mut self) -> Response {
        if self.state.error.is_some() {
            return Response::Ignored(IgnoreReason::ErrorLatched);
        }

        let rhs = self.state.current_value();
        match (self.state.pending_operator, self.state.first_operand) {
            (Some(op), Some(lhs)) => {
                let Some(result) = self.compute(op, lhs, rhs) else {
                    return Response::Applied;
                };
                self.state.show(result);
                self.state.first_operand = Some(result);
                self.state.last_operation = Some((op, rhs));
            }
            _ => {
                // Repeat the last operation on whatever is shown
                let Some((op, operand)) = self.state.last_operation else {
                    return Response::Ignored(IgnoreReason::NothingToRepeat);
                };
                let Some(result) = self.compute(op, rhs, operand) else {
                    return Response::Applied;
                };
                self.state.show(result);
                self.state.first_operand = Some(result);
            }
        }

        self.state.pending_operator = None;
        self.state.awaiting_second_operand = false;
        self.state.entry_committed = true;
        Response::Applied
    }

    pub fn apply_unary(&mut self, op: UnaryOp) -> Response {
        if !op.available_in(self.state.mode) {
            return Response::Ignored(IgnoreReason::UnavailableInMode);
        }
        if self.state.error.is_some() {
            return Response::Ignored(IgnoreReason::ErrorLatched);
        }

        // A live Standard entry keeps being editable after a sign flip
        if op == UnaryOp::Negate
            && self.state.mode == Mode::Standard
            && !self.state.starts_new_entry()
        {
            let display = &self.state.display_value;
            if self.state.current_value().is_zero() && !display.contains(DECIMAL_POINT) {
                return Response::Applied;
            }
            self.state.display_value = match display.strip_prefix('-') {
                Some(rest) => rest.to_string(),
                None => format!("-{}", display),
            };
            return Response::Applied;
        }

        let value = self.state.current_value();
        match evaluate::apply_unary(op, value, self.state.bit_width) {
            Ok(result) => {
                debug!(%op, %value, %result, "unary");
                self.state.show(result);
            }
            Err(err) => {
                if self.fail(err).is_none() {
                    return Response::Applied;
                }
                self.state.show(Value::zero(self.state.mode));
            }
        }

        // The result is now the operand in play
        self.state.awaiting_second_operand = false;
        self.state.entry_committed = true;
        Response::Applied
    }

    /// Evaluate and log one binary operation, applying the division policy.
    ///
    /// Returns `None` when an error was latched and the state reset.
    fn compute(&mut self, op: Operator, lhs: Value, rhs: Value) -> Option<Value> {
        let result = match evaluate::apply_binary(op, lhs, rhs, self.state.bit_width) {
            Ok(result) => {
                debug!(%lhs, %op, %rhs, %result, "computed");
                result
            }
            Err(err) => self.fail(err)?,
        };

        let base = self.state.base;
        self.history.push(HistoryEntry {
            lhs: lhs.render(base),
            operator: op,
            rhs: rhs.render(base),
            result: result.render(base),
        });
        Some(result)
    }

    /// Handle an evaluation error according to the division policy
    fn fail(&mut self, err: CalcError) -> Option<Value> {
        warn!(%err, policy = %self.config.division_policy, "evaluation failed");
        match self.config.division_policy {
            DivisionPolicy::Zero => Some(Value::zero(self.state.mode)),
            DivisionPolicy::Error => {
                self.state.reset();
                self.state.entry_committed = true;
                self.state.error = Some(err);
                None
            }
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// `AC`
    pub fn clear(&mut self) -> Response {
        self.state.reset();
        Response::Applied
    }

    /// `DEL`: drop the last character, falling back to `0`
    ///
    /// An exponent rendering is not a digit string, so it clears to `0`.
    pub fn delete(&mut self) -> Response {
        if self.state.error.is_some() {
            return Response::Ignored(IgnoreReason::ErrorLatched);
        }

        if self.state.shows_exponent() {
            self.state.display_value = DEFAULT_DISPLAY.to_string();
        } else {
            let display = &mut self.state.display_value;
            display.pop();
            if display.is_empty() || display.as_str() == "-" {
                *display = DEFAULT_DISPLAY.to_string();
            }
        }

        // Whatever is left is now the user's entry
        self.state.awaiting_second_operand = false;
        self.state.entry_committed = false;
        Response::Applied
    }

    // ========================================================================
    // Selectors
    // ========================================================================

    /// Switch mode; resets the calculation
    pub fn set_mode(&mut self, mode: Mode) -> Response {
        if self.state.mode == mode {
            return Response::Ignored(IgnoreReason::Unchanged);
        }
        self.state.mode = mode;
        self.state.reset();
        debug!(%mode, "mode switched");
        Response::Applied
    }

    /// Switch base, converting the shown value into the new alphabet
    pub fn set_base(&mut self, base: Base) -> Response {
        if self.state.base == base {
            return Response::Ignored(IgnoreReason::Unchanged);
        }

        let value = self.state.current_value();
        self.state.base = base;
        if self.state.mode == Mode::Programmer && self.state.error.is_none() {
            self.state.show(value);
        }
        debug!(%base, display = %self.state.display_value, "base switched");
        Response::Applied
    }

    /// Switch word size, masking the shown value and stored operands
    pub fn set_bit_width(&mut self, width: BitWidth) -> Response {
        if self.state.bit_width == width {
            return Response::Ignored(IgnoreReason::Unchanged);
        }

        let value = self.state.current_value();
        self.state.bit_width = width;
        if self.state.mode == Mode::Programmer {
            let mask = |v: Value| match v {
                Value::Int(word) => Value::Int(width.mask_u64(word)),
                other => other,
            };
            if self.state.error.is_none() {
                self.state.show(mask(value));
            }
            self.state.first_operand = self.state.first_operand.map(mask);
            self.state.last_operation = self
                .state
                .last_operation
                .map(|(op, operand)| (op, mask(operand)));
        }
        debug!(%width, display = %self.state.display_value, "bit width switched");
        Response::Applied
    }

    /// Flip bit `index` of the shown value
    pub fn toggle_bit(&mut self, index: u32) -> Response {
        if self.state.mode != Mode::Programmer {
            return Response::Ignored(IgnoreReason::UnavailableInMode);
        }
        if self.state.error.is_some() {
            return Response::Ignored(IgnoreReason::ErrorLatched);
        }

        let value = self.state.current_value().as_u64();
        match bits::toggle(value, index, self.state.bit_width) {
            Ok(toggled) => {
                self.state.show(Value::Int(toggled));
                self.state.awaiting_second_operand = false;
                Response::Applied
            }
            Err(_) => Response::Ignored(IgnoreReason::BitOutOfRange),
        }
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Four-base readout of the shown value
    pub fn readout(&self) -> RadixReadout {
        RadixReadout::new(self.value().as_u64(), self.state.bit_width)
    }

    /// Bit grid of the shown value
    pub fn bit_grid(&self) -> BitGrid {
        BitGrid::new(self.value().as_u64(), self.state.bit_width)
    }

    /// Full panel snapshot
    pub fn panel(&self) -> Panel {
        Panel::new(
            self.state.mode,
            self.state.base,
            self.state.bit_width,
            &self.state.display_value,
            &self.state.expression(),
            self.value().as_u64(),
            self.state.error.as_ref(),
        )
        .with_history(self.history.lines())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn programmer(base: Base, width: BitWidth) -> Calculator {
        let mut config = CalcConfig::DEFAULT;
        config.base = base;
        config.bit_width = width;
        Calculator::with_config(config).unwrap()
    }

    fn standard() -> Calculator {
        let mut config = CalcConfig::DEFAULT;
        config.mode = Mode::Standard;
        Calculator::with_config(config).unwrap()
    }

    fn type_digits(calc: &mut Calculator, digits: &str) {
        for d in digits.chars() {
            calc.handle(Input::Digit(d));
        }
    }

    #[test]
    fn test_digit_entry_collapses_leading_zero() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "007");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_invalid_digit_ignored() {
        let mut calc = programmer(Base::Bin, BitWidth::W8);
        assert_eq!(
            calc.handle(Input::Digit('2')),
            Response::Ignored(IgnoreReason::InvalidDigit)
        );
        assert_eq!(calc.display(), "0");
        calc.handle(Input::Digit('1'));
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_overflow_digit_ignored() {
        let mut calc = programmer(Base::Dec, BitWidth::W8);
        type_digits(&mut calc, "25");
        assert_eq!(
            calc.handle(Input::Digit('6')),
            Response::Ignored(IgnoreReason::Overflow)
        );
        assert!(calc.handle(Input::Digit('5')).is_applied());
        assert_eq!(calc.display(), "255");
    }

    #[test]
    fn test_point_rejected_in_programmer() {
        let mut calc = Calculator::new();
        assert_eq!(
            calc.handle(Input::Digit('.')),
            Response::Ignored(IgnoreReason::InvalidDigit)
        );
    }

    #[test]
    fn test_hex_xor_scenario() {
        let mut calc = programmer(Base::Hex, BitWidth::W8);
        type_digits(&mut calc, "FF");
        calc.handle(Input::Operator(Operator::Xor));
        assert_eq!(calc.state().expression(), "FF XOR");
        type_digits(&mut calc, "0F");
        calc.handle(Input::Equals);

        assert_eq!(calc.display(), "F0");
        let readout = calc.readout();
        assert_eq!(readout.dec, "240");
        assert_eq!(readout.bin, "11110000");
        assert_eq!(calc.phase(), Phase::ResultShown);
    }

    #[test]
    fn test_divide_by_zero_shows_zero() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "10");
        calc.handle(Input::Operator(Operator::Div));
        type_digits(&mut calc, "0");
        assert!(calc.handle(Input::Equals).is_applied());
        assert_eq!(calc.display(), "0");
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_divide_by_zero_error_policy() {
        let mut config = CalcConfig::DEFAULT;
        config.division_policy = DivisionPolicy::Error;
        let mut calc = Calculator::with_config(config).unwrap();
        type_digits(&mut calc, "10");
        calc.handle(Input::Operator(Operator::Mod));
        type_digits(&mut calc, "0");
        calc.handle(Input::Equals);

        assert_eq!(calc.error(), Some(&CalcError::DivisionByZero));
        assert_eq!(calc.panel().display, "ERR");
        assert_eq!(
            calc.handle(Input::Operator(Operator::Add)),
            Response::Ignored(IgnoreReason::ErrorLatched)
        );

        calc.handle(Input::Digit('4'));
        assert!(calc.error().is_none());
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn test_repeat_equals() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "5");
        calc.handle(Input::Operator(Operator::Add));
        type_digits(&mut calc, "3");
        calc.handle(Input::Equals);
        assert_eq!(calc.display(), "8");
        calc.handle(Input::Equals);
        assert_eq!(calc.display(), "11");
        calc.handle(Input::Equals);
        assert_eq!(calc.display(), "14");
    }

    #[test]
    fn test_equals_with_nothing_pending() {
        let mut calc = Calculator::new();
        assert_eq!(
            calc.handle(Input::Equals),
            Response::Ignored(IgnoreReason::NothingToRepeat)
        );
    }

    #[test]
    fn test_operator_override() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "6");
        calc.handle(Input::Operator(Operator::Add));
        calc.handle(Input::Operator(Operator::Mul));
        assert_eq!(calc.state().pending_operator, Some(Operator::Mul));
        assert_eq!(calc.state().first_operand, Some(Value::Int(6)));
        type_digits(&mut calc, "7");
        calc.handle(Input::Equals);
        assert_eq!(calc.display(), "42");
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_chained_operators_compute() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "2");
        calc.handle(Input::Operator(Operator::Add));
        type_digits(&mut calc, "3");
        calc.handle(Input::Operator(Operator::Mul));
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.phase(), Phase::OperatorPending);
        type_digits(&mut calc, "4");
        calc.handle(Input::Equals);
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_digit_after_result_starts_new_number() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "5");
        calc.handle(Input::Operator(Operator::Add));
        type_digits(&mut calc, "3");
        calc.handle(Input::Equals);
        type_digits(&mut calc, "9");
        assert_eq!(calc.display(), "9");
        assert_eq!(calc.phase(), Phase::Idle);
        assert_eq!(
            calc.handle(Input::Equals),
            Response::Ignored(IgnoreReason::NothingToRepeat)
        );
    }

    #[test]
    fn test_delete() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "7");
        calc.handle(Input::Delete);
        assert_eq!(calc.display(), "0");

        type_digits(&mut calc, "123");
        calc.handle(Input::Delete);
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn test_clear_keeps_selectors() {
        let mut calc = programmer(Base::Hex, BitWidth::W16);
        type_digits(&mut calc, "AB");
        calc.handle(Input::Operator(Operator::And));
        calc.handle(Input::Clear);
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.phase(), Phase::Idle);
        assert_eq!(calc.state().base, Base::Hex);
        assert_eq!(calc.state().bit_width, BitWidth::W16);
    }

    #[test]
    fn test_not_is_immediate() {
        let mut calc = programmer(Base::Hex, BitWidth::W8);
        type_digits(&mut calc, "F0");
        calc.handle(Input::Unary(UnaryOp::Not));
        assert_eq!(calc.display(), "F");
        assert_eq!(calc.phase(), Phase::Idle);
        type_digits(&mut calc, "1");
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_not_supplies_second_operand() {
        let mut calc = programmer(Base::Hex, BitWidth::W8);
        type_digits(&mut calc, "F");
        calc.handle(Input::Operator(Operator::Or));
        type_digits(&mut calc, "F");
        calc.handle(Input::Unary(UnaryOp::Not));
        assert_eq!(calc.display(), "F0");
        calc.handle(Input::Equals);
        assert_eq!(calc.display(), "FF");
    }

    #[test]
    fn test_base_switch_converts_display() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "9");
        calc.handle(Input::SetBase(Base::Bin));
        assert_eq!(calc.display(), "1001");
        calc.handle(Input::SetBase(Base::Hex));
        assert_eq!(calc.display(), "9");
        assert_eq!(
            calc.handle(Input::SetBase(Base::Hex)),
            Response::Ignored(IgnoreReason::Unchanged)
        );
    }

    #[test]
    fn test_bit_width_switch_masks() {
        let mut calc = programmer(Base::Hex, BitWidth::W16);
        type_digits(&mut calc, "1234");
        calc.handle(Input::SetBitWidth(BitWidth::W8));
        assert_eq!(calc.display(), "34");
        assert_eq!(calc.bit_grid().cells.len(), 8);
    }

    #[test]
    fn test_toggle_bit() {
        let mut calc = programmer(Base::Hex, BitWidth::W8);
        calc.handle(Input::ToggleBit(7));
        assert_eq!(calc.display(), "80");
        calc.handle(Input::ToggleBit(7));
        assert_eq!(calc.display(), "0");
        assert_eq!(
            calc.handle(Input::ToggleBit(8)),
            Response::Ignored(IgnoreReason::BitOutOfRange)
        );
    }

    #[test]
    fn test_mode_switch_resets() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "42");
        calc.handle(Input::Operator(Operator::Add));
        calc.handle(Input::SetMode(Mode::Standard));
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.phase(), Phase::Idle);
        assert_eq!(
            calc.handle(Input::SetMode(Mode::Standard)),
            Response::Ignored(IgnoreReason::Unchanged)
        );
    }

    #[test]
    fn test_standard_decimal_entry() {
        let mut calc = standard();
        type_digits(&mut calc, ".5");
        assert_eq!(calc.display(), "0.5");
        assert_eq!(
            calc.handle(Input::Digit('.')),
            Response::Ignored(IgnoreReason::DuplicatePoint)
        );
        calc.handle(Input::Operator(Operator::Mul));
        type_digits(&mut calc, "3");
        calc.handle(Input::Equals);
        assert_eq!(calc.display(), "1.5");
    }

    #[test]
    fn test_standard_rejects_programmer_operators() {
        let mut calc = standard();
        assert_eq!(
            calc.handle(Input::Operator(Operator::Xor)),
            Response::Ignored(IgnoreReason::UnavailableInMode)
        );
        assert_eq!(
            calc.handle(Input::Unary(UnaryOp::Not)),
            Response::Ignored(IgnoreReason::UnavailableInMode)
        );
        assert_eq!(
            calc.handle(Input::ToggleBit(0)),
            Response::Ignored(IgnoreReason::UnavailableInMode)
        );
    }

    #[test]
    fn test_standard_negate_and_percent() {
        let mut calc = standard();
        type_digits(&mut calc, "12");
        calc.handle(Input::Unary(UnaryOp::Negate));
        assert_eq!(calc.display(), "-12");
        type_digits(&mut calc, "5");
        assert_eq!(calc.display(), "-125");
        calc.handle(Input::Unary(UnaryOp::Percent));
        assert_eq!(calc.display(), "-1.25");
        for _ in 0..4 {
            calc.handle(Input::Delete);
        }
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_standard_digit_limit() {
        let mut config = CalcConfig::DEFAULT;
        config.mode = Mode::Standard;
        config.max_digits = 3;
        let mut calc = Calculator::with_config(config).unwrap();
        type_digits(&mut calc, "1.23");
        assert_eq!(
            calc.handle(Input::Digit('4')),
            Response::Ignored(IgnoreReason::DigitLimit)
        );
        assert_eq!(calc.display(), "1.23");
    }

    #[test]
    fn test_programmer_negate_is_twos_complement() {
        let mut calc = programmer(Base::Hex, BitWidth::W8);
        type_digits(&mut calc, "1");
        calc.handle(Input::Unary(UnaryOp::Negate));
        assert_eq!(calc.display(), "FF");
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = CalcConfig::DEFAULT;
        config.max_digits = 0;
        assert!(Calculator::with_config(config).is_err());
    }

    #[test]
    fn test_panel_snapshot() {
        let mut calc = programmer(Base::Hex, BitWidth::W8);
        type_digits(&mut calc, "A");
        calc.handle(Input::Operator(Operator::Add));
        let panel = calc.panel();
        assert_eq!(panel.expression, "A +");
        assert_eq!(panel.readout.unwrap().dec, "10");
    }
}
