//! Calculator state

use calc_spec::{
    is_exponent_form, Base, BitWidth, CalcConfig, CalcError, Mode, Operator, Value,
    DEFAULT_DISPLAY,
};

/// Calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Shown operand, in the active base's alphabet; never empty
    pub display_value: String,

    pub mode: Mode,

    /// Entry and display base (Programmer mode)
    pub base: Base,

    /// Mask applied to every Programmer result
    pub bit_width: BitWidth,

    /// Left-hand operand of the pending operation
    pub first_operand: Option<Value>,

    pub pending_operator: Option<Operator>,

    /// Operator chosen, no second operand typed yet
    pub awaiting_second_operand: bool,

    /// Display shows a computed value; the next digit starts a new number
    pub entry_committed: bool,

    /// Operator and right operand of the last `=`, for repeated `=`
    pub last_operation: Option<(Operator, Value)>,

    /// Latched evaluation error
    pub error: Option<CalcError>,
}

/// Where the calculator is in an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pending operator
    Idle,
    /// Operator chosen
    OperatorPending,
    /// Result of `=` on display
    ResultShown,
}

impl CalculatorState {
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            display_value: DEFAULT_DISPLAY.to_string(),
            mode: config.mode,
            base: config.base,
            bit_width: config.bit_width,
            first_operand: None,
            pending_operator: None,
            awaiting_second_operand: false,
            entry_committed: false,
            last_operation: None,
            error: None,
        }
    }

    /// Current phase, derived from the operand fields
    pub fn phase(&self) -> Phase {
        match (self.pending_operator, self.first_operand) {
            (Some(_), _) => Phase::OperatorPending,
            (None, Some(_)) => Phase::ResultShown,
            (None, None) => Phase::Idle,
        }
    }

    /// Reset the calculation, keeping the mode, base and width selectors
    pub fn reset(&mut self) {
        self.display_value = DEFAULT_DISPLAY.to_string();
        self.first_operand = None;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.entry_committed = false;
        self.last_operation = None;
        self.error = None;
    }

    /// Whether the next digit replaces the display instead of appending
    #[inline]
    pub fn starts_new_entry(&self) -> bool {
        self.awaiting_second_operand || self.entry_committed || self.shows_exponent()
    }

    /// Standard-mode display holds an exponent rendering, which is never edited in place
    #[inline]
    pub fn shows_exponent(&self) -> bool {
        self.mode == Mode::Standard && is_exponent_form(&self.display_value)
    }

    /// Parse the display; anything unparseable reads as zero
    pub fn current_value(&self) -> Value {
        match self.mode {
            Mode::Programmer => Value::Int(
                self.base
                    .parse(&self.display_value)
                    .map(|v| self.bit_width.mask(&v))
                    .unwrap_or(0),
            ),
            Mode::Standard => Value::Real(
                self.display_value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .unwrap_or(0.0),
            ),
        }
    }

    /// Render `value` into the display
    pub fn show(&mut self, value: Value) {
        self.display_value = value.render(self.base);
    }

    /// Expression line: `"<first> <op>"` while an operator is pending
    pub fn expression(&self) -> String {
        match (self.first_operand, self.pending_operator) {
            (Some(first), Some(op)) => format!("{} {}", first.render(self.base), op),
            _ => String::new(),
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(&CalcConfig::DEFAULT)
    }
}
