//! Calculator state and its event reducers
//!
//! The state is a plain value. Each reducer consumes it and returns the next
//! state, which keeps every transition a pure function of `(state, event)`.

use serde::{Deserialize, Serialize};

use crate::core::number::{format_number, format_result, parse_float};
use crate::core::{CalcEvent, Digit, Operator};

/// Display text after construction or clear
const INITIAL_DISPLAY: &str = "0";

/// An operator waiting for its right-hand operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Left-hand operand, as it was shown on the display
    pub operand: String,
    /// The selected operator
    pub operator: Operator,
}

impl PendingOperation {
    /// Creates a pending operation
    #[must_use]
    pub fn new(operand: impl Into<String>, operator: Operator) -> Self {
        Self {
            operand: operand.into(),
            operator,
        }
    }

    /// Resolves the operation against the right-hand display text
    #[must_use]
    pub fn resolve(&self, rhs: &str) -> String {
        let lhs = parse_float(&self.operand);
        let rhs = parse_float(rhs);
        format_result(self.operator.apply(lhs, rhs))
    }
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcState {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_new_entry: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Creates the initial state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            awaiting_new_entry: false,
        }
    }

    /// Text currently shown on the main display line
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Operand captured before the pending operator
    #[must_use]
    pub fn previous_value(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    /// The pending operator
    #[must_use]
    pub fn operation(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Whether the next digit starts a fresh number
    #[must_use]
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Numeric value of the display
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_float(&self.display)
    }

    /// Applies one event and returns the next state
    #[must_use]
    pub fn apply(self, event: CalcEvent) -> Self {
        match event {
            CalcEvent::Digit(d) => self.digit(d),
            CalcEvent::DecimalPoint => self.decimal_point(),
            CalcEvent::Operator(op) => self.operator(op),
            CalcEvent::Equals => self.equals(),
            CalcEvent::Clear => self.clear(),
            CalcEvent::Backspace => self.backspace(),
            CalcEvent::ToggleSign => self.toggle_sign(),
            CalcEvent::Percent => self.percent(),
        }
    }

    /// Enters a digit, replacing a lone `0` or a finished value
    #[must_use]
    pub fn digit(mut self, d: Digit) -> Self {
        if self.display == INITIAL_DISPLAY || self.awaiting_new_entry {
            self.display = d.to_string();
            self.awaiting_new_entry = false;
        } else {
            self.display.push(d.as_char());
        }
        self
    }

    /// Starts the fractional part; a second point in one number is ignored
    #[must_use]
    pub fn decimal_point(mut self) -> Self {
        if self.awaiting_new_entry {
            self.display = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Selects an operator, first resolving any pending one.
    ///
    /// Operators chain strictly left to right: `2 + 3 × 4` is `(2 + 3) × 4`.
    #[must_use]
    pub fn operator(mut self, op: Operator) -> Self {
        let operand = match self.pending.take() {
            Some(pending) if !self.awaiting_new_entry => {
                let result = pending.resolve(&self.display);
                self.display.clone_from(&result);
                result
            }
            _ => self.display.clone(),
        };
        self.pending = Some(PendingOperation::new(operand, op));
        self.awaiting_new_entry = true;
        self
    }

    /// Resolves the pending operation; no-op when nothing is pending
    #[must_use]
    pub fn equals(mut self) -> Self {
        if let Some(pending) = self.pending.take() {
            self.display = pending.resolve(&self.display);
            self.awaiting_new_entry = true;
        }
        self
    }

    /// Resets to the initial state
    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Removes the last character; a single digit (signed or not) becomes `0`
    #[must_use]
    pub fn backspace(mut self) -> Self {
        let mut chars = self.display.chars();
        let single = match (chars.next(), chars.next(), chars.next()) {
            (Some(_), None, _) => true,
            (Some('-'), Some(_), None) => true,
            _ => false,
        };
        if single {
            self.display = INITIAL_DISPLAY.to_string();
        } else {
            self.display.pop();
        }
        self
    }

    /// Flips the sign of the display; `0` stays unsigned
    #[must_use]
    pub fn toggle_sign(mut self) -> Self {
        if self.display != INITIAL_DISPLAY {
            self.display = match self.display.strip_prefix('-') {
                Some(unsigned) => unsigned.to_string(),
                None => format!("-{}", self.display),
            };
        }
        self
    }

    /// Divides the display by 100
    #[must_use]
    pub fn percent(mut self) -> Self {
        self.display = format_number(parse_float(&self.display) / 100.0);
        self
    }
}

/// Pure transition function: the state after `event` is applied to `state`
#[must_use]
pub fn transition(state: &CalcState, event: CalcEvent) -> CalcState {
    let next = state.clone().apply(event);
    tracing::trace!(
        %event,
        display = next.display(),
        pending = ?next.operation(),
        awaiting = next.awaiting_new_entry(),
        "transition"
    );
    next
}
