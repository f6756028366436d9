//! Pocket Calc - a four-function desk calculator
//!
//! The engine is a pure state machine over button events. Two front ends
//! draw the same keypad on top of it: a terminal UI (feature `tui`) and a
//! browser page (always compiled against an in-memory DOM; feature `wasm`
//! mounts it into a real document).
//!
//! Operators apply strictly left to right, with no precedence:
//! `2 + 3 × 4 =` shows `20`.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let state = ["1", "2", "+", "7", "="]
//!     .iter()
//!     .map(|label| label.parse::<CalcEvent>().unwrap())
//!     .fold(CalcState::new(), |state, event| transition(&state, event));
//!
//! assert_eq!(state.display(), "19");
//! assert_eq!(state.pending(), None);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front end, testable without a browser through [`web::MockDom`]
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::number::{format_number, format_result, parse_float};
    pub use crate::core::{
        transition, CalcError, CalcEvent, CalcResult, CalcState, Digit, Operator,
        PendingOperation,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
    pub use crate::view::DisplayView;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::web::{DomElement, MockDom, WebCalculator, WebDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn run(labels: &[&str]) -> CalcState {
        labels.iter().fold(CalcState::new(), |state, label| {
            transition(&state, label.parse().unwrap())
        })
    }

    #[test]
    fn test_prelude_imports() {
        let mut driver = EngineDriver::new();
        driver.press(CalcEvent::Digit(Digit::new(3).unwrap()));
        assert_eq!(driver.display(), "3");
    }

    #[test]
    fn test_no_precedence() {
        assert_eq!(run(&["2", "+", "3", "×", "4", "="]).display(), "20");
    }

    #[test]
    fn test_rounded_result() {
        assert_eq!(run(&["1", "÷", "3", "="]).display(), "0.33333333");
        assert_eq!(run(&["0", ".", "1", "+", "0", ".", "2", "="]).display(), "0.3");
    }

    #[test]
    fn test_number_helpers() {
        assert_eq!(format_result(parse_float("2.50000000001")), "2.5");
        assert_eq!(format_number(1e21), "1e+21");
    }

    #[test]
    fn test_keypad_and_view_agree() {
        let keypad = Keypad::new();
        let state = run(&["9", "÷"]);
        let view = DisplayView::from_state(&state);
        let active = keypad
            .buttons()
            .filter(|b| b.operator() == view.active_operator)
            .map(|b| b.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(active, vec!["btn-divide"]);
    }
}
