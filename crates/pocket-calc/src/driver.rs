//! Unified calculator driver
//!
//! The same scenario runs against every front end: the engine on its own,
//! the terminal UI (clicks routed through keypad hit-testing) and the browser
//! page (clicks routed through the DOM).

use crate::core::{transition, CalcEvent, CalcResult, CalcState, Operator};
use crate::view::DisplayView;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_labels(&["5", "+", "3", "="]).unwrap();
/// assert_eq!(driver.display(), "8");
/// ```
pub trait CalculatorDriver {
    /// Activates the button that sends `event`
    fn press(&mut self, event: CalcEvent);

    /// Main display text as the front end shows it
    fn display(&self) -> String;

    /// Secondary display line, if shown
    fn secondary(&self) -> Option<String>;

    /// Operator drawn as selected, if any
    fn active_operator(&self) -> Option<Operator>;

    /// Presses the button with the given label
    fn press_label(&mut self, label: &str) -> CalcResult<()> {
        let event = label.parse()?;
        self.press(event);
        Ok(())
    }

    /// Presses several buttons in order, stopping at the first unknown label
    fn press_labels(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press_label(label))
    }
}

/// Driver over the bare engine, with no rendering involved
#[derive(Debug, Default, Clone)]
pub struct EngineDriver {
    state: CalcState,
}

impl EngineDriver {
    /// Creates a driver on a fresh state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the current view
    #[must_use]
    pub fn view(&self) -> DisplayView {
        DisplayView::from_state(&self.state)
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, event: CalcEvent) {
        self.state = transition(&self.state, event);
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn secondary(&self) -> Option<String> {
        self.view().secondary
    }

    fn active_operator(&self) -> Option<Operator> {
        self.state.operation()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::{CalcEvent, CalculatorDriver, Operator};
    use crate::tui::{CalculatorApp, KeypadGeometry};

    /// Terminal size the driver pretends to have
    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 24,
    };

    /// Drives the terminal app by clicking keypad cells
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: CalcEvent) {
            let keypad_area = CalculatorApp::layout(SCREEN).keypad;
            let target = self
                .app
                .keypad()
                .position_of(event)
                .and_then(|index| self.app.keypad().button_center(keypad_area, index));
            if let Some((column, row)) = target {
                self.app.click(SCREEN, column, row);
                self.app.release();
            }
        }

        fn display(&self) -> String {
            self.app.view().primary
        }

        fn secondary(&self) -> Option<String> {
            self.app.view().secondary
        }

        fn active_operator(&self) -> Option<Operator> {
            self.app.view().active_operator
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// These run against ANY CalculatorDriver implementation and panic on the
// first mismatch, like `assert!`.

/// Digits concatenate, and the four operators resolve on equals
#[allow(clippy::unwrap_used)]
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "1", "2", "3"]).unwrap();
    assert_eq!(driver.display(), "123");

    driver.press_labels(&["AC", "5", "+", "3", "="]).unwrap();
    assert_eq!(driver.display(), "8");

    driver.press_labels(&["AC", "1", "0", "-", "4", "="]).unwrap();
    assert_eq!(driver.display(), "6");

    driver.press_labels(&["AC", "6", "×", "7", "="]).unwrap();
    assert_eq!(driver.display(), "42");

    driver.press_labels(&["AC", "2", "0", "÷", "8", "="]).unwrap();
    assert_eq!(driver.display(), "2.5");
}

/// Operators apply immediately, left to right
#[allow(clippy::unwrap_used)]
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "2", "+", "3", "×"]).unwrap();
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.secondary().as_deref(), Some("5 ×"));
    assert_eq!(driver.active_operator(), Some(Operator::Multiply));

    driver.press_labels(&["4", "="]).unwrap();
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.secondary(), None);
    assert_eq!(driver.active_operator(), None);
}

/// Decimal point, backspace and sign toggle edit the current entry
#[allow(clippy::unwrap_used)]
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "1", ".", ".", "2"]).unwrap();
    assert_eq!(driver.display(), "1.2");

    driver.press_labels(&["AC", "1", "2", "3", "⌫"]).unwrap();
    assert_eq!(driver.display(), "12");

    driver.press_labels(&["AC", "5", "+/-"]).unwrap();
    assert_eq!(driver.display(), "-5");
    driver.press_labels(&["⌫"]).unwrap();
    assert_eq!(driver.display(), "0");

    driver.press_labels(&["AC", "+/-"]).unwrap();
    assert_eq!(driver.display(), "0");
    driver.press_labels(&["7", "+/-"]).unwrap();
    assert_eq!(driver.display(), "-7");
    driver.press_labels(&["+/-"]).unwrap();
    assert_eq!(driver.display(), "7");

    driver.press_labels(&["AC", "5", "%"]).unwrap();
    assert_eq!(driver.display(), "0.05");
}

/// Division by zero shows a non-finite value rather than failing
#[allow(clippy::unwrap_used)]
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "5", "÷", "0", "="]).unwrap();
    assert_eq!(driver.display(), "Infinity");

    driver.press_labels(&["AC", "0", "÷", "0", "="]).unwrap();
    assert_eq!(driver.display(), "NaN");
}

/// Clear always returns to the initial display
#[allow(clippy::unwrap_used)]
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["9", "×", "9", "AC"]).unwrap();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.secondary(), None);
    assert_eq!(driver.active_operator(), None);
}

/// Runs every shared scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_to_right_chaining(driver);
    verify_entry_editing(driver);
    verify_division_by_zero(driver);
    verify_clear(driver);
}
