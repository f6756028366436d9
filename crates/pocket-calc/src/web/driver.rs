//! Web driver
//!
//! Implements [`CalculatorDriver`] by clicking buttons in a mock DOM and
//! reading back what the page shows.

use super::calculator::WebCalculator;
use super::dom::MockDom;
use super::page::{ids, ACTIVE_OPERATOR_CLASS};
use crate::core::{CalcEvent, Operator};
use crate::driver::CalculatorDriver;

/// Web driver wrapping the calculator and its mock page
#[derive(Debug)]
pub struct WebDriver {
    calculator: WebCalculator,
    dom: MockDom,
}

impl Default for WebDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDriver {
    /// Creates a driver over a freshly built page
    #[must_use]
    pub fn new() -> Self {
        let calculator = WebCalculator::new();
        let dom = MockDom::with_root(calculator.page());
        Self { calculator, dom }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &WebCalculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Clicks the element with `id`, as a browser user would
    ///
    /// Returns `false` if no such element is on the page.
    pub fn click(&mut self, id: &str) -> bool {
        if !self.dom.click(id) {
            return false;
        }
        if self.calculator.handle_click(id).is_some() {
            self.calculator.render_into(&mut self.dom);
        }
        true
    }
}

impl CalculatorDriver for WebDriver {
    fn press(&mut self, event: CalcEvent) {
        let id = self
            .calculator
            .keypad()
            .position_of(event)
            .and_then(|index| self.calculator.keypad().get_button(index))
            .map(|button| button.id.clone());
        if let Some(id) = id {
            self.click(&id);
        }
    }

    fn display(&self) -> String {
        self.dom
            .get_element_text(ids::DISPLAY_PRIMARY)
            .unwrap_or_default()
            .to_string()
    }

    fn secondary(&self) -> Option<String> {
        self.dom
            .get_element_text(ids::DISPLAY_SECONDARY)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }

    fn active_operator(&self) -> Option<Operator> {
        self.calculator
            .keypad()
            .buttons()
            .filter(|button| {
                self.dom
                    .get_element(&button.id)
                    .is_some_and(|elem| elem.has_class(ACTIVE_OPERATOR_CLASS))
            })
            .find_map(|button| button.operator())
    }
}
