//! Browser calculator: engine state behind the host page

use super::dom::{DomElement, DomSink};
use super::page::{build_page, ids, ACTIVE_OPERATOR_CLASS};
use crate::core::{transition, CalcEvent, CalcState};
use crate::keypad::Keypad;
use crate::view::DisplayView;

/// Calculator state plus the keypad its page was built from
#[derive(Debug, Clone, Default)]
pub struct WebCalculator {
    state: CalcState,
    keypad: Keypad,
}

impl WebCalculator {
    /// Creates a calculator showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the current view
    #[must_use]
    pub fn view(&self) -> DisplayView {
        DisplayView::from_state(&self.state)
    }

    /// Builds the host page for this calculator
    #[must_use]
    pub fn page(&self) -> DomElement {
        build_page(&self.keypad)
    }

    /// Handles a click on the element with `button_id`
    ///
    /// Returns the event applied, or `None` if the id is not a keypad button.
    pub fn handle_click(&mut self, button_id: &str) -> Option<CalcEvent> {
        let Some(event) = self.keypad.find_by_id(button_id).map(|b| b.event) else {
            tracing::debug!(button_id, "click on non-button element");
            return None;
        };
        self.state = transition(&self.state, event);
        Some(event)
    }

    /// Writes the display lines and operator highlight into `sink`
    pub fn render_into<S: DomSink + ?Sized>(&self, sink: &mut S) {
        let view = self.view();
        sink.set_text(ids::DISPLAY_PRIMARY, &view.primary);
        sink.set_text(ids::DISPLAY_SECONDARY, view.secondary_text());

        for button in self.keypad.buttons() {
            if let Some(op) = button.operator() {
                sink.set_class(
                    &button.id,
                    ACTIVE_OPERATOR_CLASS,
                    view.active_operator == Some(op),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crate::web::dom::MockDom;

    fn click_all(calc: &mut WebCalculator, ids: &[&str]) {
        for id in ids {
            assert!(calc.handle_click(id).is_some(), "{id} is not a button");
        }
    }

    #[test]
    fn test_new_calculator() {
        let calc = WebCalculator::new();
        assert_eq!(calc.view().primary, "0");
        assert_eq!(calc.keypad().button_count(), 20);
    }

    #[test]
    fn test_handle_click_applies_event() {
        let mut calc = WebCalculator::new();
        assert_eq!(
            calc.handle_click("btn-plus"),
            Some(CalcEvent::Operator(Operator::Add))
        );
        click_all(&mut calc, &["btn-4", "btn-equals"]);
        assert_eq!(calc.state().display(), "4");
    }

    #[test]
    fn test_handle_click_unknown_id() {
        let mut calc = WebCalculator::new();
        assert_eq!(calc.handle_click("display-primary"), None);
        assert_eq!(calc.handle_click(""), None);
        assert_eq!(calc.state(), &CalcState::new());
    }

    #[test]
    fn test_render_into_display() {
        let mut calc = WebCalculator::new();
        let mut dom = MockDom::with_root(calc.page());
        click_all(&mut calc, &["btn-1", "btn-2", "btn-times", "btn-3"]);
        calc.render_into(&mut dom);

        assert_eq!(dom.get_element_text(ids::DISPLAY_PRIMARY), Some("3"));
        assert_eq!(dom.get_element_text(ids::DISPLAY_SECONDARY), Some("12 ×"));
    }

    #[test]
    fn test_render_into_highlights_one_operator() {
        let mut calc = WebCalculator::new();
        let mut dom = MockDom::with_root(calc.page());
        click_all(&mut calc, &["btn-1", "btn-minus"]);
        calc.render_into(&mut dom);

        let active: Vec<&str> = Operator::ALL
            .iter()
            .map(|op| format!("btn-{}", op.name()))
            .filter(|id| dom.get_element(id).unwrap().has_class(ACTIVE_OPERATOR_CLASS))
            .map(|id| calc.keypad().find_by_id(&id).unwrap().label.as_str())
            .collect();
        assert_eq!(active, vec!["-"]);

        click_all(&mut calc, &["btn-2", "btn-equals"]);
        calc.render_into(&mut dom);
        assert!(!dom
            .get_element("btn-minus")
            .unwrap()
            .has_class(ACTIVE_OPERATOR_CLASS));
        assert_eq!(dom.get_element_text(ids::DISPLAY_SECONDARY), Some(""));
    }

    #[test]
    fn test_page_matches_keypad() {
        let calc = WebCalculator::new();
        let page = calc.page();
        for button in calc.keypad().buttons() {
            assert!(page.find(&button.id).is_some(), "missing {}", button.id);
        }
    }
}
