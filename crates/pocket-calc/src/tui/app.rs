//! TUI application state
//!
//! Owns the engine state and maps mouse clicks to button events through the
//! same layout the renderer draws.

use ratatui::layout::{Constraint, Layout, Rect};

use super::input::AppAction;
use super::keypad::KeypadGeometry;
use crate::core::{transition, CalcEvent, CalcState};
use crate::keypad::Keypad;
use crate::view::DisplayView;

/// Width of the calculator panel, borders included
pub const PANEL_WIDTH: u16 = 34;
/// Height of the calculator panel, borders included
pub const PANEL_HEIGHT: u16 = 23;
/// Height of the display box, borders included
pub const DISPLAY_HEIGHT: u16 = 4;

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Outer titled panel
    pub panel: Rect,
    /// Display box (secondary and primary lines)
    pub display: Rect,
    /// Keypad grid, borders included
    pub keypad: Rect,
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    state: CalcState,
    keypad: Keypad,
    /// Button under a held mouse button
    pressed: Option<usize>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalcState::new(),
            keypad: Keypad::new(),
            pressed: None,
            should_quit: false,
        }
    }

    /// Computes where everything goes inside `area`
    ///
    /// The panel is centered and shrinks with small terminals.
    #[must_use]
    pub fn layout(area: Rect) -> AppLayout {
        let width = PANEL_WIDTH.min(area.width);
        let height = PANEL_HEIGHT.min(area.height);
        let panel = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };
        let inner = Rect {
            x: panel.x + 1,
            y: panel.y + 1,
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };

        let chunks = Layout::vertical([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
            .split(inner);

        AppLayout {
            panel,
            display: chunks[0],
            keypad: chunks[1],
        }
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

    /// Returns the view the display panel renders
    #[must_use]
    pub fn view(&self) -> DisplayView {
        DisplayView::from_state(&self.state)
    }

    /// Returns the index of the button currently held down
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds one event to the engine
    pub fn press(&mut self, event: CalcEvent) {
        self.state = transition(&self.state, event);
    }

    /// Handles a left click at (`column`, `row`) on a screen of size `area`
    ///
    /// Returns the event sent, or `None` if the click missed every button.
    pub fn click(&mut self, area: Rect, column: u16, row: u16) -> Option<CalcEvent> {
        let keypad_area = Self::layout(area).keypad;
        let Some(index) = self.keypad.hit_test(keypad_area, column, row) else {
            tracing::trace!(column, row, "click outside keypad");
            self.pressed = None;
            return None;
        };

        let event = self.keypad.get_button(index)?.event;
        self.pressed = Some(index);
        tracing::debug!(%event, index, "button clicked");
        self.press(event);
        Some(event)
    }

    /// Releases the held button
    pub fn release(&mut self) {
        self.pressed = None;
    }

    /// Applies an input action
    pub fn handle_action(&mut self, action: AppAction, area: Rect) {
        match action {
            AppAction::Click { column, row } => {
                self.click(area, column, row);
            }
            AppAction::Release => self.release(),
            AppAction::Quit => self.quit(),
            AppAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 24,
    };

    fn click_label(app: &mut CalculatorApp, label: &str) {
        let keypad_area = CalculatorApp::layout(SCREEN).keypad;
        let index = app
            .keypad()
            .position_of(label.parse().unwrap())
            .unwrap();
        let (column, row) = app.keypad().button_center(keypad_area, index).unwrap();
        app.click(SCREEN, column, row);
        app.release();
    }

    // ===== Layout tests =====

    #[test]
    fn test_layout_centered() {
        let layout = CalculatorApp::layout(SCREEN);
        assert_eq!(layout.panel, Rect::new(13, 0, 34, 23));
        assert_eq!(layout.display, Rect::new(14, 1, 32, 4));
        assert_eq!(layout.keypad, Rect::new(14, 5, 32, 17));
    }

    #[test]
    fn test_layout_small_screen() {
        let layout = CalculatorApp::layout(Rect::new(0, 0, 20, 10));
        assert_eq!(layout.panel, Rect::new(0, 0, 20, 10));
        assert!(layout.keypad.bottom() <= 10);
    }

    #[test]
    fn test_layout_offset_area() {
        let layout = CalculatorApp::layout(Rect::new(5, 3, 60, 24));
        assert_eq!(layout.panel.x, 18);
        assert_eq!(layout.panel.y, 3);
    }

    // ===== Click tests =====

    #[test]
    fn test_new_app() {
        let app = CalculatorApp::new();
        assert_eq!(app.view().primary, "0");
        assert_eq!(app.pressed(), None);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_click_digits() {
        let mut app = CalculatorApp::new();
        click_label(&mut app, "4");
        click_label(&mut app, "2");
        assert_eq!(app.state().display(), "42");
    }

    #[test]
    fn test_click_operation() {
        let mut app = CalculatorApp::new();
        for label in ["9", "÷", "3"] {
            click_label(&mut app, label);
        }
        assert_eq!(app.view().active_operator, Some(Operator::Divide));
        click_label(&mut app, "=");
        assert_eq!(app.view().primary, "3");
        assert_eq!(app.view().active_operator, None);
    }

    #[test]
    fn test_click_returns_event() {
        let mut app = CalculatorApp::new();
        let keypad_area = CalculatorApp::layout(SCREEN).keypad;
        let (column, row) = app.keypad().button_center(keypad_area, 0).unwrap();
        assert_eq!(app.click(SCREEN, column, row), Some(CalcEvent::Clear));
        assert_eq!(app.pressed(), Some(0));
        app.release();
        assert_eq!(app.pressed(), None);
    }

    #[test]
    fn test_click_outside_keypad() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.click(SCREEN, 0, 0), None);
        assert_eq!(app.state(), &CalcState::new());
    }

    #[test]
    fn test_click_on_display_ignored() {
        let mut app = CalculatorApp::new();
        let display = CalculatorApp::layout(SCREEN).display;
        assert_eq!(app.click(SCREEN, display.x + 5, display.y + 1), None);
    }

    // ===== Action tests =====

    #[test]
    fn test_handle_quit() {
        let mut app = CalculatorApp::new();
        app.handle_action(AppAction::Quit, SCREEN);
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_click_and_release() {
        let mut app = CalculatorApp::new();
        let keypad_area = CalculatorApp::layout(SCREEN).keypad;
        let index = app
            .keypad()
            .position_of("7".parse().unwrap())
            .unwrap();
        let (column, row) = app.keypad().button_center(keypad_area, index).unwrap();

        app.handle_action(AppAction::Click { column, row }, SCREEN);
        assert_eq!(app.state().display(), "7");
        assert_eq!(app.pressed(), Some(index));

        app.handle_action(AppAction::Release, SCREEN);
        assert_eq!(app.pressed(), None);
    }

    #[test]
    fn test_handle_none() {
        let mut app = CalculatorApp::new();
        app.handle_action(AppAction::None, SCREEN);
        assert_eq!(app.state(), &CalcState::new());
        assert!(!app.should_quit());
    }
}
