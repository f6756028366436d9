//! Terminal front end
//!
//! A centered panel with the display box above a clickable keypad.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{AppLayout, CalculatorApp, DISPLAY_HEIGHT, PANEL_HEIGHT, PANEL_WIDTH};
pub use input::{AppAction, InputHandler};
pub use keypad::{KeypadGeometry, KeypadWidget};
pub use ui::{render, CalculatorUI, APP_TITLE, QUIT_HINT};
