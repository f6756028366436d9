//! Host page layout
//!
//! ```text
//! main#app
//! ├── style
//! ├── h1            "Calculator App"
//! └── div#calculator
//!     ├── div#display
//!     │   ├── div#display-secondary
//!     │   └── div#display-primary
//!     └── div#keypad
//!         └── button#btn-… × 20
//! ```

use super::dom::DomElement;
use crate::keypad::{Keypad, KeypadButton};

/// Page heading
pub const PAGE_TITLE: &str = "Calculator App";

/// Element ids the renderer writes to
pub mod ids {
    /// Page root
    pub const APP: &str = "app";
    /// Calculator widget
    pub const CALCULATOR: &str = "calculator";
    /// Display box
    pub const DISPLAY: &str = "display";
    /// Secondary display line
    pub const DISPLAY_SECONDARY: &str = "display-secondary";
    /// Main display line
    pub const DISPLAY_PRIMARY: &str = "display-primary";
    /// Button grid
    pub const KEYPAD: &str = "keypad";
}

/// Class toggled on the operator button of the pending operation
pub const ACTIVE_OPERATOR_CLASS: &str = "btn-operator-active";

/// Styles for the page: a dark card centered on a light background
pub const STYLESHEET: &str = "\
body { margin: 0; min-height: 100vh; display: flex; align-items: center; \
justify-content: center; background: #f3f4f6; font-family: system-ui, sans-serif; }
#app { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
#app h1 { margin: 0; font-size: 1.875rem; color: #1f2937; }
#calculator { width: 20rem; padding: 1.5rem; border-radius: 1.5rem; background: #111827; \
box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
#display { margin-bottom: 1.5rem; text-align: right; }
#display-secondary { min-height: 1.75rem; font-size: 1.125rem; color: #9ca3af; }
#display-primary { font-size: 3rem; font-weight: 300; color: #fff; overflow-x: auto; }
#keypad { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; }
#keypad button { height: 4rem; border: 0; border-radius: 9999px; font-size: 1.5rem; \
cursor: pointer; transition: filter 0.1s; }
#keypad button:active { filter: brightness(1.3); }
.btn-digit { background: #374151; color: #fff; }
.btn-function, .btn-clear { background: #9ca3af; color: #000; }
.btn-operator, .btn-equals { background: #f59e0b; color: #fff; }
.btn-operator.btn-operator-active { background: #fff; color: #f59e0b; }
";

/// Builds one keypad button element
fn button_element(button: &KeypadButton) -> DomElement {
    DomElement::new("button")
        .with_id(&button.id)
        .with_text(&button.label)
        .with_class(button.kind.css_class())
        .with_attr("type", "button")
        .with_attr("data-label", &button.label)
        .with_attr("data-row", &button.row.to_string())
        .with_attr("data-col", &button.col.to_string())
}

/// Builds the whole page for `keypad`, showing the initial display
#[must_use]
pub fn build_page(keypad: &Keypad) -> DomElement {
    let display = DomElement::new("div")
        .with_id(ids::DISPLAY)
        .with_child(DomElement::new("div").with_id(ids::DISPLAY_SECONDARY))
        .with_child(
            DomElement::new("div")
                .with_id(ids::DISPLAY_PRIMARY)
                .with_text("0"),
        );

    let (rows, cols) = keypad.dimensions();
    let grid = DomElement::new("div")
        .with_id(ids::KEYPAD)
        .with_attr("role", "group")
        .with_attr("data-rows", &rows.to_string())
        .with_attr("data-cols", &cols.to_string())
        .with_children(keypad.buttons().map(button_element));

    DomElement::new("main")
        .with_id(ids::APP)
        .with_child(DomElement::new("style").with_text(STYLESHEET))
        .with_child(DomElement::new("h1").with_text(PAGE_TITLE))
        .with_child(
            DomElement::new("div")
                .with_id(ids::CALCULATOR)
                .with_child(display)
                .with_child(grid),
        )
}
