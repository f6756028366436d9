//! Browser bindings
//!
//! Mounts the host page into `document.body` and routes button clicks back
//! into a [`WebCalculator`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event};

use super::calculator::WebCalculator;
use super::dom::{DomElement, DomSink};
use super::page::ids;
use crate::core::CalcEvent;

impl DomSink for Document {
    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.get_element_by_id(id) {
            elem.set_text_content(Some(text));
        }
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) {
        if let Some(elem) = self.get_element_by_id(id) {
            // Only fails for class names containing whitespace
            let _ = elem.class_list().toggle_with_force(class, enabled);
        }
    }
}

/// Creates the real element tree for `node`
fn create_element(document: &Document, node: &DomElement) -> Result<Element, JsValue> {
    let elem = document.create_element(&node.tag)?;
    if !node.id.is_empty() {
        elem.set_id(&node.id);
    }
    for class in &node.classes {
        elem.class_list().add_1(class)?;
    }
    for (key, value) in &node.attributes {
        elem.set_attribute(key, value)?;
    }
    if !node.text_content.is_empty() {
        elem.set_text_content(Some(&node.text_content));
    }
    for child in &node.children {
        elem.append_child(&create_element(document, child)?)?;
    }
    Ok(elem)
}

/// Scriptable handle on a calculator, for pages that drive it from JS
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WebCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator showing "0"
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses the button with `label`, returning the new display
    pub fn press(&mut self, label: &str) -> Result<String, JsError> {
        let event: CalcEvent = label.parse()?;
        let id = self.button_id(event)?;
        self.inner.handle_click(&id);
        Ok(self.display())
    }

    /// Main display text
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.inner.view().primary
    }

    /// Secondary display text, empty when nothing is pending
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn secondary(&self) -> String {
        self.inner.view().secondary_text().to_string()
    }
}

impl BrowserCalculator {
    fn button_id(&self, event: CalcEvent) -> Result<String, JsError> {
        self.inner
            .keypad()
            .position_of(event)
            .and_then(|index| self.inner.keypad().get_button(index))
            .map(|b| b.id.clone())
            .ok_or_else(|| JsError::new("no button for event"))
    }
}

/// Mounts the calculator page when the module loads
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let calculator = WebCalculator::new();
    body.append_child(&create_element(&document, &calculator.page())?)?;

    let keypad = document
        .get_element_by_id(ids::KEYPAD)
        .ok_or_else(|| JsValue::from_str("keypad missing after mount"))?;

    let calculator = Rc::new(RefCell::new(calculator));
    let mut sink = document.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let button = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("button").ok().flatten());
        let Some(button) = button else {
            return;
        };

        let mut calculator = calculator.borrow_mut();
        if calculator.handle_click(&button.id()).is_some() {
            calculator.render_into(&mut sink);
        }
    });
    keypad.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    on_click.forget();

    console::log_1(&"Calculator mounted".into());
    Ok(())
}
