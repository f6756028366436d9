//! In-memory DOM
//!
//! Lets the browser page be built, clicked and inspected without a browser.
//! The browser front end mounts the same element tree into the real document.

use std::collections::BTreeMap;

/// A DOM element and its subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID (empty when unset)
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: BTreeMap<String, String>,
    /// CSS classes in insertion order
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Appends a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child elements
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = DomElement>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Finds an element by ID in this subtree, depth first
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Finds an element by ID in this subtree for mutation
    pub fn find_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Collects every element in this subtree with the given tag
    #[must_use]
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&DomElement> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a DomElement>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_tag(tag, found);
        }
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Write side of a document: what rendering needs from it
pub trait DomSink {
    /// Replaces the text of the element with `id`
    fn set_text(&mut self, id: &str, text: &str);

    /// Adds or removes `class` on the element with `id`
    fn set_class(&mut self, id: &str, class: &str, enabled: bool);
}

/// Mock DOM for testing the browser page without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(DomElement::new("body"))
    }

    /// Creates a mock DOM over an existing tree
    #[must_use]
    pub fn with_root(root: DomElement) -> Self {
        Self {
            root,
            event_history: Vec::new(),
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.root.find(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.root.find_mut(id)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// Dispatches an event
    ///
    /// Returns `false` when the target element does not exist.
    pub fn dispatch_event(&mut self, event: DomEvent) -> bool {
        let exists = match &event {
            DomEvent::Click { element_id } => self.get_element(element_id).is_some(),
        };
        self.event_history.push(event);
        exists
    }

    /// Clicks the element with `id`
    pub fn click(&mut self, id: &str) -> bool {
        self.dispatch_event(DomEvent::click(id))
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}

impl DomSink for MockDom {
    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.get_element_mut(id) {
            elem.set_text(text);
        }
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) {
        if let Some(elem) = self.get_element_mut(id) {
            elem.toggle_class(class, enabled);
        }
    }
}
