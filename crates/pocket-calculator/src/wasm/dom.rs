//! Mock DOM for WASM Testing
//!
//! This module provides DOM abstractions that let the browser front end be
//! exercised without a browser or web-sys.
//!
//! Probar: Visual feedback - Visual management through observable DOM state

use std::collections::HashMap;

use super::keypad::WasmKeypad;

/// ID of the element holding the pending-operation preview
pub const PREVIEW_ID: &str = "calc-preview";

/// ID of the element holding the display
pub const DISPLAY_ID: &str = "calc-display";

/// ID of the keypad container
pub const KEYPAD_ID: &str = "calc-keypad";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// ID of the parent element, if attached
    pub parent: Option<String>,
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
            attributes: HashMap::new(),
            classes: Vec::new(),
            parent: None,
        }
    }

    /// Creates an element with an ID
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

    /// Sets the parent element ID
    #[must_use]
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        if self.text_content != text {
            self.text_content = text.to_string();
        }
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
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
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Keydown event on the document
    KeyDown {
        /// The `KeyboardEvent.key` value
        key: String,
        /// Whether Ctrl was held
        ctrl: bool,
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

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            ctrl: false,
        }
    }

    /// Creates a keydown event with Ctrl held
    #[must_use]
    pub fn key_down_with_ctrl(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            ctrl: true,
        }
    }
}

/// Mock DOM for testing the WASM calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator DOM: preview, display and keypad
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id("calculator")
                .with_class("calculator-app"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(PREVIEW_ID)
                .with_class("preview")
                .with_parent("calculator"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("display")
                .with_text("0")
                .with_parent("calculator"),
        );

        let keypad = WasmKeypad::new();
        dom.register_element(keypad.create_keypad_element().with_parent("calculator"));
        for button in keypad.create_dom_elements() {
            dom.register_element(button);
        }

        dom
    }

    /// Registers an element for ID lookup; elements without an ID are ignored
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Returns the number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Returns the IDs of an element's children, sorted
    #[must_use]
    pub fn children_of(&self, parent_id: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .elements
            .values()
            .filter(|e| e.parent.as_deref() == Some(parent_id))
            .map(|e| e.id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Records an event; handlers live with the calculator
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
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

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Removes `class` from every element
    pub fn remove_class_everywhere(&mut self, class: &str) {
        for elem in self.elements.values_mut() {
            elem.remove_class(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_builder() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("keypad-btn")
            .with_attr("data-row", "2")
            .with_parent(KEYPAD_ID);

        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("keypad-btn"));
        assert_eq!(elem.get_attr("data-row"), Some("2"));
        assert_eq!(elem.get_attr("missing"), None);
        assert_eq!(elem.parent.as_deref(), Some(KEYPAD_ID));
    }

    #[test]
    fn test_dom_element_default() {
        let elem = DomElement::default();
        assert_eq!(elem.tag, "div");
        assert!(elem.id.is_empty());
    }

    #[test]
    fn test_dom_element_classes() {
        let mut elem = DomElement::new("div");
        elem.add_class("active");
        elem.add_class("active");
        assert_eq!(elem.classes.len(), 1);
        elem.remove_class("active");
        assert!(!elem.has_class("active"));
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-1"),
            DomEvent::Click {
                element_id: "btn-1".to_string()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown {
                key: "Enter".to_string(),
                ctrl: false
            }
        );
        assert!(matches!(
            DomEvent::key_down_with_ctrl("c"),
            DomEvent::KeyDown { ctrl: true, .. }
        ));
    }

    // ===== MockDom tests =====

    #[test]
    fn test_mock_dom_new_is_empty() {
        let dom = MockDom::new();
        assert_eq!(dom.element_count(), 0);
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_mock_dom_calculator_structure() {
        let dom = MockDom::calculator();
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("0"));
        assert_eq!(dom.get_element_text(PREVIEW_ID), Some(""));
        // root + preview + display + keypad container + 21 buttons
        assert_eq!(dom.element_count(), 25);
        assert_eq!(dom.children_of(KEYPAD_ID).len(), 21);
        assert_eq!(
            dom.children_of("calculator"),
            vec![DISPLAY_ID, KEYPAD_ID, PREVIEW_ID]
        );
    }

    #[test]
    fn test_register_element_without_id_is_ignored() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span"));
        assert_eq!(dom.element_count(), 0);
    }

    #[test]
    fn test_set_and_get_text() {
        let mut dom = MockDom::calculator();
        dom.set_element_text(DISPLAY_ID, "42");
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("42"));
        dom.set_element_text("missing", "x");
        assert_eq!(dom.get_element_text("missing"), None);
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::calculator();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_down("+"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_remove_class_everywhere() {
        let mut dom = MockDom::calculator();
        for id in ["btn-1", "btn-2"] {
            dom.get_element_mut(id).unwrap().add_class("active");
        }
        dom.remove_class_everywhere("active");
        assert!(!dom.get_element("btn-1").unwrap().has_class("active"));
        assert!(!dom.get_element("btn-2").unwrap().has_class("active"));
    }
}
