//! WASM Keypad for Calculator
//!
//! Probar: Visual feedback - Visual buttons for browser-based interaction
//!
//! Builds browser buttons from the same layout the TUI keypad draws, so
//! both front ends expose identical buttons and IDs.

use super::dom::{DomElement, KEYPAD_ID};
use crate::core::layout::{
    button_at, button_by_id, button_for_command, ButtonSpec, GRID_COLS, GRID_ROWS, KEYPAD_LAYOUT,
};
use crate::core::Command;

/// CSS class describing what kind of button this is
fn kind_class(command: Command) -> &'static str {
    match command {
        Command::Digit(_) | Command::Decimal => "keypad-digit",
        Command::Operator(_) => "keypad-operator",
        Command::Equals => "keypad-equals",
        Command::Clear | Command::SquareRoot | Command::Backspace => "keypad-function",
    }
}

/// Browser keypad
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmKeypad;

impl WasmKeypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        KEYPAD_LAYOUT.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (GRID_ROWS, GRID_COLS)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &'static [ButtonSpec] {
        &KEYPAD_LAYOUT
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&'static ButtonSpec> {
        button_at(row, col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&'static ButtonSpec> {
        button_by_id(id)
    }

    /// Finds the button that sends a command
    #[must_use]
    pub fn find_button_for(&self, command: Command) -> Option<&'static ButtonSpec> {
        button_for_command(command)
    }

    /// Creates DOM elements for all keypad buttons.
    ///
    /// Grid placement is carried as a CSS `grid-area` so spanning buttons
    /// render at their full size.
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        KEYPAD_LAYOUT
            .iter()
            .map(|btn| {
                let grid_area = format!(
                    "grid-area: {} / {} / span {} / span {}",
                    btn.row + 1,
                    btn.col + 1,
                    btn.row_span,
                    btn.col_span
                );
                DomElement::new("button")
                    .with_id(btn.id)
                    .with_text(btn.label)
                    .with_class("keypad-btn")
                    .with_class(kind_class(btn.command))
                    .with_attr("style", &grid_area)
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string())
                    .with_parent(KEYPAD_ID)
            })
            .collect()
    }

    /// Creates the keypad container element
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        DomElement::new("div")
            .with_id(KEYPAD_ID)
            .with_class("keypad")
            .with_attr(
                "style",
                &format!("display: grid; grid-template-columns: repeat({GRID_COLS}, 1fr)"),
            )
    }

    /// Processes a button click event and returns the command
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Command> {
        self.find_button_by_id(element_id).map(|btn| btn.command)
    }

    /// Maps a `KeyboardEvent.key` value to a command
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<Command> {
        Command::from_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    // ===== Layout tests =====

    #[test]
    fn test_wasm_keypad_new() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.button_count(), 21);
        assert_eq!(keypad.dimensions(), (6, 4));
        assert_eq!(keypad.buttons().len(), 21);
    }

    #[test]
    fn test_get_button_at() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.get_button_at(1, 0).map(|b| b.id), Some("btn-divide"));
        assert_eq!(keypad.get_button_at(4, 3).map(|b| b.id), Some("btn-equals"));
        assert!(keypad.get_button_at(5, 3).is_none());
    }

    #[test]
    fn test_find_button_for() {
        let keypad = WasmKeypad::new();
        let btn = keypad
            .find_button_for(Command::Operator(Operator::Power))
            .unwrap();
        assert_eq!(btn.id, "btn-power");
        assert!(keypad.find_button_for(Command::Backspace).is_none());
    }

    // ===== DOM tests =====

    #[test]
    fn test_create_dom_elements() {
        let elements = WasmKeypad::new().create_dom_elements();
        assert_eq!(elements.len(), 21);
        for elem in &elements {
            assert_eq!(elem.tag, "button");
            assert!(elem.has_class("keypad-btn"));
            assert_eq!(elem.parent.as_deref(), Some(KEYPAD_ID));
        }
    }

    #[test]
    fn test_dom_elements_carry_spans() {
        let elements = WasmKeypad::new().create_dom_elements();
        let equals = elements.iter().find(|e| e.id == "btn-equals").unwrap();
        assert_eq!(
            equals.get_attr("style"),
            Some("grid-area: 4 / 4 / span 2 / span 1")
        );
        assert!(equals.has_class("keypad-equals"));

        let zero = elements.iter().find(|e| e.id == "btn-0").unwrap();
        assert_eq!(
            zero.get_attr("style"),
            Some("grid-area: 6 / 1 / span 1 / span 2")
        );
        assert!(zero.has_class("keypad-digit"));
    }

    #[test]
    fn test_dom_element_kind_classes() {
        let elements = WasmKeypad::new().create_dom_elements();
        let class_of = |id: &str| elements.iter().find(|e| e.id == id).unwrap().clone();
        assert!(class_of("btn-floor-divide").has_class("keypad-operator"));
        assert!(class_of("btn-sqrt").has_class("keypad-function"));
        assert!(class_of("btn-clear").has_class("keypad-function"));
        assert!(class_of("btn-decimal").has_class("keypad-digit"));
    }

    #[test]
    fn test_create_keypad_element() {
        let elem = WasmKeypad::new().create_keypad_element();
        assert_eq!(elem.id, KEYPAD_ID);
        assert!(elem.has_class("keypad"));
    }

    // ===== Event mapping tests =====

    #[test]
    fn test_handle_click() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.handle_click("btn-7"), Some(Command::Digit(7)));
        assert_eq!(
            keypad.handle_click("btn-floor-divide"),
            Some(Command::Operator(Operator::FloorDivide))
        );
        assert_eq!(keypad.handle_click("btn-sqrt"), Some(Command::SquareRoot));
        assert_eq!(keypad.handle_click("calc-display"), None);
    }

    #[test]
    fn test_key_to_action() {
        assert_eq!(WasmKeypad::key_to_action("5"), Some(Command::Digit(5)));
        assert_eq!(WasmKeypad::key_to_action("Enter"), Some(Command::Equals));
        assert_eq!(WasmKeypad::key_to_action("Escape"), Some(Command::Clear));
        assert_eq!(WasmKeypad::key_to_action("R"), Some(Command::SquareRoot));
        assert_eq!(
            WasmKeypad::key_to_action("Backspace"),
            Some(Command::Backspace)
        );
        assert_eq!(WasmKeypad::key_to_action("Shift"), None);
        assert_eq!(WasmKeypad::key_to_action("("), None);
    }
}
