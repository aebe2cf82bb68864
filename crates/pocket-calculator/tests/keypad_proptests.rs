//! Property-based tests for the keypad layout and key mapping
//!
//! Probar: Error prevention - Property tests catch edge cases that humans miss

use pocket_calculator::core::layout::{GRID_COLS, GRID_ROWS};
use pocket_calculator::core::{Command, Operator};
use pocket_calculator::driver::CalculatorDriver;
use pocket_calculator::wasm::{DomEvent, WasmDriver, WasmKeypad};
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any operator that has a keyboard key
fn keyboard_operator_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('+'),
        Just('-'),
        Just('*'),
        Just('/'),
        Just('^'),
        Just('%')
    ]
}

/// Generate grid positions inside the keypad
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0..GRID_ROWS, 0..GRID_COLS)
}

// ===== Property tests for WasmKeypad =====

proptest! {
    /// Every covered cell maps back to a button that covers it
    #[test]
    fn prop_button_at_covers_position((row, col) in grid_position_strategy()) {
        let keypad = WasmKeypad::new();
        if let Some(btn) = keypad.get_button_at(row, col) {
            prop_assert!(btn.covers(row, col));
            let found = keypad.find_button_by_id(btn.id);
            prop_assert_eq!(found, Some(btn));
        } else {
            // The bottom-right cell is the only gap
            prop_assert_eq!((row, col), (GRID_ROWS - 1, GRID_COLS - 1));
        }
    }

    /// Button at invalid row should not exist
    #[test]
    fn prop_button_at_invalid_row_missing(row in GRID_ROWS..100usize, col in 0..GRID_COLS) {
        let keypad = WasmKeypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Button at invalid col should not exist
    #[test]
    fn prop_button_at_invalid_col_missing(row in 0..GRID_ROWS, col in GRID_COLS..100usize) {
        let keypad = WasmKeypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// All digits should have a clickable button
    #[test]
    fn prop_all_digits_clickable(d in digit_strategy()) {
        let keypad = WasmKeypad::new();
        let btn = keypad.find_button_for(Command::Digit(d));
        prop_assert!(btn.is_some());
        prop_assert_eq!(keypad.handle_click(btn.unwrap().id), Some(Command::Digit(d)));
    }
}

// ===== Property tests for keyboard mapping =====

proptest! {
    /// All digit keys should map to digit commands
    #[test]
    fn prop_digit_keys_map_to_digits(d in digit_strategy()) {
        let key = d.to_string();
        prop_assert_eq!(WasmKeypad::key_to_action(&key), Some(Command::Digit(d)));
    }

    /// All operator keys should map to the operator with that symbol
    #[test]
    fn prop_operator_keys_map_to_operators(op in keyboard_operator_strategy()) {
        let key = op.to_string();
        let expected: Operator = key.parse().unwrap();
        prop_assert_eq!(WasmKeypad::key_to_action(&key), Some(Command::Operator(expected)));
        prop_assert_eq!(expected.symbol(), key.as_str());
    }

    /// Multi-character names other than the named keys are ignored
    #[test]
    fn prop_unknown_keys_map_to_none(key in "[a-zA-Z]{2,10}") {
        prop_assume!(!["Enter", "Escape", "Backspace"].contains(&key.as_str()));
        prop_assert!(WasmKeypad::key_to_action(&key).is_none());
    }

    /// Ignored keys never change what the page shows
    #[test]
    fn prop_ignored_keys_leave_dom_untouched(key in "[a-bd-qs-zA-BD-QS-Z(){}\\[\\]<>!?@#]") {
        let mut driver = WasmDriver::new();
        driver.press_key("4");
        driver.press_key("+");
        prop_assert!(!driver.dispatch(DomEvent::key_down(&key)));
        prop_assert_eq!(driver.display(), "4");
        prop_assert_eq!(driver.preview(), "4 +");
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_keypad_always_has_21_buttons() {
    let keypad = WasmKeypad::new();
    assert_eq!(keypad.button_count(), 21);
    assert_eq!(keypad.create_dom_elements().len(), 21);
}

#[test]
fn invariant_keypad_always_6_by_4() {
    assert_eq!(WasmKeypad::new().dimensions(), (6, 4));
}

#[test]
fn invariant_keypad_has_every_operator() {
    let keypad = WasmKeypad::new();
    for op in Operator::ALL {
        assert!(
            keypad.find_button_for(Command::Operator(op)).is_some(),
            "Missing operator {op}"
        );
    }
}

#[test]
fn invariant_keypad_has_special_buttons() {
    let keypad = WasmKeypad::new();
    for id in ["btn-equals", "btn-clear", "btn-decimal", "btn-sqrt"] {
        assert!(keypad.find_button_by_id(id).is_some(), "Missing {id}");
    }
}

#[test]
fn invariant_floor_divide_has_no_key() {
    assert!(WasmKeypad::key_to_action("//").is_none());
    assert!(WasmKeypad::new()
        .find_button_for(Command::Operator(Operator::FloorDivide))
        .is_some());
}
