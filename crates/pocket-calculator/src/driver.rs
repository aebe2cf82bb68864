//! Unified Calculator Driver - The Probar Way
//!
//! This module implements the core unification principle:
//! **Write the test logic once, run it everywhere.**
//!
//! Probar: Balanced testing - Balanced testing across platforms

use crate::core::{CalcResult, Command, Operator};

/// Abstract driver trait for calculator interactions
///
/// Both the TUI and the WASM front ends implement this trait, so the
/// behavioral checks below run unchanged against either.
///
/// # Example
///
/// ```rust,ignore
/// fn verify_sum<D: CalculatorDriver>(driver: &mut D) {
///     type_keys(driver, &["2", "+", "3", "Enter"]);
///     assert_eq!(driver.display(), "5");
/// }
/// ```
pub trait CalculatorDriver {
    /// Presses a keypad button
    fn press(&mut self, command: Command) -> CalcResult<()>;

    /// Presses a keyboard key; returns false if the key is ignored
    fn press_key(&mut self, key: &str) -> bool;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the pending-operation preview (empty when none)
    fn preview(&self) -> String;
}

/// Presses each key in order
pub fn type_keys<D: CalculatorDriver>(driver: &mut D, keys: &[&str]) {
    for key in keys {
        driver.press_key(key);
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{CalcResult, CalculatorDriver, Command};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    /// Translates a DOM-style key name into a crossterm key code
    fn key_code(key: &str) -> Option<KeyCode> {
        match key {
            "Enter" => Some(KeyCode::Enter),
            "Escape" => Some(KeyCode::Esc),
            "Backspace" => Some(KeyCode::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyCode::Char(c)),
                    _ => None,
                }
            }
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, command: Command) -> CalcResult<()> {
            self.app.press(command).map(|_| ())
        }

        fn press_key(&mut self, key: &str) -> bool {
            key_code(key).is_some_and(|code| {
                self.app
                    .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            })
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn preview(&self) -> String {
            self.app.preview().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Behavior Checks =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies that digit entry never produces a leading zero
pub fn verify_leading_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();
    assert_eq!(driver.display(), "0");

    driver.press(Command::Digit(0)).unwrap();
    assert_eq!(driver.display(), "0");

    driver.press(Command::Digit(5)).unwrap();
    assert_eq!(driver.display(), "5");

    driver.press(Command::Digit(0)).unwrap();
    assert_eq!(driver.display(), "50");
    driver.press(Command::Clear).unwrap();
}

/// Verifies that a second decimal point is ignored
pub fn verify_decimal_idempotent<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();
    driver.press(Command::Digit(3)).unwrap();

    driver.press(Command::Decimal).unwrap();
    assert_eq!(driver.display(), "3.");

    driver.press(Command::Decimal).unwrap();
    assert_eq!(driver.display(), "3.");
    driver.press(Command::Clear).unwrap();
}

/// Verifies eager left-to-right chaining (no precedence)
pub fn verify_eager_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();
    driver.press(Command::Digit(3)).unwrap();
    driver.press(Command::Operator(Operator::Add)).unwrap();
    assert_eq!(driver.preview(), "3 +");

    driver.press(Command::Digit(4)).unwrap();
    driver.press(Command::Operator(Operator::Multiply)).unwrap();
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.preview(), "7 *");

    driver.press(Command::Digit(2)).unwrap();
    driver.press(Command::Equals).unwrap();
    assert_eq!(driver.display(), "14");
    assert_eq!(driver.preview(), "");
    driver.press(Command::Clear).unwrap();
}

/// Verifies that equals with nothing pending changes nothing
pub fn verify_equals_without_pending<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();
    driver.press(Command::Digit(5)).unwrap();
    driver.press(Command::Equals).unwrap();
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.preview(), "");
    driver.press(Command::Clear).unwrap();
}

/// Verifies that clear restores the initial render state
pub fn verify_clear_restores<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Digit(8)).unwrap();
    driver.press(Command::Operator(Operator::Power)).unwrap();
    driver.press(Command::Decimal).unwrap();
    driver.press(Command::Clear).unwrap();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.preview(), "");

    // The next digit must replace, not append
    driver.press(Command::Digit(1)).unwrap();
    assert_eq!(driver.display(), "1");
    driver.press(Command::Clear).unwrap();
}

/// Verifies square root of positive and negative values
pub fn verify_square_root<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();
    driver.press(Command::Digit(4)).unwrap();
    driver.press(Command::SquareRoot).unwrap();
    assert_eq!(driver.display(), "2");

    // 0 - 1 = -1, then sqrt
    driver.press(Command::Clear).unwrap();
    driver.press(Command::Operator(Operator::Subtract)).unwrap();
    driver.press(Command::Digit(1)).unwrap();
    driver.press(Command::Equals).unwrap();
    driver.press(Command::SquareRoot).unwrap();
    assert_eq!(driver.display(), "NaN");
    driver.press(Command::Clear).unwrap();
}

/// Verifies backspace editing
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();
    driver.press(Command::Digit(7)).unwrap();
    driver.press(Command::Backspace).unwrap();
    assert_eq!(driver.display(), "0");

    driver.press(Command::Digit(4)).unwrap();
    driver.press(Command::Digit(2)).unwrap();
    driver.press(Command::Backspace).unwrap();
    assert_eq!(driver.display(), "4");
    driver.press(Command::Clear).unwrap();
}

/// Verifies that division by zero shows Infinity instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();
    driver.press(Command::Digit(1)).unwrap();
    driver.press(Command::Digit(0)).unwrap();
    driver.press(Command::Operator(Operator::Divide)).unwrap();
    driver.press(Command::Digit(0)).unwrap();
    driver.press(Command::Equals).unwrap();
    assert_eq!(driver.display(), "Infinity");
    driver.press(Command::Clear).unwrap();
}

/// Verifies the keyboard shortcut table end to end
pub fn verify_keyboard_shortcuts<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear).unwrap();

    type_keys(driver, &["1", "2", ".", "5", "Backspace", "Backspace"]);
    assert_eq!(driver.display(), "12");

    type_keys(driver, &["%", "5", "="]);
    assert_eq!(driver.display(), "2");

    type_keys(driver, &["^", "3", "Enter"]);
    assert_eq!(driver.display(), "8");

    type_keys(driver, &["-", "4", "*"]);
    assert_eq!(driver.preview(), "4 *");

    type_keys(driver, &["4", "/", "r"]);
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.preview(), "");

    type_keys(driver, &["R"]);
    assert_eq!(driver.display(), "2");

    type_keys(driver, &["+", "1", "Escape"]);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.preview(), "");

    type_keys(driver, &["9", "c"]);
    assert_eq!(driver.display(), "0");
    type_keys(driver, &["9", "C"]);
    assert_eq!(driver.display(), "0");

    // Keys outside the vocabulary are ignored
    assert!(!driver.press_key("x"));
    assert!(!driver.press_key("("));
    assert_eq!(driver.display(), "0");
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_leading_zero(driver);
    verify_decimal_idempotent(driver);
    verify_eager_chaining(driver);
    verify_equals_without_pending(driver);
    verify_clear_restores(driver);
    verify_square_root(driver);
    verify_backspace(driver);
    verify_division_by_zero(driver);
    verify_keyboard_shortcuts(driver);
}
