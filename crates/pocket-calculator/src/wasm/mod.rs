//! WASM Frontend for Calculator
//!
//! The mock DOM, keypad, calculator and driver compile on every target so
//! the browser front end is tested natively. The real browser bindings sit
//! behind the `wasm` feature.
//!
//! Probar: Balanced testing - Balanced testing across TUI and WASM

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{WasmCalculator, ACTIVE_CLASS};
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, KEYPAD_ID, PREVIEW_ID};
pub use driver::WasmDriver;
pub use keypad::WasmKeypad;
