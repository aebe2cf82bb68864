//! TUI Frontend for Calculator
//!
//! Probar: Visual feedback - Visual feedback through terminal interface

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use terminal::TerminalSession;
pub use ui::{layout, render, CalculatorLayout, CalculatorUI};
