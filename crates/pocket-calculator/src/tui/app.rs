//! TUI Application State
//!
//! Probar: Error prevention - State machine prevents invalid transitions

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use super::ui;
use crate::core::{CalcResult, CalculatorEngine, Command, Snapshot};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The state machine
    engine: CalculatorEngine,
    /// What the last operation returned; this is what gets rendered
    snapshot: Snapshot,
    /// Keypad with the last pressed button highlighted
    keypad: Keypad,
    /// Key event mapping
    input: InputHandler,
    /// Whether the help sidebar is drawn
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with the help sidebar shown
    #[must_use]
    pub fn new() -> Self {
        let engine = CalculatorEngine::new();
        Self {
            snapshot: engine.snapshot(),
            engine,
            keypad: Keypad::new(),
            input: InputHandler::new(),
            show_help: true,
            should_quit: false,
        }
    }

    /// Shows or hides the help sidebar
    #[must_use]
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.snapshot.display
    }

    /// Returns the pending-operation preview
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.snapshot.preview
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the help sidebar is drawn
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sends a command to the engine and highlights its button
    pub fn press(&mut self, command: Command) -> CalcResult<&Snapshot> {
        self.snapshot = self.engine.dispatch(command)?;
        self.keypad.highlight(command);
        Ok(&self.snapshot)
    }

    /// Handles a key event; returns true if it reached the engine
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        match self.input.handle_key(event) {
            KeyAction::Command(command) => self.press(command).is_ok(),
            KeyAction::Quit => {
                debug!("quit requested");
                self.quit();
                false
            }
            KeyAction::None => false,
        }
    }

    /// Handles a left click at terminal cell (`x`, `y`) inside a frame of
    /// size `area`; returns true if a keypad button was hit
    pub fn handle_click(&mut self, area: Rect, x: u16, y: u16) -> bool {
        let keypad_area = ui::layout(area, self.show_help).keypad;
        match self.keypad.hit_test(keypad_area, x, y) {
            Some(command) => self.press(command).is_ok(),
            None => false,
        }
    }
}
