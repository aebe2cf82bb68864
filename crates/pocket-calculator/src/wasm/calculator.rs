//! WASM Calculator Bindings
//!
//! This module provides the browser-side calculator that wraps the engine
//! and renders its snapshot into the DOM.
//!
//! Probar: Error prevention - Type-safe bindings prevent invalid states

use tracing::trace;

use super::dom::{MockDom, DISPLAY_ID, PREVIEW_ID};
use super::keypad::WasmKeypad;
use crate::core::{CalcResult, CalculatorEngine, Command, Snapshot};

/// CSS class marking the last pressed button
pub const ACTIVE_CLASS: &str = "active";

/// WASM Calculator - browser-ready calculator
#[derive(Debug, Clone)]
pub struct WasmCalculator {
    engine: CalculatorEngine,
    snapshot: Snapshot,
    keypad: WasmKeypad,
    /// ID of the last pressed button, if it has one
    active_button: Option<&'static str>,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates a new WASM calculator
    #[must_use]
    pub fn new() -> Self {
        let engine = CalculatorEngine::new();
        Self {
            snapshot: engine.snapshot(),
            engine,
            keypad: WasmKeypad::new(),
            active_button: None,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Returns the last rendered snapshot
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
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

    /// Returns the ID of the last pressed button
    #[must_use]
    pub fn active_button(&self) -> Option<&'static str> {
        self.active_button
    }

    /// Sends a command to the engine
    pub fn press(&mut self, command: Command) -> CalcResult<&Snapshot> {
        self.snapshot = self.engine.dispatch(command)?;
        self.active_button = self.keypad.find_button_for(command).map(|b| b.id);
        Ok(&self.snapshot)
    }

    /// Handles a click on an element; returns false if it is not a button
    pub fn handle_click(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(command) => self.press(command).is_ok(),
            None => {
                trace!(element_id, "click outside keypad");
                false
            }
        }
    }

    /// Handles a keydown; returns false if the key is ignored.
    ///
    /// Ctrl combinations belong to the browser (copy, reload, ...) and are
    /// never treated as calculator input.
    pub fn handle_key(&mut self, key: &str, ctrl: bool) -> bool {
        if ctrl {
            return false;
        }
        match WasmKeypad::key_to_action(key) {
            Some(command) => self.press(command).is_ok(),
            None => false,
        }
    }

    /// Writes the snapshot and button highlight into the DOM
    pub fn render(&self, dom: &mut MockDom) {
        dom.set_element_text(PREVIEW_ID, &self.snapshot.preview);
        dom.set_element_text(DISPLAY_ID, &self.snapshot.display);
        dom.remove_class_everywhere(ACTIVE_CLASS);
        if let Some(elem) = self.active_button.and_then(|id| dom.get_element_mut(id)) {
            elem.add_class(ACTIVE_CLASS);
        }
    }

    /// Serializes the snapshot as JSON for JavaScript callers
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot)
    }
}
