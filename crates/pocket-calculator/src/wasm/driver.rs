//! WASM Driver - Unified Testing Interface
//!
//! This module implements the CalculatorDriver trait for WASM,
//! enabling the same behavioral checks to run on both TUI and WASM.
//! Every interaction goes through a DOM event and every read comes back
//! out of the DOM, so rendering is checked along with behavior.
//!
//! Probar: Balanced testing - Balanced testing across platforms

use super::calculator::WasmCalculator;
use super::dom::{DomEvent, MockDom, DISPLAY_ID, PREVIEW_ID};
use crate::core::{CalcResult, Command};
use crate::driver::CalculatorDriver;

/// WASM Driver wrapping calculator and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    /// The calculator instance
    calculator: WasmCalculator,
    /// Mock DOM for testing
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator_and_dom(WasmCalculator::new(), MockDom::calculator())
    }

    /// Creates a WASM driver with existing calculator and DOM
    #[must_use]
    pub fn with_calculator_and_dom(calculator: WasmCalculator, dom: MockDom) -> Self {
        let mut driver = Self { calculator, dom };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Dispatches a DOM event and lets the calculator handle it.
    ///
    /// Returns true if the event reached the engine.
    pub fn dispatch(&mut self, event: DomEvent) -> bool {
        let handled = match &event {
            DomEvent::Click { element_id } => self.calculator.handle_click(element_id),
            DomEvent::KeyDown { key, ctrl } => self.calculator.handle_key(key, *ctrl),
        };
        self.dom.dispatch_event(event);
        self.sync_dom();
        handled
    }

    /// Simulates clicking an element
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dispatch(DomEvent::click(element_id))
    }

    /// Synchronizes DOM state with calculator state
    fn sync_dom(&mut self) {
        self.calculator.render(&mut self.dom);
    }

    /// Gets the display element's text
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(DISPLAY_ID)
    }

    /// Gets the preview element's text
    #[must_use]
    pub fn preview_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(PREVIEW_ID)
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, command: Command) -> CalcResult<()> {
        if let Some(button) = self.calculator.keypad().find_button_for(command) {
            self.click(button.id);
            return Ok(());
        }
        // Commands without a button (backspace, out-of-range digits)
        self.calculator.press(command)?;
        self.sync_dom();
        Ok(())
    }

    fn press_key(&mut self, key: &str) -> bool {
        self.dispatch(DomEvent::key_down(key))
    }

    fn display(&self) -> String {
        self.display_element_text().unwrap_or_default().to_string()
    }

    fn preview(&self) -> String {
        self.preview_element_text().unwrap_or_default().to_string()
    }
}
