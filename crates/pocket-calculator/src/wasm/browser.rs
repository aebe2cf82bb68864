//! Browser WASM bindings for Calculator
//!
//! This module provides the actual browser integration using wasm-bindgen.
//! Probar: Direct observation - Go and see the real browser behavior
//!
//! The page is expected to contain `#calc-preview`, `#calc-display` and
//! buttons whose IDs match the keypad layout (see [`super::WasmKeypad`]).
//! Button clicks call [`BrowserCalculator::press_button`]; keyboard input is
//! picked up by a document-level listener installed by
//! [`BrowserCalculator::mount`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, EventTarget, KeyboardEvent};

use super::calculator::WasmCalculator;
use super::dom::{DISPLAY_ID, PREVIEW_ID};

/// Browser Calculator - the main WASM entry point
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Rc<RefCell<WasmCalculator>>,
    listener: Option<KeyboardListener>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            calculator: Rc::new(RefCell::new(WasmCalculator::new())),
            listener: None,
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.borrow().display().to_string()
    }

    /// Current pending-operation preview
    #[wasm_bindgen(getter)]
    pub fn preview(&self) -> String {
        self.calculator.borrow().preview().to_string()
    }

    /// Handle a keypad button click by element ID
    pub fn press_button(&self, button_id: &str) -> Result<bool, JsValue> {
        let handled = self.calculator.borrow_mut().handle_click(button_id);
        render_document(&self.calculator.borrow())?;
        Ok(handled)
    }

    /// Handle a keyboard key (a `KeyboardEvent.key` value)
    pub fn press_key(&self, key: &str) -> Result<bool, JsValue> {
        let handled = self.calculator.borrow_mut().handle_key(key, false);
        render_document(&self.calculator.borrow())?;
        Ok(handled)
    }

    /// The current snapshot as `{"preview": ..., "display": ...}`
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.calculator
            .borrow()
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Renders the current state and starts listening for keyboard input
    pub fn mount(&mut self) -> Result<(), JsValue> {
        render_document(&self.calculator.borrow())?;
        if self.listener.is_none() {
            self.listener = Some(KeyboardListener::attach(Rc::clone(&self.calculator))?);
        }
        Ok(())
    }

    /// Stops listening for keyboard input
    pub fn unmount(&mut self) {
        self.listener = None;
    }

    /// Whether the keyboard listener is attached
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.listener.is_some()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BrowserCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserCalculator")
            .field("calculator", &self.calculator)
            .field("mounted", &self.listener.is_some())
            .finish()
    }
}

/// A `keydown` listener on the document, removed when dropped
struct KeyboardListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyboardListener {
    fn attach(calculator: Rc<RefCell<WasmCalculator>>) -> Result<Self, JsValue> {
        let target: EventTarget = document()?.into();

        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            let handled = calculator.borrow_mut().handle_key(&key, event.ctrl_key());
            if !handled {
                return;
            }
            // Keep Enter from activating a focused button as well
            if key == "Enter" {
                event.prevent_default();
            }
            if let Err(e) = render_document(&calculator.borrow()) {
                console::error_1(&e);
            }
        });

        target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        Ok(Self { target, closure })
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Writes the snapshot into the page; missing elements are skipped
fn render_document(calculator: &WasmCalculator) -> Result<(), JsValue> {
    let document = document()?;
    let snapshot = calculator.snapshot();
    for (id, text) in [(PREVIEW_ID, &snapshot.preview), (DISPLAY_ID, &snapshot.display)] {
        if let Some(elem) = document.get_element_by_id(id) {
            elem.set_text_content(Some(text));
        }
    }
    Ok(())
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Pocket calculator WASM initialized".into());
}
