//! Pocket Calculator
//!
//! A four-function calculator modeled as a small state machine, with a
//! terminal front end and a browser front end driven by the same engine.
//!
//! # Probar Testing Principles
//!
//! - **Error prevention**: the pending operation is one `Option`, so operand
//!   and operator can never drift apart
//! - **Anomaly**: numeric faults show up as `Infinity` or `NaN` text
//! - **Balanced testing**: one behavioral suite runs against both front ends
//! - **Visual feedback**: every operation returns the snapshot to render
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! calc.input_digit(3).unwrap();
//! let snapshot = calc.perform_operation(Operator::Add);
//! assert_eq!(snapshot.preview, "3 +");
//!
//! calc.input_digit(4).unwrap();
//! let snapshot = calc.perform_operation(Operator::Multiply);
//! assert_eq!(snapshot.display, "7");
//!
//! calc.input_digit(2).unwrap();
//! assert_eq!(calc.equals().display, "14");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::layout::{ButtonSpec, KEYPAD_LAYOUT};
    pub use crate::core::number::{format_number, parse_float};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorEngine, Command, Operator, PendingOperation, Snapshot,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}
