//! WASM Calculator Demo
//!
//! Drives the browser front end against the mock DOM and prints what the
//! page would show after each click, then runs the unified behavior suite.
//!
//! Run with: cargo run --example calculator_wasm_demo

use pocket_calculator::driver::{run_full_suite, CalculatorDriver};
use pocket_calculator::wasm::{WasmDriver, KEYPAD_ID};

fn main() {
    let mut driver = WasmDriver::new();

    println!("Mock DOM keypad ({} buttons):", driver.dom().children_of(KEYPAD_ID).len());
    println!();

    println!("{:<18} {:>10} {:>14}", "click", "preview", "display");
    for id in [
        "btn-1", "btn-2", "btn-plus", "btn-3", "btn-times", "btn-4", "btn-equals", "btn-sqrt",
        "btn-floor-divide", "btn-5", "btn-equals", "btn-divide", "btn-0", "btn-equals",
    ] {
        driver.click(id);
        println!("{id:<18} {:>10} {:>14}", driver.preview(), driver.display());
    }
    println!();

    println!("DOM events recorded: {}", driver.dom().event_history().len());

    let mut fresh = WasmDriver::new();
    run_full_suite(&mut fresh);
    println!("Unified behavior suite: passed");
}
