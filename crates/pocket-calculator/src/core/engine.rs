//! Calculator engine - the input/operation state machine
//!
//! Probar: Error prevention - State machine prevents invalid transitions
//!
//! Behavior is fully determined by three facts: whether an operation is
//! pending, which operator it carries, and whether the next digit starts a
//! fresh entry. Every operation returns a [`Snapshot`] so the caller can
//! re-render without observing the engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::number::{format_number, parse_float};
use super::operations::Operator;
use super::{CalcError, CalcResult};

/// Display text of a freshly created or cleared engine
pub const INITIAL_DISPLAY: &str = "0";

/// Every input the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter the decimal point
    Decimal,
    /// Start (or chain) a binary operation
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset to the initial state
    Clear,
    /// Replace the display with its square root
    SquareRoot,
    /// Drop the last display character
    Backspace,
}

impl Command {
    /// Maps a keyboard key name to a command.
    ///
    /// Key names follow the DOM `KeyboardEvent.key` convention. Floored
    /// division has no key; it is only reachable from the keypad.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            "r" | "R" => Some(Self::SquareRoot),
            "." => Some(Self::Decimal),
            "+" | "-" | "*" | "/" | "%" | "^" => key.parse().ok().map(Self::Operator),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }
}

/// A binary operation waiting for its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// Left-hand value
    pub operand: f64,
    /// Operator to apply once the right-hand value is known
    pub operator: Operator,
}

/// The two text values a front end renders after each operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// `"{operand} {operator}"` while an operation is pending, else empty
    pub preview: String,
    /// The current entry or last result
    pub display: String,
}

/// The calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_new_entry: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine showing `"0"` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            awaiting_new_entry: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Returns the pending left-hand operand
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Returns true when the next digit starts a new number
    #[must_use]
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Returns the numeric value of the display
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_float(&self.display)
    }

    /// Returns the pending-operation preview, or an empty string
    #[must_use]
    pub fn preview(&self) -> String {
        self.pending.map_or_else(String::new, |p| {
            format!("{} {}", format_number(p.operand), p.operator)
        })
    }

    /// Returns the current render state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            preview: self.preview(),
            display: self.display.clone(),
        }
    }

    /// Routes a command to the matching operation
    pub fn dispatch(&mut self, command: Command) -> CalcResult<Snapshot> {
        match command {
            Command::Digit(d) => self.input_digit(d),
            Command::Decimal => Ok(self.input_decimal()),
            Command::Operator(op) => Ok(self.perform_operation(op)),
            Command::Equals => Ok(self.equals()),
            Command::Clear => Ok(self.clear()),
            Command::SquareRoot => Ok(self.square_root()),
            Command::Backspace => Ok(self.backspace()),
        }
    }

    /// Enters a digit, starting a new number if an operator or equals
    /// was just pressed. A lone `"0"` is replaced, never extended.
    pub fn input_digit(&mut self, digit: u8) -> CalcResult<Snapshot> {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            warn!(digit, "rejected digit outside 0-9");
            return Err(CalcError::InvalidDigit(digit));
        };

        if self.awaiting_new_entry {
            self.display = ch.to_string();
            self.awaiting_new_entry = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
        Ok(self.settle("digit"))
    }

    /// Enters the decimal point; a second point in one number is ignored
    pub fn input_decimal(&mut self) -> Snapshot {
        if self.awaiting_new_entry {
            self.display = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.settle("decimal")
    }

    /// Starts a binary operation, resolving any pending one first.
    ///
    /// Chains evaluate eagerly left to right: `3 + 4 *` shows `7`.
    pub fn perform_operation(&mut self, operator: Operator) -> Snapshot {
        let input = self.value();

        let operand = match self.pending {
            None => input,
            Some(pending) => {
                let result = pending.operator.apply(pending.operand, input);
                self.display = format_number(result);
                result
            }
        };

        self.pending = Some(PendingOperation { operand, operator });
        self.awaiting_new_entry = true;
        self.settle("operator")
    }

    /// Resolves the pending operation; does nothing when none is pending
    pub fn equals(&mut self) -> Snapshot {
        if let Some(pending) = self.pending.take() {
            let result = pending.operator.apply(pending.operand, self.value());
            self.display = format_number(result);
            self.awaiting_new_entry = true;
        }
        self.settle("equals")
    }

    /// Replaces the display with its square root and abandons any pending
    /// operation. Negative input shows `NaN`.
    pub fn square_root(&mut self) -> Snapshot {
        self.display = format_number(self.value().sqrt());
        self.pending = None;
        self.awaiting_new_entry = true;
        self.settle("sqrt")
    }

    /// Restores the initial state
    pub fn clear(&mut self) -> Snapshot {
        *self = Self::new();
        self.settle("clear")
    }

    /// Drops the last display character, falling back to `"0"`
    pub fn backspace(&mut self) -> Snapshot {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = INITIAL_DISPLAY.to_string();
        }
        self.settle("backspace")
    }

    fn settle(&self, operation: &'static str) -> Snapshot {
        let snapshot = self.snapshot();
        debug!(
            operation,
            display = %snapshot.display,
            preview = %snapshot.preview,
            awaiting_new_entry = self.awaiting_new_entry,
            "calculator transition"
        );
        snapshot
    }
}
