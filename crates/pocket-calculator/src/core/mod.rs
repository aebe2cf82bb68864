//! Calculator core: the input/operation state machine and its arithmetic
//!
//! Probar Principles:
//! - Error prevention: the pending operand and operator live in one
//!   `Option`, so they can never drift apart
//! - Anomaly: numeric faults (division by zero, negative roots) degrade to
//!   `Infinity`/`NaN` text instead of stopping the line

pub mod engine;
pub mod layout;
pub mod number;
mod operations;

pub use engine::{CalculatorEngine, Command, PendingOperation, Snapshot};
pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Arithmetic never fails; these only guard the typed API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A digit outside 0-9 was entered
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),
    /// Operator text outside the supported set
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_invalid_digit() {
        let err = CalcError::InvalidDigit(12);
        assert_eq!(format!("{err}"), "Invalid digit: 12 (expected 0-9)");
    }

    #[test]
    fn test_calc_error_display_unknown_operator() {
        let err = CalcError::UnknownOperator("**".into());
        assert_eq!(format!("{err}"), "Unknown operator: \"**\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::InvalidDigit(10));
        assert!(err.to_string().contains("digit"));
    }

    #[test]
    fn test_calc_error_clone_eq() {
        let err = CalcError::UnknownOperator("?".into());
        assert_eq!(err.clone(), err);
    }
}
