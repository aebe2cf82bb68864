//! Binary operators with 100% test coverage
//!
//! Probar: Error prevention - a closed operator set means there is no
//! "unknown operator" branch at evaluation time

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Floating remainder (%)
    Modulo,
    /// Exponentiation (^)
    Power,
    /// Floored division (//)
    FloorDivide,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 7] = [
        Self::Modulo,
        Self::FloorDivide,
        Self::Divide,
        Self::Multiply,
        Self::Power,
        Self::Subtract,
        Self::Add,
    ];

    /// Returns the ASCII symbol used in previews and keyboard input
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::FloorDivide => "//",
        }
    }

    /// Returns the label printed on the keypad button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::FloorDivide => "//",
        }
    }

    /// Applies the operator to `a` and `b`.
    ///
    /// Never fails: division by zero yields `±Infinity` or `NaN`.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Modulo => a % b,
            Self::Power => power(a, b),
            Self::FloorDivide => (a / b).floor(),
        }
    }
}

/// `Math.pow` semantics: C `pow` returns 1 for these inputs, `Math.pow` NaN.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "%" => Ok(Self::Modulo),
            "^" => Ok(Self::Power),
            "//" => Ok(Self::FloorDivide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}
