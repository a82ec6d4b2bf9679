//! Error types for the scalar operators and list combinators.

use crate::backend::Numeric;
use thiserror::Error;

/// Result type alias for fallible operators
pub type OpResult<T> = std::result::Result<T, OpError>;

/// Errors raised by the operators. Domain errors are surfaced as soon as they
/// happen, there is no clamping and no sentinel value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    /// Input outside the function's domain (log of a non-positive value)
    #[error("{op}: math domain error for input {value}")]
    Domain {
        /// Operator that rejected the input
        op: &'static str,
        /// Offending input
        value: f64,
    },

    /// Division by zero inside `inv` or one of the backward functions
    #[error("{op}: division by zero")]
    DivisionByZero {
        /// Operator that divided by zero
        op: &'static str,
    },

    /// Sequences passed to a strict combinator had different lengths
    #[error("length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Operator invoked with the wrong number of inputs
    #[error("{op} operation requires exactly {expected} input(s), got {got}")]
    Arity {
        op: String,
        expected: usize,
        got: usize,
    },
}

impl OpError {
    pub(crate) fn domain<T: Numeric>(op: &'static str, value: T) -> Self {
        let value = value.to_f64();
        tracing::debug!(op, value, "math domain error");
        OpError::Domain { op, value }
    }

    pub(crate) fn division_by_zero(op: &'static str) -> Self {
        tracing::debug!(op, "division by zero");
        OpError::DivisionByZero { op }
    }

    /// True for errors caused by evaluating a function outside its domain,
    /// which includes division by zero.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, OpError::Domain { .. } | OpError::DivisionByZero { .. })
    }
}
