//! Runtime value representation
//!
//! Every expression evaluates to a machine integer. Arithmetic wraps on
//! overflow (two's complement), division truncates toward zero.

use thiserror::Error;

/// Runtime value type
pub type Value = i64;

/// Result type for evaluation
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Runtime error type
///
/// None of these are recoverable: they abort the whole interpretation.
/// Output already written before the failure stays written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Lookup of an identifier with no binding in the table
    #[error("Unbound identifier: {name}")]
    UnboundIdentifier { name: String },
    /// Right operand of `/` evaluated to zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Writing a print line to the output writer failed
    #[error("I/O error: {message}")]
    IoError { message: String },
}

impl RuntimeError {
    pub fn unbound(name: impl Into<String>) -> Self {
        RuntimeError::UnboundIdentifier { name: name.into() }
    }

    /// Short machine-readable code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::UnboundIdentifier { .. } => "unbound-identifier",
            RuntimeError::DivisionByZero => "division-by-zero",
            RuntimeError::IoError { .. } => "io-error",
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::IoError {
            message: err.to_string(),
        }
    }
}
