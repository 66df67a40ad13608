//! Shared error model for cross-crate APIs.

use thiserror::Error;

/// Unified result type used by process-level interfaces in the console crates.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Process-level error categories.
///
/// User-input failures of the registry and gate (unknown or ambiguous names, missing privilege)
/// are modeled by their own types and rendered as console replies. This enum covers failures
/// that stop the process or one input line outright.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Configuration is invalid for the requested operation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Input line is malformed.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Console I/O failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
