//! Error types for the Mapper

use thiserror::Error;

/// Errors that can occur while mapping a file
#[derive(Error, Debug)]
pub enum MapperError {
    /// Graph sink rejected a triple
    #[error("Sink error: {0}")]
    Sink(String),

    /// Path cannot be turned into a resource identifier
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A single field value that cannot be represented as a literal
///
/// Value factories return this to drop one value; the dispatcher logs it and
/// carries on with the next value. It never aborts a file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("value skipped: {reason}")]
pub struct SkipValue {
    reason: String,
}

impl SkipValue {
    /// Create a skip signal with a reason for the logs
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Value bytes are not valid UTF-8
    pub fn undecodable() -> Self {
        Self::new("text is not valid UTF-8")
    }

    /// Why the value was skipped
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
