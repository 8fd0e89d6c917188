//! Error types for the greeting function.
//!
//! Parameter-read failures never leave an invocation; they are logged and the
//! default name is used instead. Configuration errors can only happen while
//! the binary starts up.

use std::fmt;

/// Custom error type for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The request body could not be read as a JSON object with a usable `name`
    ParameterRead(String),
    /// Invalid configuration in the environment
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterRead(msg) => write!(f, "Parameter read error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParameterRead(error.to_string())
    }
}
