//! Error types with actionable diagnostics.
//!
//! Every failure in the crate is surfaced immediately to the caller. There is
//! no transient error class: the core performs no I/O, so nothing is retried.

use thiserror::Error;

/// Result type alias for confmat operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while building or evaluating a confusion matrix.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Label sequences are empty, of different lengths, or otherwise malformed.
    #[error("Invalid input: {message}\n  → Provide two non-empty label sequences of equal length")]
    InvalidInput { message: String },

    /// A formula divides by zero because of the structure of the input.
    #[error("Degenerate input: {message}\n  → The metric is undefined for this data; supply samples from more than one class")]
    DegenerateInput { message: String },

    /// Configuration file or value is invalid.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl EvalError {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Create a degenerate-input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput { message: message.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is caused by the data or settings the user supplied.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::DegenerateInput { .. }
                | Self::Config { .. }
                | Self::Csv(_)
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "E001",
            Self::DegenerateInput { .. } => "E002",
            Self::Config { .. } => "E010",
            Self::Io { .. } => "E050",
            Self::Csv(_) => "E051",
            Self::Serialization { .. } => "E052",
        }
    }
}
