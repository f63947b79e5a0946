//! Error types for the allot library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all allot operations.
#[derive(Error, Debug)]
pub enum AllotError {
    /// Duration text that does not match the accepted grammar
    #[error("Invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Item not present in the ordered list being operated on
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: u64 },
    /// Reorder request that would leave the list boundary
    #[error("Cannot move item {id}: {reason}")]
    InvalidMove { id: u64, reason: String },
    /// Wizard finished before reaching a valid final step
    #[error("Wizard is not complete: {step}")]
    WizardIncomplete { step: String },
    /// Calendar arithmetic outside the representable range
    #[error("Calendar error: {0}")]
    Calendar(#[from] jiff::Error),
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AllotError {
        AllotError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating duration parse errors.
pub struct InvalidDurationBuilder {
    input: String,
}

impl InvalidDurationBuilder {
    /// Create a new duration error builder for the offending text.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AllotError {
        AllotError::InvalidDuration {
            input: self.input,
            reason: reason.into(),
        }
    }
}

impl AllotError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for duration parse errors.
    pub fn invalid_duration(input: impl Into<String>) -> InvalidDurationBuilder {
        InvalidDurationBuilder::new(input)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Whether the error is a user-facing validation problem that should be
    /// shown inline rather than aborting the workflow.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDuration { .. } | Self::InvalidInput { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to AllotError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add lazy context to any error type, converting to AllotError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| AllotError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| AllotError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Result type alias for allot operations
pub type Result<T> = std::result::Result<T, AllotError>;
