//! Tool-specific error types.

use thiserror::Error;

use crate::domains::catalog::IntegrityError;

/// Broad category of a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownTool,
    InvalidArgs,
    DataIntegrity,
    Internal,
}

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    /// An argument failed schema validation.
    #[error("Invalid argument '{field}': {constraint}")]
    InvalidArgs { field: String, constraint: String },

    /// A catalog record is missing or has a broken price.
    #[error("Data integrity error: {0}")]
    DataIntegrity(#[from] IntegrityError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error for `field`.
    pub fn invalid_args(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::InvalidArgs {
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTool(_) => ErrorKind::UnknownTool,
            Self::InvalidArgs { .. } => ErrorKind::InvalidArgs,
            Self::DataIntegrity(_) => ErrorKind::DataIntegrity,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
