//! Error types for the Acontext task schema.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the task schema crates.
///
/// Every failure to accept an externally supplied task record ends up as one
/// of these variants, so callers can tell a bad status string apart from a
/// malformed record or an unreadable stream.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcontextError {
    /// A status string outside `pending`, `running`, `success`, `failed`
    #[error("Invalid task status{}: '{value}' (expected one of: pending, running, success, failed)", .index.map(|i| format!(" at index {i}")).unwrap_or_default())]
    InvalidStatus {
        index: Option<usize>,
        value: String,
    },

    /// A record that failed structural or type validation
    #[error("Invalid task record{}: {message}", .index.map(|i| format!(" at index {i}")).unwrap_or_default())]
    InvalidRecord {
        index: Option<usize>,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON"
        message: String,
    },

    /// IO error while reading records
    #[error("IO error: {message}")]
    Io { message: String },
}

impl AcontextError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidStatus error
    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            index: None,
            value: value.into(),
        }
    }

    /// Creates an InvalidRecord error that is not tied to a batch position
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index: None,
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Attaches a zero-based batch position to a record validation error.
    ///
    /// Stream and serialization errors are not tied to one element and are
    /// returned unchanged.
    pub fn at_index(self, position: usize) -> Self {
        match self {
            Self::InvalidStatus { value, .. } => Self::InvalidStatus {
                index: Some(position),
                value,
            },
            Self::InvalidRecord { message, .. } => Self::InvalidRecord {
                index: Some(position),
                message,
            },
            other => other,
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidStatus error
    pub fn is_invalid_status(&self) -> bool {
        matches!(self, Self::InvalidStatus { .. })
    }

    /// Check if this is an InvalidRecord error
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns the batch position of the failing element, if known.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidStatus { index, .. } | Self::InvalidRecord { index, .. } => *index,
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

/// Decoding failures become InvalidRecord; stream failures become Io.
impl From<serde_json::Error> for AcontextError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::io(err.to_string())
        } else {
            Self::invalid_record(err.to_string())
        }
    }
}

/// A type alias for `Result<T, AcontextError>`.
pub type Result<T> = std::result::Result<T, AcontextError>;
