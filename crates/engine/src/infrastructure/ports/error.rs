//! Error types for port operations.

/// Content-store operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Record not found - includes record type and ID for actionable error messages.
    #[error("{record_type} not found: {id}")]
    NotFound {
        record_type: &'static str,
        id: String,
    },

    /// Storage operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a NotFound error with record type and ID context.
    pub fn not_found(record_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            record_type,
            id: id.to_string(),
        }
    }

    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
