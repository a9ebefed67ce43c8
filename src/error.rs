//! Error handling module for dermtui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All fallible operations in the crate should use these types for consistency.

use thiserror::Error;

/// Main error type for dermtui
#[derive(Error, Debug)]
pub enum DermTuiError {
    /// IO errors (profile files, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Profile errors (loading, validation)
    #[error("Profile error: {0}")]
    Profile(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (invalid wizard state)
    #[error("State error: {0}")]
    State(String),
}

/// Result type alias for dermtui operations
pub type Result<T> = std::result::Result<T, DermTuiError>;

// Convenient error constructors
impl DermTuiError {
    /// Create a profile error
    pub fn profile(msg: impl Into<String>) -> Self {
        Self::Profile(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DermTuiError::profile("at least one concern is required");
        assert_eq!(
            err.to_string(),
            "Profile error: at least one concern is required"
        );

        let err = DermTuiError::state("no profile held");
        assert_eq!(err.to_string(), "State error: no profile held");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DermTuiError = io_err.into();
        assert!(matches!(err, DermTuiError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DermTuiError = json_err.into();
        assert!(matches!(err, DermTuiError::Json(_)));
    }
}
