//! Domain error types.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Cannot resolve project path: {reason}")]
    UnresolvablePath { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Enter a non-empty project name".into(),
                "Examples: my-ai-project, rag_demo, assistant42".into(),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use only letters, digits, hyphens, and underscores".into(),
                "Examples: my-ai-project, rag_demo, assistant42".into(),
            ],
            Self::UnresolvablePath { reason } => vec![
                format!("Path resolution failed: {}", reason),
                "Check that the current working directory still exists".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName | Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnresolvablePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
