//! Unified error handling for workit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for workit Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkitError {
    /// Errors from the domain layer (invalid requests).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline step failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl WorkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// The pipeline step failure, if this is one.
    pub fn as_application(&self) -> Option<&ApplicationError> {
        match self {
            Self::Application(e) => Some(e),
            Self::Domain(_) => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type WorkitResult<T> = Result<T, WorkitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn application_errors_display_without_wrapper_prefix() {
        let err: WorkitError = ApplicationError::AlreadyExists {
            path: PathBuf::from("demo"),
        }
        .into();
        assert_eq!(err.to_string(), "Directory already exists: demo");
    }

    #[test]
    fn category_is_delegated() {
        let err: WorkitError = ApplicationError::ToolingUnavailable { tool: "git".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);

        let err: WorkitError = DomainError::MissingRequiredField {
            field: "project name",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn only_pipeline_failures_expose_an_application_error() {
        let err: WorkitError = DomainError::ZeroTimeout.into();
        assert!(err.as_application().is_none());

        let err: WorkitError = ApplicationError::ToolingUnavailable { tool: "git".into() }.into();
        assert_eq!(
            err.as_application().map(ApplicationError::kind),
            Some("tooling_unavailable")
        );
    }
}
