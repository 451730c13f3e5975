// ============================================================================
// domain/error.rs - REQUEST VALIDATION ERRORS
// ============================================================================

use std::time::Duration;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid template {field}: {reason}")]
    InvalidTemplateSpec { field: &'static str, reason: String },

    #[error("Fetch timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Fetch timeout of {}s exceeds the maximum of {}s", requested.as_secs(), max.as_secs())]
    TimeoutTooLarge { requested: Duration, max: Duration },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name becomes both the directory and the Go module path".into(),
                "Use relative '/'-separated segments of letters, digits, '-', '_' and '.'".into(),
                "Examples: demo, order_api, github.com/acme/svc".into(),
            ],
            Self::InvalidTemplateSpec { field, .. } => vec![
                format!("Check the template {}", field),
                "Pass --template <URL> and --branch <REF> explicitly".into(),
            ],
            Self::ZeroTimeout => vec!["Use --timeout with a value of at least 1 second".into()],
            Self::TimeoutTooLarge { max, .. } => vec![format!(
                "Use --timeout with a value of at most {} seconds",
                max.as_secs()
            )],
            Self::MissingRequiredField { field } => vec![format!("Provide a {}", field)],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
