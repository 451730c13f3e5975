//! Application layer for workit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TemplateFetcher, IdentityRewriter,
//!   ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Pipeline step failures
//!
//! The application layer sequences the pipeline; identity selection and
//! substitution rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{IdentityRewriter, RewriteSummary, ScaffoldService, TemplateFetcher};

// Re-export port traits (for adapter implementation)
pub use ports::{DependencyManager, Filesystem, ProgressObserver, VersionControl};

pub use error::ApplicationError;
