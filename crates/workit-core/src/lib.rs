//! workit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the workit
//! template-to-project pipeline, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           workit-cli (CLI)              │
//! │   builds ScaffoldRequest, shows report  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ScaffoldService = TemplateFetcher      │
//! │                  → IdentityRewriter     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  Filesystem, VersionControl,            │
//! │  DependencyManager, ProgressObserver    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    workit-adapters (Infrastructure)     │
//! │  LocalFilesystem, GitClient, GoModules  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  ScaffoldRequest, IdentityPolicy,       │
//! │  IdentityRewrite, ScaffoldReport        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workit_core::prelude::*;
//!
//! let request = ScaffoldRequest::builder()
//!     .project_name("demo")
//!     .overwrite(false)
//!     .build()?;
//!
//! let service = ScaffoldService::new(
//!     TemplateFetcher::new(Box::new(GitClient::new()), Box::new(LocalFilesystem::new())),
//!     IdentityRewriter::new(Box::new(GoModules::new()), Box::new(LocalFilesystem::new())),
//! );
//! let report = service.scaffold(&request, &NoopObserver)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        IdentityRewriter, RewriteSummary, ScaffoldService, TemplateFetcher,
        ports::{
            CloneOutcome, CommandFailure, DependencyManager, Filesystem, NoopObserver,
            ProgressObserver, ScaffoldEvent, VersionControl,
        },
    };
    pub use crate::domain::{
        CANONICAL_TEMPLATE_IDENTITY, IdentityPolicy, IdentityRewrite, ScaffoldReport,
        ScaffoldRequest, ScaffoldRequestBuilder, Substitution,
    };
    pub use crate::error::{WorkitError, WorkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
