// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for workit.
//!
//! This module contains pure logic with no I/O: the scaffold request, the
//! identity selection policy, the textual substitution, and the report.
//! Cloning, process execution and file access are reached through the ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: the request is built once and never mutated
//!
pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    identity::{
        CANONICAL_TEMPLATE_IDENTITY, IdentityPolicy, IdentityRewrite, METADATA_DIR,
        SOURCE_EXTENSION, Substitution,
    },
    report::{DEFAULT_SERVICE_PORT, NextSteps, ScaffoldReport},
    request::{
        DEFAULT_FETCH_TIMEOUT, DEFAULT_TEMPLATE_REF, DEFAULT_TEMPLATE_SOURCE, HasName,
        MAX_FETCH_TIMEOUT, NoName, ScaffoldRequest, ScaffoldRequestBuilder,
    },
};

pub use error::DomainError;
pub use validation::DomainValidator;
