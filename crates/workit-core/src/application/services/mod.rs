//! Application services - orchestrate use cases.
//!
//! `TemplateFetcher` and `IdentityRewriter` are the two pipeline stages;
//! `ScaffoldService` runs them in sequence and builds the report.

pub mod fetch_service;
pub mod rewrite_service;
pub mod scaffold_service;

pub use fetch_service::TemplateFetcher;
pub use rewrite_service::{IdentityRewriter, RewriteSummary};
pub use scaffold_service::ScaffoldService;

#[cfg(test)]
pub(crate) mod test_support;
