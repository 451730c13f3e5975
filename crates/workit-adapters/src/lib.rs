//! Infrastructure adapters for workit.
//!
//! This crate implements the ports defined in `workit-core::application::ports`.
//! It contains all external dependencies and I/O operations: the local
//! filesystem, the `git` client and the `go` module tooling.

pub mod deps;
pub mod filesystem;
pub mod process;
pub mod vcs;

// Re-export commonly used adapters
pub use deps::GoModules;
pub use filesystem::LocalFilesystem;
pub use vcs::GitClient;
