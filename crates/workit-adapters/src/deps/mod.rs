//! Dependency-manager adapters.

mod go;

pub use go::GoModules;
