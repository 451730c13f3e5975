//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `workit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `VersionControl`: Bounded template clone
//!   - `DependencyManager`: Module identity edit and dependency resolution
//!   - `ProgressObserver`: Operator-visible progress
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CloneOutcome, CommandFailure, DependencyManager, Filesystem, NoopObserver, ProgressObserver,
    ScaffoldEvent, VersionControl,
};

#[cfg(test)]
pub use output::{MockDependencyManager, MockVersionControl};
