//! Core types for estatedist.
//!
//! Shared by the probability crate (`es-prob`), the artifact crate (`es-viz`)
//! and the CLI. Contains no numerics of its own.

#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::DiscreteModel;
pub use types::{DistributionKind, DistributionRequest, DistributionResult};

/// Crate version, stamped into emitted artifacts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
