//! Probability building blocks for estatedist.
//!
//! This crate hosts the PMF computations behind the dashboard panels:
//! - Binomial (conversions out of a number of visits)
//! - Poisson (contacts per day), with an explicit truncation policy
//! - custom finite tables (sales per month)
//!
//! All inputs are validated up front (see [`validate`]); once a simulator is
//! built its computation cannot fail on domain grounds.

pub mod binomial;
pub mod discrete;
pub mod dispatch;
pub mod math;
pub mod poisson;
pub mod validate;

pub use binomial::BinomialSimulator;
pub use discrete::DiscreteSimulator;
pub use dispatch::compute;
pub use poisson::PoissonSimulator;
