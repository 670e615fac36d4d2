//! Route a [`DistributionRequest`] to its simulator.

use es_core::{DistributionRequest, DistributionResult, Result};

use crate::binomial::BinomialSimulator;
use crate::discrete::DiscreteSimulator;
use crate::poisson::PoissonSimulator;

/// Validate `request` and compute its distribution.
///
/// Pure: identical requests yield bit-identical results.
pub fn compute(request: &DistributionRequest) -> Result<DistributionResult> {
    let result = match request {
        DistributionRequest::Binomial { trials, probability } => {
            BinomialSimulator::compute(*trials, *probability)?
        }
        DistributionRequest::Poisson { rate, max_k: Some(max_k) } => {
            PoissonSimulator::compute(*rate, *max_k)?
        }
        DistributionRequest::Poisson { rate, max_k: None } => PoissonSimulator::compute_default(*rate)?,
        DistributionRequest::Discrete { values, probabilities } => {
            DiscreteSimulator::compute(values, probabilities)?
        }
    };
    tracing::debug!(
        kind = %result.kind(),
        support_len = result.len(),
        mean = result.mean(),
        "distribution computed"
    );
    Ok(result)
}
