//! Common data types for estatedist

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which distribution a request or result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    /// Number of successes in a fixed number of independent trials.
    Binomial,
    /// Number of events in a fixed interval at a constant average rate.
    Poisson,
    /// User-supplied finite PMF (value → probability table).
    Discrete,
}

impl DistributionKind {
    /// Lowercase name, as used in artifacts and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            DistributionKind::Binomial => "binomial",
            DistributionKind::Poisson => "poisson",
            DistributionKind::Discrete => "discrete",
        }
    }
}

impl std::fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, not-yet-validated inputs for a single forward computation.
///
/// Integer fields are signed on purpose: the presentation layer may hand over
/// a negative count, which must be reported as an invalid parameter rather
/// than being unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionRequest {
    /// `Binom(trials, probability)`.
    Binomial {
        /// Number of trials, `>= 0`.
        trials: i64,
        /// Per-trial success probability in `[0, 1]`.
        probability: f64,
    },
    /// `Poisson(rate)` displayed on `[0, max_k]`.
    Poisson {
        /// Average number of events, `>= 0`.
        rate: f64,
        /// Last displayed count. `None` applies the default truncation policy.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_k: Option<i64>,
    },
    /// Custom finite PMF.
    Discrete {
        /// Outcome values (distinct integers).
        values: Vec<i64>,
        /// Probability of each value, summing to 1.
        probabilities: Vec<f64>,
    },
}

impl DistributionRequest {
    /// Distribution kind of this request.
    pub fn kind(&self) -> DistributionKind {
        match self {
            DistributionRequest::Binomial { .. } => DistributionKind::Binomial,
            DistributionRequest::Poisson { .. } => DistributionKind::Poisson,
            DistributionRequest::Discrete { .. } => DistributionKind::Discrete,
        }
    }
}

/// PMF over a finite support plus summary moments.
///
/// Immutable once built: `std_dev == sqrt(variance)` and
/// `support.len() == masses.len()` hold for every value of this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionResult {
    kind: DistributionKind,
    support: Vec<i64>,
    masses: Vec<f64>,
    mean: f64,
    variance: f64,
    std_dev: f64,
    tail_mass: f64,
}

impl DistributionResult {
    /// Assemble a result. `std_dev` is derived from `variance`.
    ///
    /// `tail_mass` is the probability outside the displayed support
    /// (zero for finite-support distributions).
    pub fn new(
        kind: DistributionKind,
        support: Vec<i64>,
        masses: Vec<f64>,
        mean: f64,
        variance: f64,
        tail_mass: f64,
    ) -> Result<Self> {
        if support.len() != masses.len() {
            return Err(Error::Computation(format!(
                "support/masses length mismatch: {} vs {}",
                support.len(),
                masses.len()
            )));
        }
        Ok(Self { kind, support, masses, mean, variance, std_dev: variance.sqrt(), tail_mass })
    }

    /// Distribution kind.
    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    /// Outcome values, ascending.
    pub fn support(&self) -> &[i64] {
        &self.support
    }

    /// Probability of each support value.
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Expected value.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Variance.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Probability mass beyond the displayed support.
    pub fn tail_mass(&self) -> f64 {
        self.tail_mass
    }

    /// Sum of the displayed masses.
    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Number of support points.
    pub fn len(&self) -> usize {
        self.support.len()
    }

    /// `true` if the support is empty.
    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }

    /// Mass at outcome `k`, or `None` if `k` is not in the displayed support.
    pub fn mass_at(&self, k: i64) -> Option<f64> {
        self.support.binary_search(&k).ok().map(|i| self.masses[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_result_derives_std_dev() {
        let r = DistributionResult::new(
            DistributionKind::Discrete,
            vec![0, 1],
            vec![0.5, 0.5],
            0.5,
            0.25,
            0.0,
        )
        .unwrap();
        assert_relative_eq!(r.std_dev(), 0.5);
        assert_relative_eq!(r.std_dev() * r.std_dev(), r.variance());
        assert_eq!(r.len(), 2);
        assert_eq!(r.mass_at(1), Some(0.5));
        assert_eq!(r.mass_at(2), None);
        assert_relative_eq!(r.total_mass(), 1.0);
    }

    #[test]
    fn test_result_rejects_length_mismatch() {
        let err =
            DistributionResult::new(DistributionKind::Poisson, vec![0, 1, 2], vec![1.0], 0.0, 0.0, 0.0)
                .unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_request_tagged_json() {
        let req: DistributionRequest =
            serde_json::from_str(r#"{"kind":"binomial","trials":10,"probability":0.3}"#).unwrap();
        assert_eq!(req, DistributionRequest::Binomial { trials: 10, probability: 0.3 });
        assert_eq!(req.kind(), DistributionKind::Binomial);

        let req: DistributionRequest = serde_json::from_str(r#"{"kind":"poisson","rate":4.0}"#).unwrap();
        assert_eq!(req, DistributionRequest::Poisson { rate: 4.0, max_k: None });

        let out = serde_json::to_value(&req).unwrap();
        assert!(out.get("max_k").is_none());
        assert_eq!(out["kind"], "poisson");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DistributionKind::Discrete.to_string(), "discrete");
        assert_eq!(
            serde_json::to_value(DistributionKind::Poisson).unwrap(),
            serde_json::json!("poisson")
        );
    }
}
