//! Poisson distribution: event counts at a constant average rate.
//!
//! # Truncation policy
//!
//! The support is unbounded, so a result only displays `[0, max_k]`. When the
//! caller does not choose `max_k`, [`default_max_k`] uses
//! `ceil(rate + 10·sqrt(rate) + 10)`: ten standard deviations past the mean
//! plus a fixed pad for small rates. The retained mass is then above 0.999 for
//! every rate. Every result still carries the exact mass beyond `max_k` in
//! [`DistributionResult::tail_mass`], so truncation is never silent.

use es_core::{DiscreteModel, DistributionKind, DistributionResult, Error, Result};
use statrs::function::gamma::gamma_lr;

use crate::math::ln_factorial;
use crate::validate::{self, MAX_SUPPORT};

const TAIL_SIGMAS: f64 = 10.0;
const TAIL_PAD: f64 = 10.0;

/// Log-PMF of `Poisson(lambda)` at count `k`.
pub fn logpmf(k: u64, lambda: f64) -> Result<f64> {
    let lambda = validate::rate(lambda)?;
    Ok(logpmf_unchecked(k, lambda))
}

fn logpmf_unchecked(k: u64, lambda: f64) -> f64 {
    if lambda == 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    // k ln λ - λ - ln k!  (never forms λ^k or k!)
    (k as f64) * lambda.ln() - lambda - ln_factorial(k)
}

/// `P(X > max_k)` for `X ~ Poisson(lambda)`.
///
/// Uses `P(X <= k) = Q(k + 1, λ)`, so the tail is the regularized lower
/// incomplete gamma `P(k + 1, λ)`.
pub fn tail_mass(max_k: u64, lambda: f64) -> f64 {
    if lambda == 0.0 {
        return 0.0;
    }
    gamma_lr(max_k as f64 + 1.0, lambda).clamp(0.0, 1.0)
}

/// Default display bound for a (validated) rate.
pub fn default_max_k(rate: f64) -> u64 {
    (rate + TAIL_SIGMAS * rate.sqrt() + TAIL_PAD).ceil() as u64
}

/// Validated `Poisson(rate)` displayed on `[0, max_k]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonSimulator {
    rate: f64,
    max_k: u64,
}

impl PoissonSimulator {
    /// Validate a rate and an explicit display bound.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] naming `rate` or `max_k`.
    pub fn new(rate: f64, max_k: i64) -> Result<Self> {
        let rate = validate::rate(rate)?;
        let max_k = validate::max_k(max_k)?;
        Ok(Self { rate, max_k })
    }

    /// Validate a rate and apply the default truncation policy.
    pub fn with_default_support(rate: f64) -> Result<Self> {
        let rate = validate::rate(rate)?;
        let max_k = default_max_k(rate);
        if max_k > MAX_SUPPORT {
            return Err(Error::invalid(
                "rate",
                format!("rate {} needs a support wider than {} points", rate, MAX_SUPPORT),
            ));
        }
        Ok(Self { rate, max_k })
    }

    /// Validate and compute the PMF on `[0, max_k]` in one call.
    pub fn compute(rate: f64, max_k: i64) -> Result<DistributionResult> {
        Self::new(rate, max_k)?.distribution()
    }

    /// Like [`PoissonSimulator::compute`] with `max_k` from [`default_max_k`].
    pub fn compute_default(rate: f64) -> Result<DistributionResult> {
        Self::with_default_support(rate)?.distribution()
    }

    /// Average number of events.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Last displayed count.
    pub fn max_k(&self) -> u64 {
        self.max_k
    }

    /// `P(X = k)`.
    pub fn pmf(&self, k: u64) -> f64 {
        logpmf_unchecked(k, self.rate).exp().min(1.0)
    }

    /// PMF over `[0, max_k]` plus moments and the truncated tail.
    pub fn distribution(&self) -> Result<DistributionResult> {
        let support: Vec<i64> = (0..=self.max_k as i64).collect();
        let masses: Vec<f64> = (0..=self.max_k).map(|k| self.pmf(k)).collect();
        let tail = tail_mass(self.max_k, self.rate);
        if tail > 1e-3 {
            tracing::debug!(rate = self.rate, max_k = self.max_k, tail, "poisson support truncates visible mass");
        }
        DistributionResult::new(
            DistributionKind::Poisson,
            support,
            masses,
            self.mean(),
            self.variance(),
            tail,
        )
    }
}

impl DiscreteModel for PoissonSimulator {
    fn name(&self) -> &str {
        "poisson"
    }

    fn mean(&self) -> f64 {
        self.rate
    }

    fn variance(&self) -> f64 {
        self.rate
    }
}
