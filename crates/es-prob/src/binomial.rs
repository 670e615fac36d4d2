//! Binomial distribution: successes in `n` independent trials.

use es_core::{DiscreteModel, DistributionKind, DistributionResult, Error, Result};

use crate::math::ln_choose;
use crate::validate;

/// Log-PMF of a Binomial distribution `Binom(n, p)` at count `k`.
pub fn logpmf(k: u64, n: u64, p: f64) -> Result<f64> {
    let p = validate::probability(p)?;
    if k > n {
        return Err(Error::invalid("k", format!("k must be <= n, got k={} n={}", k, n)));
    }
    Ok(logpmf_unchecked(k, n, p))
}

fn logpmf_unchecked(k: u64, n: u64, p: f64) -> f64 {
    if p == 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    if p == 1.0 {
        return if k == n { 0.0 } else { f64::NEG_INFINITY };
    }
    let kf = k as f64;
    let nf = n as f64;
    // ln_1p keeps (1-p)^(n-k) accurate when p is tiny.
    ln_choose(n, k) + kf * p.ln() + (nf - kf) * (-p).ln_1p()
}

/// Validated `Binom(trials, probability)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialSimulator {
    trials: u64,
    probability: f64,
}

impl BinomialSimulator {
    /// Validate raw inputs.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] naming `trials` or `probability`.
    pub fn new(trials: i64, probability: f64) -> Result<Self> {
        let trials = validate::trials(trials)?;
        let probability = validate::probability(probability)?;
        Ok(Self { trials, probability })
    }

    /// Validate and compute the full PMF on `[0, trials]` in one call.
    pub fn compute(trials: i64, probability: f64) -> Result<DistributionResult> {
        Self::new(trials, probability)?.distribution()
    }

    /// Number of trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Per-trial success probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// `P(X = k)`; zero outside `[0, trials]`.
    pub fn pmf(&self, k: u64) -> f64 {
        if k > self.trials {
            return 0.0;
        }
        // exp(-inf) == 0 for impossible outcomes.
        logpmf_unchecked(k, self.trials, self.probability).exp().min(1.0)
    }

    /// PMF over the whole support `[0, trials]` plus moments.
    pub fn distribution(&self) -> Result<DistributionResult> {
        let support: Vec<i64> = (0..=self.trials as i64).collect();
        let masses: Vec<f64> = (0..=self.trials).map(|k| self.pmf(k)).collect();
        DistributionResult::new(
            DistributionKind::Binomial,
            support,
            masses,
            self.mean(),
            self.variance(),
            0.0,
        )
    }
}

impl DiscreteModel for BinomialSimulator {
    fn name(&self) -> &str {
        "binomial"
    }

    fn mean(&self) -> f64 {
        self.trials as f64 * self.probability
    }

    fn variance(&self) -> f64 {
        self.trials as f64 * self.probability * (1.0 - self.probability)
    }
}
