//! Core traits for estatedist
//!
//! Each simulator in `es-prob` is a validated, immutable parameter set that
//! knows its closed-form moments. The PMF itself is produced by the
//! simulator's `compute`, which needs per-distribution arguments.

/// A discrete distribution with closed-form moments.
pub trait DiscreteModel {
    /// Short distribution name (e.g., "binomial").
    fn name(&self) -> &str;

    /// Expected value.
    fn mean(&self) -> f64;

    /// Variance.
    fn variance(&self) -> f64;

    /// Standard deviation, `sqrt(variance)`.
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl DiscreteModel for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn mean(&self) -> f64 {
            1.0
        }

        fn variance(&self) -> f64 {
            2.25
        }
    }

    #[test]
    fn test_default_std_dev_is_sqrt_variance() {
        let m = Fixed;
        assert_eq!(m.name(), "fixed");
        assert_eq!(m.std_dev(), 1.5);
    }
}
