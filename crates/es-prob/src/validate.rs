//! Parameter validation shared by the simulators.
//!
//! Every check runs before any numerics; a request that passes here cannot
//! fail during computation.

use es_core::{Error, Result};

/// Largest accepted `trials` / `max_k`. Keeps worst-case latency bounded.
pub const MAX_SUPPORT: u64 = 1_000_000;

/// Number of trials: integer in `[0, MAX_SUPPORT]`.
pub fn trials(raw: i64) -> Result<u64> {
    if raw < 0 {
        return Err(Error::invalid("trials", format!("trials must be >= 0, got {}", raw)));
    }
    let n = raw as u64;
    if n > MAX_SUPPORT {
        return Err(Error::invalid(
            "trials",
            format!("trials must be <= {}, got {}", MAX_SUPPORT, n),
        ));
    }
    Ok(n)
}

/// Success probability: finite, in `[0, 1]`.
pub fn probability(p: f64) -> Result<f64> {
    if !p.is_finite() {
        return Err(Error::invalid("probability", format!("probability must be finite, got {}", p)));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid(
            "probability",
            format!("probability out of range [0, 1], got {}", p),
        ));
    }
    Ok(p)
}

/// Poisson rate: finite, `>= 0`.
pub fn rate(lambda: f64) -> Result<f64> {
    if !lambda.is_finite() {
        return Err(Error::invalid("rate", format!("rate must be finite, got {}", lambda)));
    }
    if lambda < 0.0 {
        return Err(Error::invalid("rate", format!("rate must be >= 0, got {}", lambda)));
    }
    Ok(lambda)
}

/// Displayed support bound: integer in `[1, MAX_SUPPORT]`.
pub fn max_k(raw: i64) -> Result<u64> {
    if raw < 1 {
        return Err(Error::invalid("max_k", format!("max_k must be >= 1, got {}", raw)));
    }
    let k = raw as u64;
    if k > MAX_SUPPORT {
        return Err(Error::invalid("max_k", format!("max_k must be <= {}, got {}", MAX_SUPPORT, k)));
    }
    Ok(k)
}

/// Interpret a real number as a non-negative integer count.
///
/// Rejects non-finite, negative and fractional values. Presentation layers
/// that only have floating-point inputs (sliders, JSON numbers) go through
/// this before calling [`trials`] or [`max_k`].
pub fn count_from_f64(field: &str, x: f64) -> Result<i64> {
    if !x.is_finite() {
        return Err(Error::invalid(field, format!("{} must be finite, got {}", field, x)));
    }
    if x.fract() != 0.0 {
        return Err(Error::invalid(field, format!("{} must be an integer, got {}", field, x)));
    }
    if x < 0.0 {
        return Err(Error::invalid(field, format!("{} must be >= 0, got {}", field, x)));
    }
    if x > MAX_SUPPORT as f64 {
        return Err(Error::invalid(field, format!("{} must be <= {}, got {}", field, MAX_SUPPORT, x)));
    }
    Ok(x as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trials_bounds() {
        assert_eq!(trials(0).unwrap(), 0);
        assert_eq!(trials(10).unwrap(), 10);
        assert_eq!(trials(-1).unwrap_err().field(), Some("trials"));
        assert!(trials(MAX_SUPPORT as i64 + 1).is_err());
    }

    #[test]
    fn test_probability_bounds() {
        assert_eq!(probability(0.0).unwrap(), 0.0);
        assert_eq!(probability(1.0).unwrap(), 1.0);
        let err = probability(1.5).unwrap_err();
        assert_eq!(err.field(), Some("probability"));
        assert!(err.to_string().contains("out of range"));
        assert!(probability(-0.01).is_err());
        assert!(probability(f64::NAN).is_err());
    }

    #[test]
    fn test_rate_bounds() {
        assert_eq!(rate(0.0).unwrap(), 0.0);
        assert_eq!(rate(-2.0).unwrap_err().field(), Some("rate"));
        assert!(rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_max_k_bounds() {
        assert_eq!(max_k(1).unwrap(), 1);
        assert_eq!(max_k(0).unwrap_err().field(), Some("max_k"));
        assert!(max_k(-5).is_err());
        assert!(max_k(2_000_000).is_err());
    }

    #[test]
    fn test_count_from_f64() {
        assert_eq!(count_from_f64("trials", 12.0).unwrap(), 12);
        let err = count_from_f64("trials", 2.5).unwrap_err();
        assert_eq!(err.field(), Some("trials"));
        assert!(err.to_string().contains("integer"));
        assert!(count_from_f64("trials", -1.0).is_err());
        assert!(count_from_f64("max_k", f64::NAN).is_err());
    }
}
