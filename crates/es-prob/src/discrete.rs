//! Custom finite discrete distribution (a value → probability table).

use es_core::{DiscreteModel, DistributionKind, DistributionResult, Error, Result};

use crate::math::neumaier_sum;
use crate::validate::MAX_SUPPORT;

/// Allowed deviation of `Σp` from 1.
pub const SUM_TOLERANCE: f64 = 1e-3;

/// Validated PMF table, sorted by value.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSimulator {
    values: Vec<i64>,
    probabilities: Vec<f64>,
    mean: f64,
    variance: f64,
}

impl DiscreteSimulator {
    /// Validate a value/probability table.
    ///
    /// Values may be given in any order but must be distinct. Probabilities
    /// must lie in `[0, 1]` and sum to 1 within [`SUM_TOLERANCE`].
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] naming `values` or `probabilities`.
    pub fn new(values: &[i64], probabilities: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::invalid("values", "at least one value is required"));
        }
        if values.len() as u64 > MAX_SUPPORT {
            return Err(Error::invalid(
                "values",
                format!("at most {} values are supported, got {}", MAX_SUPPORT, values.len()),
            ));
        }
        if values.len() != probabilities.len() {
            return Err(Error::invalid(
                "probabilities",
                format!(
                    "expected one probability per value ({}), got {}",
                    values.len(),
                    probabilities.len()
                ),
            ));
        }
        for (i, &p) in probabilities.iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(Error::invalid(
                    "probabilities",
                    format!("probability #{} out of range [0, 1], got {}", i + 1, p),
                ));
            }
        }
        let total = neumaier_sum(probabilities.iter().copied());
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::invalid(
                "probabilities",
                format!("probabilities must sum to 1, got {}", total),
            ));
        }

        let mut table: Vec<(i64, f64)> =
            values.iter().copied().zip(probabilities.iter().copied()).collect();
        table.sort_by_key(|&(v, _)| v);
        if let Some(w) = table.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(Error::invalid("values", format!("duplicate value {}", w[0].0)));
        }
        let (values, probabilities): (Vec<i64>, Vec<f64>) = table.into_iter().unzip();

        let mean = neumaier_sum(values.iter().zip(&probabilities).map(|(&v, &p)| v as f64 * p));
        let variance = neumaier_sum(values.iter().zip(&probabilities).map(|(&v, &p)| {
            let d = v as f64 - mean;
            d * d * p
        }));

        Ok(Self { values, probabilities, mean, variance })
    }

    /// Validate and build the result in one call.
    pub fn compute(values: &[i64], probabilities: &[f64]) -> Result<DistributionResult> {
        Self::new(values, probabilities)?.distribution()
    }

    /// Sorted outcome values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Probabilities aligned with [`DiscreteSimulator::values`].
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// The table as a result (no tail: the support is the whole distribution).
    pub fn distribution(&self) -> Result<DistributionResult> {
        DistributionResult::new(
            DistributionKind::Discrete,
            self.values.clone(),
            self.probabilities.clone(),
            self.mean,
            self.variance,
            0.0,
        )
    }
}

impl DiscreteModel for DiscreteSimulator {
    fn name(&self) -> &str {
        "discrete"
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

fn tokens<'a>(field: &str, text: &'a str) -> Result<Vec<&'a str>> {
    if text.trim().is_empty() {
        return Err(Error::invalid(field, "no values given"));
    }
    text.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, tok)| {
            if tok.is_empty() {
                Err(Error::invalid(field, format!("entry #{} is empty", i + 1)))
            } else {
                Ok(tok)
            }
        })
        .collect()
}

/// Parse comma-separated integers, e.g. `"0, 1, 2"`.
pub fn parse_values(field: &str, text: &str) -> Result<Vec<i64>> {
    tokens(field, text)?
        .into_iter()
        .map(|tok| match tok.parse::<i64>() {
            Ok(v) => Ok(v),
            Err(_) if tok.parse::<f64>().is_ok() => {
                Err(Error::invalid(field, format!("`{}` must be an integer", tok)))
            }
            Err(_) => Err(Error::invalid(field, format!("`{}` is not a number", tok))),
        })
        .collect()
}

/// Parse comma-separated reals, e.g. `"0.2, 0.5, 0.3"`.
pub fn parse_probabilities(field: &str, text: &str) -> Result<Vec<f64>> {
    tokens(field, text)?
        .into_iter()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| Error::invalid(field, format!("`{}` is not a number", tok)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_sales_table() {
        let r = DiscreteSimulator::compute(&[0, 1, 2, 3, 4, 5], &[0.1, 0.2, 0.3, 0.2, 0.15, 0.05])
            .unwrap();
        assert_eq!(r.kind(), DistributionKind::Discrete);
        assert_relative_eq!(r.mean(), 2.25, epsilon = 1e-12);
        assert_relative_eq!(r.variance(), 1.7875, epsilon = 1e-12);
        assert_relative_eq!(r.std_dev(), 1.7875_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(r.tail_mass(), 0.0);
    }

    #[test]
    fn test_unsorted_input_is_sorted_with_masses() {
        let r = DiscreteSimulator::compute(&[3, -1, 7], &[0.5, 0.25, 0.25]).unwrap();
        assert_eq!(r.support(), &[-1, 3, 7]);
        assert_eq!(r.masses(), &[0.25, 0.5, 0.25]);
        assert_eq!(r.mass_at(3), Some(0.5));
    }

    #[test]
    fn test_sum_tolerance() {
        assert!(DiscreteSimulator::compute(&[0, 1], &[0.5, 0.5005]).is_ok());
        let err = DiscreteSimulator::compute(&[0, 1], &[0.5, 0.6]).unwrap_err();
        assert_eq!(err.field(), Some("probabilities"));
        assert!(err.to_string().contains("sum to 1"));
    }

    #[test]
    fn test_invalid_tables() {
        assert_eq!(DiscreteSimulator::compute(&[], &[]).unwrap_err().field(), Some("values"));
        assert_eq!(
            DiscreteSimulator::compute(&[0, 1], &[1.0]).unwrap_err().field(),
            Some("probabilities")
        );
        assert_eq!(
            DiscreteSimulator::compute(&[0, 1], &[1.5, -0.5]).unwrap_err().field(),
            Some("probabilities")
        );
        let err = DiscreteSimulator::compute(&[2, 2], &[0.5, 0.5]).unwrap_err();
        assert_eq!(err.field(), Some("values"));
        assert!(err.to_string().contains("duplicate value 2"));
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("values", "0,1, 2 ,3").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(parse_values("values", "-4").unwrap(), vec![-4]);
        let err = parse_values("values", "0,1.5").unwrap_err();
        assert!(err.to_string().contains("must be an integer"));
        let err = parse_values("values", "0,abc").unwrap_err();
        assert!(err.to_string().contains("not a number"));
        assert!(parse_values("values", "").is_err());
        assert!(parse_values("values", "1,,2").is_err());
    }

    #[test]
    fn test_parse_probabilities() {
        assert_eq!(parse_probabilities("probabilities", "0.25, 0.75").unwrap(), vec![0.25, 0.75]);
        let err = parse_probabilities("probabilities", "0.5;0.5").unwrap_err();
        assert_eq!(err.field(), Some("probabilities"));
    }
}
