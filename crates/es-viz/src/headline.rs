//! Plain-language explanation of a panel.
//!
//! Written for agency owners, not statisticians.

use es_core::{DistributionRequest, DistributionResult};

/// Probability as a percentage with at most one decimal (`0.3` → `30`).
fn percent(p: f64) -> f64 {
    (p * 1000.0).round() / 10.0
}

/// Explain a computed panel in one sentence for a non-statistician.
pub fn headline(request: &DistributionRequest, result: &DistributionResult) -> String {
    match request {
        DistributionRequest::Binomial { trials, probability } => format!(
            "With {} visits and a {}% chance of closing per visit, you can expect on average {:.1} closed contracts.",
            trials,
            percent(*probability),
            result.mean()
        ),
        DistributionRequest::Poisson { rate, .. } => format!(
            "If on average {} clients get in touch per day, this chart shows the chance of receiving more or fewer contacts.",
            rate
        ),
        DistributionRequest::Discrete { .. } => format!(
            "On average your agency can expect to sell {:.1} properties per month.",
            result.mean()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_headline() {
        let req = DistributionRequest::Binomial { trials: 10, probability: 0.3 };
        let r = es_prob::compute(&req).unwrap();
        assert_eq!(
            headline(&req, &r),
            "With 10 visits and a 30% chance of closing per visit, you can expect on average 3.0 closed contracts."
        );
    }

    #[test]
    fn test_poisson_and_discrete_headlines() {
        let req = DistributionRequest::Poisson { rate: 5.0, max_k: None };
        let r = es_prob::compute(&req).unwrap();
        assert!(headline(&req, &r).starts_with("If on average 5 clients"));

        let req = DistributionRequest::Discrete {
            values: vec![1, 2, 4],
            probabilities: vec![0.2, 0.3, 0.5],
        };
        let r = es_prob::compute(&req).unwrap();
        assert_eq!(headline(&req, &r), "On average your agency can expect to sell 2.8 properties per month.");
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(0.125), 12.5);
        assert_eq!(percent(1.0), 100.0);
    }
}
