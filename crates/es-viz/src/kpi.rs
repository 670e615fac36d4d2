//! Summary statistic cards shown under each chart.

use es_core::DistributionResult;
use serde::{Deserialize, Serialize};

/// A single summary statistic, with its display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    /// Card label.
    pub label: String,
    /// Raw value.
    pub value: f64,
    /// `value` rounded to two decimals.
    pub display: String,
}

impl Kpi {
    /// Build a KPI with the standard two-decimal display.
    pub fn new(label: &str, value: f64) -> Self {
        Self { label: label.to_string(), value, display: format!("{:.2}", value) }
    }
}

/// Mean, variance and standard deviation cards, in that order.
pub fn kpis(result: &DistributionResult) -> Vec<Kpi> {
    vec![
        Kpi::new("Expected mean", result.mean()),
        Kpi::new("Variance", result.variance()),
        Kpi::new("Standard deviation", result.std_dev()),
    ]
}
