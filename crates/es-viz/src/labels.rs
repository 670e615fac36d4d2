//! Default chart decoration per distribution kind.

use es_core::DistributionKind;
use serde::{Deserialize, Serialize};

/// Chart decoration for one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLabels {
    /// Chart title.
    pub title: String,
    /// X-axis label (the counted outcome).
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Bar colour (CSS hex).
    pub color: String,
}

impl PanelLabels {
    /// Default decoration for each dashboard panel.
    pub fn for_kind(kind: DistributionKind) -> Self {
        let (title, x_label, color) = match kind {
            DistributionKind::Binomial => {
                ("Distribution of closed contracts", "Number of contracts closed", "#8e66c6")
            }
            DistributionKind::Poisson => {
                ("Distribution of daily contacts", "Number of contacts", "#b085f5")
            }
            DistributionKind::Discrete => {
                ("Distribution of monthly sales", "Number of properties sold", "#d0bdf4")
            }
        };
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: "Probability".to_string(),
            color: color.to_string(),
        }
    }
}
