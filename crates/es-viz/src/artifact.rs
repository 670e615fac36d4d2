//! Panel and dashboard artifacts (numbers-first).
//!
//! A panel is one chart: the PMF series, the moments and the explanation. A
//! dashboard wraps panels with provenance. Consumers plot `support` against
//! `masses` directly.

use std::time::{SystemTime, UNIX_EPOCH};

use es_core::{DistributionKind, DistributionRequest, DistributionResult, Result};
use serde::Serialize;

use crate::headline::headline;
use crate::kpi::{Kpi, kpis};
use crate::labels::PanelLabels;

/// Schema tag of [`DashboardArtifact`].
pub const DASHBOARD_SCHEMA: &str = "estatedist_dashboard_v0";

/// Schema tag of [`PanelArtifact`].
pub const PANEL_SCHEMA: &str = "estatedist_panel_v0";

/// Provenance stamped on every emitted document.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactMeta {
    /// Producing tool.
    pub tool: String,
    /// Tool version.
    pub tool_version: String,
    /// Creation time; `0` in deterministic mode.
    pub created_unix_ms: u128,
}

/// One chart: the PMF series, its KPIs and explanation.
#[derive(Debug, Clone, Serialize)]
pub struct PanelArtifact {
    /// Always [`PANEL_SCHEMA`].
    pub schema_version: String,
    /// Panel identifier (unique within a dashboard).
    pub id: String,
    /// Distribution kind.
    pub kind: DistributionKind,
    /// Chart decoration.
    pub labels: PanelLabels,
    /// Inputs the panel was computed from.
    pub request: DistributionRequest,
    /// X values (outcome counts).
    pub support: Vec<i64>,
    /// Bar heights aligned with `support`.
    pub masses: Vec<f64>,
    /// Probability outside the plotted support.
    pub tail_mass: f64,
    /// Expected value.
    pub mean: f64,
    /// Variance.
    pub variance: f64,
    /// Standard deviation.
    pub std_dev: f64,
    /// Summary cards.
    pub kpis: Vec<Kpi>,
    /// Plain-language explanation.
    pub headline: String,
}

/// A set of panels rendered together.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardArtifact {
    /// Always [`DASHBOARD_SCHEMA`].
    pub schema_version: String,
    /// Provenance.
    pub meta: ArtifactMeta,
    /// Panels, in configuration order.
    pub panels: Vec<PanelArtifact>,
}

fn now_unix_ms() -> Result<u128> {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| es_core::Error::Computation(format!("system time error: {}", e)))?;
    Ok(d.as_millis())
}

/// Build a panel from a request and its computed result.
///
/// `labels = None` uses [`PanelLabels::for_kind`].
pub fn panel_artifact(
    id: &str,
    request: &DistributionRequest,
    result: &DistributionResult,
    labels: Option<PanelLabels>,
) -> PanelArtifact {
    PanelArtifact {
        schema_version: PANEL_SCHEMA.to_string(),
        id: id.to_string(),
        kind: result.kind(),
        labels: labels.unwrap_or_else(|| PanelLabels::for_kind(result.kind())),
        request: request.clone(),
        support: result.support().to_vec(),
        masses: result.masses().to_vec(),
        tail_mass: result.tail_mass(),
        mean: result.mean(),
        variance: result.variance(),
        std_dev: result.std_dev(),
        kpis: kpis(result),
        headline: headline(request, result),
    }
}

/// Wrap panels into a dashboard document.
///
/// With `deterministic = true` the timestamp is zeroed so repeated runs are
/// byte-identical.
pub fn dashboard_artifact(panels: Vec<PanelArtifact>, deterministic: bool) -> Result<DashboardArtifact> {
    let created_unix_ms = if deterministic { 0 } else { now_unix_ms()? };
    Ok(DashboardArtifact {
        schema_version: DASHBOARD_SCHEMA.to_string(),
        meta: ArtifactMeta {
            tool: "estatedist".to_string(),
            tool_version: es_core::VERSION.to_string(),
            created_unix_ms,
        },
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_panel_artifact_contract() {
        let req = DistributionRequest::Poisson { rate: 4.0, max_k: Some(15) };
        let r = es_prob::compute(&req).unwrap();
        let panel = panel_artifact("contacts", &req, &r, None);
        assert_eq!(panel.support.len(), panel.masses.len());
        assert_eq!(panel.labels.color, "#b085f5");
        assert_abs_diff_eq!(panel.std_dev, 2.0);

        let v = serde_json::to_value(&panel).unwrap();
        assert_eq!(v["schema_version"], PANEL_SCHEMA);
        assert_eq!(v["kind"], "poisson");
        assert_eq!(v["request"]["kind"], "poisson");
        assert_eq!(v["request"]["max_k"], 15);
        assert_eq!(v["support"].as_array().unwrap().len(), 16);
        assert_eq!(v["kpis"][0]["display"], "4.00");
        assert!(v["tail_mass"].as_f64().unwrap() < 1e-3);
    }

    #[test]
    fn test_dashboard_deterministic_meta() {
        let req = DistributionRequest::Binomial { trials: 4, probability: 0.5 };
        let r = es_prob::compute(&req).unwrap();
        let labels = PanelLabels { title: "Custom".into(), ..PanelLabels::for_kind(r.kind()) };
        let dash = dashboard_artifact(vec![panel_artifact("b", &req, &r, Some(labels))], true).unwrap();
        assert_eq!(dash.schema_version, DASHBOARD_SCHEMA);
        assert_eq!(dash.meta.created_unix_ms, 0);
        assert_eq!(dash.panels[0].labels.title, "Custom");

        let a = serde_json::to_string(&dash).unwrap();
        let b = serde_json::to_string(&dashboard_artifact(dash.panels.clone(), true).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
