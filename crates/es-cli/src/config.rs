//! Dashboard configuration (YAML or JSON).
//!
//! A config lists the panels to compute; each panel carries a tagged
//! distribution request plus optional chart decoration overrides:
//!
//! ```yaml
//! schema_version: estatedist_dashboard_config_v0
//! deterministic: true
//! panels:
//!   - id: sales_per_visit
//!     request: { kind: binomial, trials: 10, probability: 0.3 }
//!   - id: contacts_per_day
//!     title: Daily contacts
//!     request: { kind: poisson, rate: 5 }
//! ```

use anyhow::Result;
use es_core::DistributionRequest;
use es_viz::PanelLabels;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub const CONFIG_V0: &str = "estatedist_dashboard_config_v0";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Optional schema tag; when present it must be [`CONFIG_V0`].
    #[serde(default)]
    pub schema_version: Option<String>,

    /// Zero the artifact timestamp for reproducible output.
    #[serde(default)]
    pub deterministic: bool,

    pub panels: Vec<PanelConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    pub id: String,
    pub request: DistributionRequest,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl PanelConfig {
    pub fn labels(&self) -> PanelLabels {
        let defaults = PanelLabels::for_kind(self.request.kind());
        PanelLabels {
            title: self.title.clone().unwrap_or(defaults.title),
            x_label: self.x_label.clone().unwrap_or(defaults.x_label),
            y_label: self.y_label.clone().unwrap_or(defaults.y_label),
            color: self.color.clone().unwrap_or(defaults.color),
        }
    }
}

impl Default for DashboardConfig {
    /// The stock dashboard: conversions from 10 visits at 30%, 5 contacts per
    /// day, and the example monthly sales table.
    fn default() -> Self {
        let panel = |id: &str, request| PanelConfig {
            id: id.to_string(),
            request,
            title: None,
            x_label: None,
            y_label: None,
            color: None,
        };
        Self {
            schema_version: Some(CONFIG_V0.to_string()),
            deterministic: false,
            panels: vec![
                panel(
                    "sales_per_visit",
                    DistributionRequest::Binomial { trials: 10, probability: 0.3 },
                ),
                panel("contacts_per_day", DistributionRequest::Poisson { rate: 5.0, max_k: None }),
                panel(
                    "sales_per_month",
                    DistributionRequest::Discrete {
                        values: vec![0, 1, 2, 3, 4, 5],
                        probabilities: vec![0.1, 0.2, 0.3, 0.2, 0.15, 0.05],
                    },
                ),
            ],
        }
    }
}

impl DashboardConfig {
    /// Structural checks that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        match self.schema_version.as_deref() {
            None | Some(CONFIG_V0) => {}
            Some(v) => anyhow::bail!("unsupported schema_version `{}` (expected `{}`)", v, CONFIG_V0),
        }
        if self.panels.is_empty() {
            anyhow::bail!("dashboard config must define at least one panel");
        }
        let mut seen = HashSet::new();
        for p in &self.panels {
            if p.id.trim().is_empty() {
                anyhow::bail!("panel id must be non-empty");
            }
            if !seen.insert(p.id.as_str()) {
                anyhow::bail!("duplicate panel id `{}`", p.id);
            }
        }
        Ok(())
    }
}

pub fn read_dashboard_config(path: &Path) -> Result<DashboardConfig> {
    let bytes = std::fs::read(path)?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
    let cfg: DashboardConfig = if ext == "json" {
        serde_json::from_slice(&bytes)?
    } else {
        // Default: YAML (serde_yaml_ng).
        serde_yaml_ng::from_slice(&bytes)?
    };
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = DashboardConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.panels.len(), 3);
        assert_eq!(cfg.panels[1].labels().color, "#b085f5");
    }

    #[test]
    fn test_yaml_overrides_labels() {
        let yaml = r#"
panels:
  - id: visits
    title: Conversions
    request: { kind: binomial, trials: 20, probability: 0.25 }
"#;
        let cfg: DashboardConfig = serde_yaml_ng::from_str(yaml).unwrap();
        cfg.validate().unwrap();
        let labels = cfg.panels[0].labels();
        assert_eq!(labels.title, "Conversions");
        assert_eq!(labels.x_label, "Number of contracts closed");
        assert_eq!(cfg.panels[0].request, DistributionRequest::Binomial { trials: 20, probability: 0.25 });
    }

    #[test]
    fn test_rejects_duplicate_ids_and_bad_schema() {
        let yaml = r#"
panels:
  - id: a
    request: { kind: poisson, rate: 1 }
  - id: a
    request: { kind: poisson, rate: 2 }
"#;
        let cfg: DashboardConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(cfg.validate().unwrap_err().to_string().contains("duplicate panel id"));

        let mut cfg = DashboardConfig::default();
        cfg.schema_version = Some("something_else".into());
        assert!(cfg.validate().is_err());

        cfg = DashboardConfig { panels: vec![], ..DashboardConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let yaml = "panels: []\ncolour: red\n";
        assert!(serde_yaml_ng::from_str::<DashboardConfig>(yaml).is_err());
    }
}
