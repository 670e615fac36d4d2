//! # es-viz
//!
//! Chart artifacts for estatedist.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (arrays instead of nested objects) plus a
//! plain-text rendering for terminals. It never computes probabilities
//! itself; it formats a [`es_core::DistributionResult`].

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Panel and dashboard artifacts.
pub mod artifact;

/// One-line plain-language explanations.
pub mod headline;

/// Summary statistic cards (mean / variance / std-dev).
pub mod kpi;

/// Per-kind chart titles, axis labels and colours.
pub mod labels;

/// Plain-text bar chart rendering.
pub mod text;

pub use artifact::{ArtifactMeta, DashboardArtifact, PanelArtifact, dashboard_artifact, panel_artifact};
pub use headline::headline;
pub use kpi::{Kpi, kpis};
pub use labels::PanelLabels;
pub use text::render_text;
