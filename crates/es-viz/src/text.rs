//! Terminal rendering of a panel: horizontal bars, then the KPI cards.

use std::fmt::Write;

use crate::artifact::PanelArtifact;

const BAR_WIDTH: usize = 40;

/// Rows whose mass is below this fraction of the peak are hidden at the edges.
const EDGE_CUTOFF: f64 = 1e-3;

/// Render a panel as a horizontal bar chart followed by its KPIs.
pub fn render_text(panel: &PanelArtifact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", panel.labels.title);
    let _ = writeln!(out, "{} | {}", panel.labels.x_label, panel.labels.y_label);

    let peak = panel.masses.iter().copied().fold(0.0_f64, f64::max);
    let visible = |m: f64| peak > 0.0 && m >= peak * EDGE_CUTOFF;
    let first = panel.masses.iter().position(|&m| visible(m)).unwrap_or(0);
    let last = panel.masses.iter().rposition(|&m| visible(m)).unwrap_or(0);
    let label_width =
        panel.support.iter().map(|k| k.to_string().len()).max().unwrap_or(1).max(1);

    if !panel.masses.is_empty() {
        for i in first..=last {
            let m = panel.masses[i];
            let len = if peak > 0.0 { ((m / peak) * BAR_WIDTH as f64).round() as usize } else { 0 };
            let _ = writeln!(
                out,
                "{:>w$} | {:<bw$} {:.4}",
                panel.support[i],
                "#".repeat(len),
                m,
                w = label_width,
                bw = BAR_WIDTH
            );
        }
        let hidden = panel.masses.len() - (last - first + 1);
        if hidden > 0 {
            let _ = writeln!(out, "({} outcomes with negligible probability hidden)", hidden);
        }
    }
    if panel.tail_mass > 0.0 {
        let _ = writeln!(out, "(probability beyond the last bar: {:.2e})", panel.tail_mass);
    }

    out.push('\n');
    for kpi in &panel.kpis {
        let _ = writeln!(out, "{}: {}", kpi.label, kpi.display);
    }
    let _ = writeln!(out, "{}", panel.headline);
    out
}
