// Plain-text rendering of reports and lookups (headless commands)

use crate::data::{Lookup, Report};
use std::fmt::Write;

/// Shown wherever a mean has nothing to average.
pub const MISSING_VALUE: &str = "—";

pub const NOT_FOUND_MESSAGE: &str = "Item code not found.";
pub const FOUND_MESSAGE: &str = "Item found";

/// Format a mean for display with 2 decimals
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

pub fn format_summary(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Rows: {}  Metric: {}", report.rows, report.metric);
    let _ = writeln!(out);

    let _ = writeln!(out, "KPIs");
    let _ = writeln!(out, "  Total SKUs: {}", report.kpis.distinct_items);
    let _ = writeln!(out, "  Avg Retail Sales: {}", format_value(report.kpis.avg_retail));
    let _ = writeln!(
        out,
        "  Avg Warehouse Sales: {}",
        format_value(report.kpis.avg_warehouse)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Cluster Sales Profile");
    if report.profile.is_empty() {
        let _ = writeln!(out, "  (no data)");
    }
    for p in &report.profile {
        let _ = writeln!(
            out,
            "  {}: retail {}, warehouse {}",
            p.cluster,
            format_value(p.retail),
            format_value(p.warehouse)
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Item Type Share");
    if report.item_mix.is_empty() {
        let _ = writeln!(out, "  (no data)");
    }
    for mix in &report.item_mix {
        let shares = mix
            .shares
            .iter()
            .map(|s| format!("{} {}", s.item_type, format_share(s.share)))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  {}: {}", mix.cluster, shares);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Monthly Trend ({})", report.metric);
    if report.trend.is_empty() {
        let _ = writeln!(out, "  (no data)");
    }
    for series in &report.trend {
        let points = series
            .points
            .iter()
            .map(|p| format!("{}={:.2}", p.month, p.value))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  {}: {}", series.cluster, points);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Cluster Interpretation");
    if report.interpretation.is_empty() {
        let _ = writeln!(out, "  (no clusters selected)");
    }
    for note in &report.interpretation {
        let _ = writeln!(out, "  ## {}", note.cluster);
        for line in note.lines {
            let _ = writeln!(out, "  - {}", line);
        }
    }

    out
}

pub fn format_lookup(lookup: &Lookup) -> String {
    let mut out = String::new();
    match lookup {
        Lookup::NotFound { .. } => {
            let _ = writeln!(out, "{}", NOT_FOUND_MESSAGE);
        }
        Lookup::Found {
            record,
            explanation,
        } => {
            let _ = writeln!(out, "{}", FOUND_MESSAGE);
            let _ = writeln!(out, "Item Code: {}", record.item_code);
            let _ = writeln!(out, "Description: {}", record.item_description);
            let _ = writeln!(out, "Item Type: {}", record.item_type);
            let _ = writeln!(out, "Cluster: {}", record.cluster);
            let _ = writeln!(out);
            let _ = writeln!(out, "What this means");
            for line in explanation.iter() {
                let _ = writeln!(out, "- {}", line);
            }
        }
    }
    out
}
