//! Aggregations computed from a filtered view on every render pass.
//!
//! Nothing is cached between passes. Missing and NaN sales figures are
//! skipped by every mean; clusters come out sorted by label.

use super::record::{Record, SalesMetric};
use super::segment::explanation_for;
use super::table::{FilteredView, Selection};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Headline numbers for the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    /// Distinct item codes
    pub distinct_items: usize,
    /// Mean retail sales rounded to 2 decimals, `None` when nothing to average
    pub avg_retail: Option<f64>,
    pub avg_warehouse: Option<f64>,
}

/// Mean sales for one cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterProfile {
    pub cluster: String,
    pub retail: Option<f64>,
    pub warehouse: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemTypeShare {
    pub item_type: String,
    pub count: usize,
    pub share: f64,
}

/// Item type mix within one cluster. Shares sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterMix {
    pub cluster: String,
    pub shares: Vec<ItemTypeShare>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: u32,
    pub value: f64,
}

/// One line of the monthly trend chart, months ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub cluster: String,
    pub points: Vec<TrendPoint>,
}

/// Explanation block for one selected cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterNote {
    pub cluster: String,
    pub lines: &'static [&'static str],
}

/// All panels of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub metric: SalesMetric,
    pub rows: usize,
    pub kpis: Kpis,
    pub profile: Vec<ClusterProfile>,
    pub item_mix: Vec<ClusterMix>,
    pub trend: Vec<TrendSeries>,
    pub interpretation: Vec<ClusterNote>,
}

impl Report {
    pub fn build(view: &FilteredView<'_>, selection: &Selection, metric: SalesMetric) -> Self {
        let groups = group_by_cluster(view);

        let report = Self {
            metric,
            rows: view.len(),
            kpis: Kpis::compute(view),
            profile: cluster_profile(&groups),
            item_mix: item_type_mix(&groups),
            trend: monthly_trend(&groups, metric),
            interpretation: interpretation(selection),
        };

        tracing::debug!(
            rows = report.rows,
            clusters = report.profile.len(),
            metric = %metric,
            "rebuilt dashboard report"
        );

        report
    }

    /// Largest mean in the profile chart, used to scale bars.
    pub fn profile_max(&self) -> f64 {
        self.profile
            .iter()
            .flat_map(|p| [p.retail, p.warehouse])
            .flatten()
            .fold(0.0, f64::max)
    }
}

impl Kpis {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        let distinct_items = view
            .iter()
            .map(|r| r.item_code.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            distinct_items,
            avg_retail: mean(view.iter().map(|r| r.retail_sales)).map(round2),
            avg_warehouse: mean(view.iter().map(|r| r.warehouse_sales)).map(round2),
        }
    }
}

/// Arithmetic mean that skips missing and NaN values.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn group_by_cluster<'a>(view: &FilteredView<'a>) -> BTreeMap<&'a str, Vec<&'a Record>> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in view.iter() {
        groups.entry(record.cluster.as_str()).or_default().push(record);
    }
    groups
}

fn cluster_profile(groups: &BTreeMap<&str, Vec<&Record>>) -> Vec<ClusterProfile> {
    groups
        .iter()
        .map(|(cluster, rows)| ClusterProfile {
            cluster: (*cluster).to_string(),
            retail: mean(rows.iter().map(|r| r.retail_sales)),
            warehouse: mean(rows.iter().map(|r| r.warehouse_sales)),
        })
        .collect()
}

fn item_type_mix(groups: &BTreeMap<&str, Vec<&Record>>) -> Vec<ClusterMix> {
    groups
        .iter()
        .map(|(cluster, rows)| {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for r in rows {
                *counts.entry(r.item_type.as_str()).or_default() += 1;
            }

            let total = rows.len() as f64;
            let mut shares: Vec<ItemTypeShare> = counts
                .into_iter()
                .map(|(item_type, count)| ItemTypeShare {
                    item_type: item_type.to_string(),
                    count,
                    share: count as f64 / total,
                })
                .collect();
            // stable: equal counts stay in name order
            shares.sort_by(|a, b| b.count.cmp(&a.count));

            ClusterMix {
                cluster: (*cluster).to_string(),
                shares,
            }
        })
        .collect()
}

fn monthly_trend(groups: &BTreeMap<&str, Vec<&Record>>, metric: SalesMetric) -> Vec<TrendSeries> {
    groups
        .iter()
        .filter_map(|(cluster, rows)| {
            let mut by_month: BTreeMap<u32, Vec<Option<f64>>> = BTreeMap::new();
            for r in rows {
                by_month.entry(r.month).or_default().push(r.sales(metric));
            }

            let points: Vec<TrendPoint> = by_month
                .into_iter()
                .filter_map(|(month, values)| {
                    mean(values).map(|value| TrendPoint { month, value })
                })
                .collect();

            (!points.is_empty()).then(|| TrendSeries {
                cluster: (*cluster).to_string(),
                points,
            })
        })
        .collect()
}

fn interpretation(selection: &Selection) -> Vec<ClusterNote> {
    selection
        .clusters
        .iter()
        .map(|cluster| ClusterNote {
            cluster: cluster.clone(),
            lines: explanation_for(cluster),
        })
        .collect()
}
