// Filtering and report aggregation over small in-memory tables

use salesdash::data::{Report, SalesMetric, Selection};

use crate::common::helpers::*;

fn selection(clusters: &[&str], item_types: &[&str]) -> Selection {
    Selection {
        clusters: clusters.iter().map(|s| s.to_string()).collect(),
        item_types: item_types.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_single_cluster_keeps_both_item_types() {
    let table = ab_table();
    let view = table.filter(&selection(&["A"], &["X", "Y"]));

    assert_eq!(view.len(), 3);
    assert!(view.iter().all(|r| r.cluster == "A"));
    assert!(view.iter().all(|r| r.item_type == "X" || r.item_type == "Y"));
}

#[test]
fn test_filter_needs_both_dimensions() {
    let table = ab_table();
    let view = table.filter(&selection(&["B"], &["Y"]));

    let codes: Vec<&str> = view.iter().map(|r| r.item_code.as_str()).collect();
    assert_eq!(codes, vec!["4"]);
}

#[test]
fn test_kpis_for_single_cluster() {
    let table = ab_table();
    let sel = selection(&["A"], &["X", "Y"]);
    let report = Report::build(&table.filter(&sel), &sel, SalesMetric::Retail);

    // item "1" appears in two months but counts once
    assert_eq!(report.kpis.distinct_items, 2);
    assert_eq!(report.kpis.avg_retail, Some(14.0));
    assert_eq!(report.kpis.avg_warehouse, Some(140.0));
}

#[test]
fn test_empty_cluster_selection_empties_every_panel() {
    let table = ab_table();
    let sel = selection(&[], &["X", "Y"]);
    let report = Report::build(&table.filter(&sel), &sel, SalesMetric::Retail);

    assert_eq!(report.rows, 0);
    assert_eq!(report.kpis.distinct_items, 0);
    assert_eq!(report.kpis.avg_retail, None);
    assert_eq!(report.kpis.avg_warehouse, None);
    assert!(report.profile.is_empty());
    assert!(report.item_mix.is_empty());
    assert!(report.trend.is_empty());
    assert!(report.interpretation.is_empty());
}

#[test]
fn test_trend_follows_metric() {
    let table = ab_table();
    let sel = table.select_all();
    let view = table.filter(&sel);

    let retail = Report::build(&view, &sel, SalesMetric::Retail);
    let warehouse = Report::build(&view, &sel, SalesMetric::Warehouse);

    let a_retail = &retail.trend[0];
    assert_eq!(a_retail.cluster, "A");
    assert_eq!(a_retail.points[0].month, 1);
    assert_eq!(a_retail.points[0].value, 15.0);
    assert_eq!(a_retail.points[1].value, 12.0);

    assert_eq!(warehouse.trend[0].points[0].value, 150.0);
    // the other panels do not depend on the metric
    assert_eq!(retail.profile, warehouse.profile);
    assert_eq!(retail.item_mix, warehouse.item_mix);
}

#[test]
fn test_interpretation_follows_selection_order() {
    let table = ab_table();
    let sel = selection(&[HIGH_PERFORMING, "B", BULK], &["X"]);
    let report = Report::build(&table.filter(&sel), &sel, SalesMetric::Retail);

    let clusters: Vec<&str> = report
        .interpretation
        .iter()
        .map(|n| n.cluster.as_str())
        .collect();
    assert_eq!(clusters, vec![HIGH_PERFORMING, "B", BULK]);
    assert_eq!(report.interpretation[0].lines.len(), 3);
    assert!(report.interpretation[1].lines.is_empty());
    assert_eq!(report.interpretation[2].lines.len(), 4);
}

#[test]
fn test_item_share_sums_to_one_per_cluster() {
    let table = ab_table();
    let sel = table.select_all();
    let report = Report::build(&table.filter(&sel), &sel, SalesMetric::Retail);

    for mix in &report.item_mix {
        let total: f64 = mix.shares.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", mix.cluster, total);
    }

    // cluster A: item "1" twice as X, "2" once as Y
    let a = &report.item_mix[0];
    assert_eq!(a.shares[0].item_type, "X");
    assert_eq!(a.shares[0].count, 2);
}
