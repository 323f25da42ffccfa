// The bundled demo dataset loads and drives every panel

use salesdash::data::{Lookup, Report, SalesMetric, Segment, load_table};

use crate::common::helpers::*;

#[test]
fn test_demo_dataset_loads() {
    let table = load_table(&demo_csv_path()).unwrap();

    assert_eq!(table.len(), 72);

    let clusters = table.cluster_options();
    assert_eq!(clusters.len(), 5);
    for segment in Segment::ALL {
        assert!(clusters.iter().any(|c| c == segment.label()), "{}", segment.label());
    }

    assert_eq!(
        table.item_type_options(),
        vec!["WINE", "BEER", "LIQUOR", "NON-ALCOHOL"]
    );
}

#[test]
fn test_demo_lookup_keeps_leading_zero() {
    let table = load_table(&demo_csv_path()).unwrap();

    match table.lookup("010234") {
        Some(Lookup::Found { record, .. }) => {
            assert_eq!(record.item_type, "BEER");
            assert_eq!(record.cluster, "Low Volume – Warehouse Lean");
        }
        other => panic!("expected a match, got {:?}", other),
    }
    assert!(table.lookup("100009").is_some_and(|l| l.is_found()));
}

#[test]
fn test_demo_report_covers_every_cluster() {
    let table = load_table(&demo_csv_path()).unwrap();
    let selection = table.select_all();
    let report = Report::build(&table.filter(&selection), &selection, SalesMetric::Retail);

    assert_eq!(report.rows, 72);
    assert_eq!(report.kpis.distinct_items, 12);
    assert_eq!(report.profile.len(), 5);
    assert_eq!(report.trend.len(), 5);
    assert!(report.trend.iter().all(|s| s.points.len() == 6));
    assert!(report.interpretation.iter().all(|n| !n.lines.is_empty()));
}
