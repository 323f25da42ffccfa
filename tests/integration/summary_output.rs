// Plain-text summary printed by `salesdash summary`

use insta::assert_snapshot;
use salesdash::data::{Report, SalesMetric, Selection};
use salesdash::summary::format_summary;

use crate::common::helpers::*;

const CSV: &str = "\
ITEM CODE,ITEM DESCRIPTION,ITEM TYPE,Clusters,MONTH,RETAIL SALES,WAREHOUSE SALES
100009,BOOTLEG RED,WINE,High Performing Core Products,1,10.5,20
10103,CORONA EXTRA,BEER,Bulk / Institutional High Volume,1,,300.5
";

#[test]
fn snapshot_summary_all_selected() {
    let table = table_from_csv(CSV);
    let selection = table.select_all();
    let report = Report::build(&table.filter(&selection), &selection, SalesMetric::Retail);

    assert_snapshot!(format_summary(&report).trim_end(), @r"
Rows: 2  Metric: RETAIL SALES

KPIs
  Total SKUs: 2
  Avg Retail Sales: 10.50
  Avg Warehouse Sales: 160.25

Cluster Sales Profile
  Bulk / Institutional High Volume: retail —, warehouse 300.50
  High Performing Core Products: retail 10.50, warehouse 20.00

Item Type Share
  Bulk / Institutional High Volume: BEER 100.0%
  High Performing Core Products: WINE 100.0%

Monthly Trend (RETAIL SALES)
  High Performing Core Products: 1=10.50

Cluster Interpretation
  ## Bulk / Institutional High Volume
  - These are bulk products sold in very large quantities.
  - Sales are mainly warehouse-based.
  - A knowing few items generate extremely high volume.
  - Commonly purchased by institutional or bulk buyers.
  ## High Performing Core Products
  - These items sell frequently and in high volume.
  - They generate a large share of total revenue.
  - Critical products that should never go out of stock.
");
}

#[test]
fn test_summary_with_nothing_selected() {
    let table = table_from_csv(CSV);
    let selection = Selection::default();
    let report = Report::build(&table.filter(&selection), &selection, SalesMetric::Warehouse);
    let out = format_summary(&report);

    assert!(out.starts_with("Rows: 0  Metric: WAREHOUSE SALES"));
    assert!(out.contains("  Total SKUs: 0"));
    assert!(out.contains("  Avg Retail Sales: —"));
    assert!(out.contains("(no clusters selected)"));
    assert_eq!(out.matches("(no data)").count(), 3);
}

#[test]
fn test_summary_json_round_numbers() {
    let table = table_from_csv(CSV);
    let selection = table.select_all();
    let report = Report::build(&table.filter(&selection), &selection, SalesMetric::Retail);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["rows"], 2);
    assert_eq!(json["kpis"]["distinct_items"], 2);
    assert_eq!(json["kpis"]["avg_warehouse"], 160.25);
    assert!(json["profile"][0]["retail"].is_null());
}
