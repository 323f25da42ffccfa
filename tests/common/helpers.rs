#![allow(dead_code)] // Not every test binary uses every helper

use salesdash::data::{Record, SalesTable, load_records};
use std::path::PathBuf;

pub const HIGH_PERFORMING: &str = "High Performing Core Products";
pub const BULK: &str = "Bulk / Institutional High Volume";

/// Build one row with both sales columns present
pub fn rec(
    code: &str,
    item_type: &str,
    cluster: &str,
    month: u32,
    retail: f64,
    warehouse: f64,
) -> Record {
    Record {
        item_code: code.to_string(),
        item_description: format!("Item {}", code),
        item_type: item_type.to_string(),
        cluster: cluster.to_string(),
        month,
        retail_sales: Some(retail),
        warehouse_sales: Some(warehouse),
    }
}

/// Two clusters {A, B} and two item types {X, Y}
pub fn ab_table() -> SalesTable {
    SalesTable::new(vec![
        rec("1", "X", "A", 1, 10.0, 100.0),
        rec("2", "Y", "A", 1, 20.0, 200.0),
        rec("3", "X", "B", 1, 30.0, 300.0),
        rec("4", "Y", "B", 2, 40.0, 400.0),
        rec("1", "X", "A", 2, 12.0, 120.0),
    ])
}

/// Parse an inline CSV document, panicking on bad input
pub fn table_from_csv(csv: &str) -> SalesTable {
    SalesTable::new(load_records(csv.as_bytes()).expect("inline CSV should parse"))
}

pub fn demo_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demo")
        .join("clustered_sales.csv")
}
