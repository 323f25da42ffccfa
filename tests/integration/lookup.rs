// Item code lookup against the full table

use salesdash::data::{Lookup, SalesMetric};
use salesdash::summary::{NOT_FOUND_MESSAGE, format_lookup};

use crate::common::helpers::*;

const CSV: &str = "\
ITEM CODE,ITEM DESCRIPTION,ITEM TYPE,Clusters,MONTH,RETAIL SALES,WAREHOUSE SALES
100009,BOOTLEG RED - 750ML,WINE,High Performing Core Products,1,51.5,57.6
010234,BOULEVARD QUIRK CRANBERRY - 6PK,BEER,Low Volume – Warehouse Lean,1,0.8,7.9
100009,BOOTLEG RED - 750ML,WINE,High Performing Core Products,2,49.0,61.2
";

#[test]
fn test_known_code_returns_record_and_explanation() {
    let table = table_from_csv(CSV);

    match table.lookup("100009") {
        Some(Lookup::Found {
            record,
            explanation,
        }) => {
            assert_eq!(record.item_description, "BOOTLEG RED - 750ML");
            assert_eq!(record.cluster, HIGH_PERFORMING);
            // first match in table order
            assert_eq!(record.month, 1);
            assert_eq!(explanation.len(), 3);
            assert_eq!(explanation[0], "These items sell frequently and in high volume.");
        }
        other => panic!("expected a match, got {:?}", other),
    }
}

#[test]
fn test_unknown_code_leaves_panels_alone() {
    let table = table_from_csv(CSV);
    let selection = table.select_all();
    let before = salesdash::data::Report::build(
        &table.filter(&selection),
        &selection,
        SalesMetric::Retail,
    );

    let lookup = table.lookup("999999");
    assert!(matches!(lookup, Some(Lookup::NotFound { ref query }) if query == "999999"));
    assert_eq!(
        format_lookup(&lookup.unwrap()),
        format!("{}\n", NOT_FOUND_MESSAGE)
    );

    let after = salesdash::data::Report::build(
        &table.filter(&selection),
        &selection,
        SalesMetric::Retail,
    );
    assert_eq!(before, after);
}

#[test]
fn test_codes_compare_as_text() {
    let table = table_from_csv(CSV);

    assert!(table.lookup("010234").is_some_and(|l| l.is_found()));
    assert!(!table.lookup("10234").is_some_and(|l| l.is_found()));
    assert!(!table.lookup(" 100009").is_some_and(|l| l.is_found()));
}

#[test]
fn test_empty_query_is_no_lookup() {
    let table = table_from_csv(CSV);
    assert!(table.lookup("").is_none());
}

#[test]
fn test_lookup_ignores_filters() {
    let table = table_from_csv(CSV);
    // Lookups take the whole table, so an empty selection still finds items
    let empty = salesdash::data::Selection::default();
    assert!(table.filter(&empty).is_empty());
    assert!(table.lookup("010234").is_some_and(|l| l.is_found()));
}

#[test]
fn test_lookup_json_shape() {
    let table = table_from_csv(CSV);
    let found = serde_json::to_value(table.lookup("100009").unwrap()).unwrap();
    assert_eq!(found["status"], "found");
    assert_eq!(found["explanation"].as_array().map(|a| a.len()), Some(3));

    let missing = serde_json::to_value(table.lookup("999999").unwrap()).unwrap();
    assert_eq!(missing["status"], "not_found");
    assert_eq!(missing["query"], "999999");
}

#[test]
fn test_lookup_is_idempotent() {
    let table = table_from_csv(CSV);
    assert_eq!(table.lookup("100009"), table.lookup("100009"));
    assert_eq!(table.lookup("999999"), table.lookup("999999"));
}
