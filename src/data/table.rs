// In-memory sales table, filter selection and item lookup

use super::record::Record;
use super::segment::explanation_for;
use serde::Serialize;
use std::collections::BTreeSet;

/// The loaded artifact. Read-only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    records: Vec<Record>,
}

/// Cluster and item type choices, each kept in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub clusters: Vec<String>,
    pub item_types: Vec<String>,
}

/// Rows of the table matching a [`Selection`], in table order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Record>,
}

/// Outcome of an item code lookup against the full table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    Found {
        record: Record,
        explanation: &'static [&'static str],
    },
    NotFound {
        query: String,
    },
}

impl SalesTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct cluster labels, sorted.
    pub fn cluster_options(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.cluster.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct item types in order of first appearance.
    pub fn item_type_options(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.item_type.as_str()))
            .map(|r| r.item_type.clone())
            .collect()
    }

    /// Default selection: every cluster and every item type present.
    pub fn select_all(&self) -> Selection {
        Selection {
            clusters: self.cluster_options(),
            item_types: self.item_type_options(),
        }
    }

    pub fn filter(&self, selection: &Selection) -> FilteredView<'_> {
        let rows = self
            .records
            .iter()
            .filter(|r| selection.matches(r))
            .collect();
        FilteredView { rows }
    }

    /// Exact match on item code against the unfiltered table.
    ///
    /// Returns `None` for an empty query. When codes repeat, the first
    /// record in table order wins.
    pub fn lookup(&self, query: &str) -> Option<Lookup> {
        if query.is_empty() {
            return None;
        }

        let outcome = match self.records.iter().find(|r| r.item_code == query) {
            Some(record) => Lookup::Found {
                record: record.clone(),
                explanation: explanation_for(&record.cluster),
            },
            None => {
                tracing::info!(query, "item code not found");
                Lookup::NotFound {
                    query: query.to_string(),
                }
            }
        };
        Some(outcome)
    }
}

impl Selection {
    pub fn matches(&self, record: &Record) -> bool {
        self.clusters.iter().any(|c| *c == record.cluster)
            && self.item_types.iter().any(|t| *t == record.item_type)
    }
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().copied()
    }
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
