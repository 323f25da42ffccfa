// Sales data model - independent of UI

pub mod error;
pub mod loader;
pub mod record;
pub mod report;
pub mod segment;
pub mod table;

pub use error::DataError;
pub use loader::{load_records, load_table};
pub use record::{Record, SalesMetric};
pub use report::{
    ClusterMix, ClusterNote, ClusterProfile, ItemTypeShare, Kpis, Report, TrendPoint, TrendSeries,
};
pub use segment::{Segment, explanation_for, short_label_for};
pub use table::{FilteredView, Lookup, SalesTable, Selection};
