//! CSV loader for the clustered sales artifact.
//!
//! The header row must name every column in [`REQUIRED_COLUMNS`]; any other
//! columns (`YEAR`, `SUPPLIER`, ...) are ignored. Fields are trimmed and an
//! empty sales field loads as a missing value.

use super::error::DataError;
use super::record::{REQUIRED_COLUMNS, Record};
use super::table::SalesTable;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load records from any CSV reader.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<Record>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(DataError::Header)?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(DataError::MissingColumn((*missing).to_string()));
    }

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize::<Record>().enumerate() {
        let record = result.map_err(|source| DataError::Parse {
            line: source
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2),
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Load the sales table from a CSV file on disk.
pub fn load_table(path: &Path) -> Result<SalesTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_records(file)?;

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "loaded sales table"
    );

    Ok(SalesTable::new(records))
}
