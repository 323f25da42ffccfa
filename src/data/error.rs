use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the sales artifact. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open sales data {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV header")]
    Header(#[source] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("CSV parse error at line {line}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
