// Sales record and metric types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the clustered sales artifact.
pub const COL_ITEM_CODE: &str = "ITEM CODE";
pub const COL_ITEM_DESCRIPTION: &str = "ITEM DESCRIPTION";
pub const COL_ITEM_TYPE: &str = "ITEM TYPE";
pub const COL_CLUSTER: &str = "Clusters";
pub const COL_MONTH: &str = "MONTH";
pub const COL_RETAIL_SALES: &str = "RETAIL SALES";
pub const COL_WAREHOUSE_SALES: &str = "WAREHOUSE SALES";

/// Every column the loader requires in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_ITEM_CODE,
    COL_ITEM_DESCRIPTION,
    COL_ITEM_TYPE,
    COL_CLUSTER,
    COL_MONTH,
    COL_RETAIL_SALES,
    COL_WAREHOUSE_SALES,
];

/// One row of the clustered sales table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ITEM CODE")]
    pub item_code: String,

    #[serde(rename = "ITEM DESCRIPTION")]
    pub item_description: String,

    #[serde(rename = "ITEM TYPE")]
    pub item_type: String,

    #[serde(rename = "Clusters")]
    pub cluster: String,

    #[serde(rename = "MONTH")]
    pub month: u32,

    /// Empty in the source when the figure was not reported
    #[serde(rename = "RETAIL SALES")]
    pub retail_sales: Option<f64>,

    #[serde(rename = "WAREHOUSE SALES")]
    pub warehouse_sales: Option<f64>,
}

impl Record {
    pub fn sales(&self, metric: SalesMetric) -> Option<f64> {
        match metric {
            SalesMetric::Retail => self.retail_sales,
            SalesMetric::Warehouse => self.warehouse_sales,
        }
    }
}

/// Which sales column a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesMetric {
    #[default]
    Retail,
    Warehouse,
}

impl SalesMetric {
    /// Column header as it appears in the artifact
    pub fn column(self) -> &'static str {
        match self {
            Self::Retail => COL_RETAIL_SALES,
            Self::Warehouse => COL_WAREHOUSE_SALES,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Retail => Self::Warehouse,
            Self::Warehouse => Self::Retail,
        }
    }
}

impl fmt::Display for SalesMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
