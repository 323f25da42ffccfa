use clap::{Parser, Subcommand, ValueEnum};
use salesdash::data::SalesMetric;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "salesdash")]
#[command(about = "Sales cluster dashboard in the terminal", long_about = None)]
pub struct Cli {
    /// Clustered sales CSV to load (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print KPIs and aggregations without starting the TUI
    Summary {
        /// Cluster to include (repeatable, defaults to all)
        #[arg(long = "cluster", value_name = "LABEL")]
        clusters: Vec<String>,

        /// Item type to include (repeatable, defaults to all)
        #[arg(long = "item-type", value_name = "TYPE")]
        item_types: Vec<String>,

        /// Sales column for the monthly trend (defaults to config)
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up one item by its exact item code
    Lookup {
        /// Item code, matched exactly
        code: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Retail,
    Warehouse,
}

impl From<MetricArg> for SalesMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Retail => SalesMetric::Retail,
            MetricArg::Warehouse => SalesMetric::Warehouse,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
