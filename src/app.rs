use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use salesdash::data::{self, Report, SalesMetric, SalesTable, Selection};
use salesdash::{config, logging, summary, ui};
use std::path::Path;
use std::process;

pub fn run(cli: Cli) {
    let (config, config_warning) = match config::Config::load() {
        Ok((config, warning)) => {
            if let Some(ref warning) = warning {
                eprintln!("Warning: {}", warning);
                eprintln!(
                    "Using built-in defaults. Run 'salesdash init-config' to create a config file."
                );
            }
            (config, warning)
        }
        Err(e) => {
            eprintln!("Warning: {:#}", e);
            eprintln!("Using built-in defaults.");
            (
                config::Config::default(),
                Some(format!("config unreadable: {:#}", e)),
            )
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "using built-in config defaults");
    }

    let data_path = config.data_path(cli.data.as_deref());

    let result = match cli.command {
        Some(Commands::InitConfig) => {
            handle_init_config();
            return;
        }
        Some(Commands::Summary {
            clusters,
            item_types,
            metric,
            json,
        }) => load(&data_path).and_then(|table| {
            let metric = metric.map(SalesMetric::from).unwrap_or(config.display.metric);
            handle_summary(&table, clusters, item_types, metric, json)
        }),
        Some(Commands::Lookup { code, json }) => {
            load(&data_path).and_then(|table| handle_lookup(&table, &code, json))
        }
        None => load(&data_path).and_then(|table| {
            ui::run_ui(table, &config, &data_path).context("Error running UI")
        }),
    };

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "salesdash exited with an error");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn load(path: &Path) -> Result<SalesTable> {
    data::load_table(path)
        .with_context(|| format!("Cannot start without sales data ({})", path.display()))
}

fn handle_summary(
    table: &SalesTable,
    clusters: Vec<String>,
    item_types: Vec<String>,
    metric: SalesMetric,
    json: bool,
) -> Result<()> {
    let defaults = table.select_all();
    let selection = Selection {
        clusters: if clusters.is_empty() {
            defaults.clusters
        } else {
            clusters
        },
        item_types: if item_types.is_empty() {
            defaults.item_types
        } else {
            item_types
        },
    };

    let report = Report::build(&table.filter(&selection), &selection, metric);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        print!("{}", summary::format_summary(&report));
    }
    Ok(())
}

fn handle_lookup(table: &SalesTable, code: &str, json: bool) -> Result<()> {
    let Some(lookup) = table.lookup(code) else {
        anyhow::bail!("Item code must not be empty");
    };

    if json {
        let out = serde_json::to_string_pretty(&lookup).context("Failed to serialize lookup")?;
        println!("{}", out);
    } else {
        print!("{}", summary::format_lookup(&lookup));
    }

    if !lookup.is_found() {
        process::exit(1);
    }
    Ok(())
}

fn handle_init_config() {
    let loaded = config::Config::config_path()
        .and_then(|path| config::Config::load_from(&path).map(|cfg| (path, cfg)));

    match loaded {
        Ok((path, cfg)) => {
            println!("Config loaded successfully from {}", path.display());
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            }
            match config::Config::config_path() {
                Ok(path) => println!("Default config saved to {}", path.display()),
                Err(e) => println!("Default config saved (path unknown): {:#}", e),
            }
        }
    }
}
