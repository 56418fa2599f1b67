mod export;
mod lookup;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "stockscan-cli")]
#[command(about = "Warehouse stock and location lookup by SKU")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in to the warehouse UI and look up stock for each SKU
    Lookup {
        /// SKUs to look up; the SKU file is used when none are given
        skus: Vec<String>,
        /// YAML SKU file, overriding `STOCKSCAN_SKUS_PATH`
        #[arg(long)]
        skus_file: Option<PathBuf>,
        /// Spreadsheet path; defaults to a timestamped file in `STOCKSCAN_EXPORT_DIR`
        #[arg(long, conflicts_with = "no_export")]
        output: Option<PathBuf>,
        /// Print the report without writing a spreadsheet
        #[arg(long)]
        no_export: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a saved search result page without contacting the warehouse
    Parse {
        /// Path to the saved HTML page
        html_file: PathBuf,
        /// SKU the page was searched for
        #[arg(long)]
        sku: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Lookup {
            skus,
            skus_file,
            output,
            no_export,
            json,
        }) => {
            let config = stockscan_core::load_app_config()
                .context("failed to load configuration")?;
            init_tracing(&config.log_level)?;
            tracing::debug!(env = %config.env, base_url = %config.warehouse_base_url, "configuration loaded");

            let options = lookup::LookupOptions {
                skus,
                skus_file,
                output,
                no_export,
                json,
            };
            lookup::run_lookup(&config, options).await?;
        }
        Some(Commands::Parse {
            html_file,
            sku,
            json,
        }) => {
            dotenvy::dotenv().ok();
            let level = std::env::var("STOCKSCAN_LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
            init_tracing(&level)?;
            run_parse(&html_file, &sku, json)?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

fn run_parse(html_file: &std::path::Path, sku: &str, json: bool) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(html_file)
        .with_context(|| format!("failed to read {}", html_file.display()))?;
    let record = stockscan_scraper::parse_stock_record(&html, sku);
    let report = report::SkuReport::new(sku, &record);
    lookup::print_reports(std::slice::from_ref(&report), json)
}
