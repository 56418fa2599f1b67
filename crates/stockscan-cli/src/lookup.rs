//! Batch lookup command.
//!
//! Logs in once, then fetches and parses each SKU's search page with bounded
//! concurrency. Per-SKU fetch failures are logged and skipped rather than
//! propagated so one missing page does not abort the batch.

use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::Context;
use futures::stream::{self, StreamExt};
use stockscan_scraper::{ScraperError, StockRecord};

use crate::export;
use crate::report::{self, SkuReport};

/// Options for `stockscan-cli lookup`, as given on the command line.
#[derive(Debug, Default)]
pub(crate) struct LookupOptions {
    pub skus: Vec<String>,
    pub skus_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub no_export: bool,
    pub json: bool,
}

/// Resolve the SKUs for a run.
///
/// Command-line SKUs win; otherwise the SKU file is loaded from `skus_file`
/// or the configured path. Command-line entries are trimmed and deduplicated
/// keeping first occurrence.
pub(crate) fn resolve_skus(
    cli_skus: Vec<String>,
    skus_file: Option<&Path>,
    default_path: &Path,
) -> anyhow::Result<Vec<String>> {
    let skus = if cli_skus.is_empty() {
        let path = skus_file.unwrap_or(default_path);
        stockscan_core::load_skus(path)
            .with_context(|| format!("failed to load SKU file {}", path.display()))?
            .skus
    } else {
        let mut seen = HashSet::new();
        cli_skus
            .into_iter()
            .map(|sku| sku.trim().to_string())
            .filter(|sku| !sku.is_empty() && seen.insert(sku.clone()))
            .collect()
    };

    if skus.is_empty() {
        anyhow::bail!("no SKUs to look up");
    }
    Ok(skus)
}

/// Run `fetch` for every SKU with at most `max_concurrent` in flight.
///
/// Results keep input order. Failed SKUs are logged and omitted.
///
/// # Errors
///
/// Returns an error only if every SKU failed.
pub(crate) async fn collect_reports<F, Fut>(
    skus: &[String],
    max_concurrent: usize,
    fetch: F,
) -> anyhow::Result<Vec<SkuReport>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<StockRecord, ScraperError>>,
{
    let outcomes: Vec<(&String, Result<StockRecord, ScraperError>)> = stream::iter(skus)
        .map(|sku| {
            let pending = fetch(sku.clone());
            async move { (sku, pending.await) }
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut failed = 0usize;
    for (sku, outcome) in outcomes {
        match outcome {
            Ok(record) => reports.push(SkuReport::new(sku, &record)),
            Err(e) => {
                failed += 1;
                tracing::warn!(sku = %sku, error = %e, "skipping SKU: inventory page unavailable");
            }
        }
    }

    if !skus.is_empty() && failed == skus.len() {
        anyhow::bail!("all {failed} SKU lookups failed");
    }
    if failed > 0 {
        tracing::warn!(failed, total = skus.len(), "lookup finished with failures");
    }

    Ok(reports)
}

/// Execute `stockscan-cli lookup`.
///
/// # Errors
///
/// Returns an error if no SKUs resolve, the client cannot be built, login
/// fails, every SKU fails, or the spreadsheet cannot be written.
pub(crate) async fn run_lookup(
    config: &stockscan_core::AppConfig,
    options: LookupOptions,
) -> anyhow::Result<()> {
    let skus = resolve_skus(options.skus, options.skus_file.as_deref(), &config.skus_path)?;

    let client = stockscan_scraper::WarehouseClient::new(
        &config.warehouse_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )
    .context("failed to build warehouse client")?;

    let session = client
        .login(&config.warehouse_email, &config.warehouse_password)
        .await
        .context("warehouse login failed")?;

    tracing::info!(skus = skus.len(), max_concurrent = config.max_concurrent_skus, "starting lookup");

    let reports = collect_reports(&skus, config.max_concurrent_skus, |sku| {
        let session = session.clone();
        async move { session.fetch_stock_record(&sku).await }
    })
    .await?;

    print_reports(&reports, options.json)?;

    if options.no_export {
        return Ok(());
    }

    let path = options.output.unwrap_or_else(|| {
        export::default_export_path(&config.export_dir, chrono::Local::now())
    });
    export::export_to_xlsx(&reports, &path)?;
    println!("\nReport has been exported to {}", path.display());

    Ok(())
}

/// Print reports as text blocks, or as a JSON array when `json` is set.
pub(crate) fn print_reports(reports: &[SkuReport], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        println!("{}", report::render_reports(reports));
    }
    Ok(())
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
