//! Authenticated inventory search requests.

use reqwest::Client;

use super::{status_error, urls, PAGE_ACCEPT};
use crate::error::ScraperError;
use crate::inventory::parse_stock_record;
use crate::rate_limit::retry_with_backoff;
use crate::types::StockRecord;

/// A logged-in handle to the warehouse UI.
///
/// Cheap to clone; clones share the cookie jar, so one session can serve
/// many concurrent searches.
#[derive(Clone)]
pub struct WarehouseSession {
    pub(super) client: Client,
    pub(super) base_url: String,
    pub(super) max_retries: u32,
    pub(super) backoff_base_secs: u64,
}

impl WarehouseSession {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the raw search result page for `search_term`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`]: HTTP 404 (not retried).
    /// - [`ScraperError::RateLimited`]: HTTP 429 after all retries exhausted.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status (5xx retried, 4xx not).
    /// - [`ScraperError::Http`]: network failure after all retries exhausted.
    pub async fn search_inventory(&self, search_term: &str) -> Result<String, ScraperError> {
        let url = urls::search_url(&self.base_url, search_term)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, PAGE_ACCEPT)
                    .send()
                    .await?;

                if !response.status().is_success() {
                    return Err(status_error(&response, url));
                }

                Ok(response.text().await?)
            }
        })
        .await
    }

    /// Fetches and parses the stock record for `sku`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::search_inventory`]. Parsing itself
    /// never fails.
    pub async fn fetch_stock_record(&self, sku: &str) -> Result<StockRecord, ScraperError> {
        let body = self.search_inventory(sku).await?;
        let record = parse_stock_record(&body, sku);
        tracing::debug!(
            sku,
            final_stock = ?record.final_stock,
            locations = record.locations.len(),
            "parsed inventory page"
        );
        Ok(record)
    }
}

impl std::fmt::Debug for WarehouseSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarehouseSession")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .field("backoff_base_secs", &self.backoff_base_secs)
            .finish_non_exhaustive()
    }
}
