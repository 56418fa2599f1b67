//! HTTP client for the warehouse management web UI.
//!
//! The UI has no API: a form login sets a session cookie, after which
//! `searchInventory` returns an HTML page per search term. [`WarehouseClient`]
//! performs the login and hands out a [`WarehouseSession`] that carries the
//! cookie for every later request.

mod session;
mod urls;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::error::ScraperError;
use crate::rate_limit::retry_with_backoff;

pub use session::WarehouseSession;

/// Accept header sent with page requests; the UI renders HTML only.
pub(super) const PAGE_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Client for one warehouse UI instance.
///
/// Owns a cookie-aware `reqwest::Client`; sessions created by [`Self::login`]
/// share its connection pool and cookie jar.
///
/// Transient errors (429, 5xx, network failures) are retried with
/// exponential backoff up to `max_retries` additional attempts.
pub struct WarehouseClient {
    pub(super) client: Client,
    pub(super) base_url: String,
    /// Maximum number of retry attempts after the first failure.
    pub(super) max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    pub(super) backoff_base_secs: u64,
}

impl WarehouseClient {
    /// Creates a `WarehouseClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` is not an absolute http(s) URL.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let base_url = urls::normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_secs,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Logs in with the warehouse UI's email/password form.
    ///
    /// Redirects are followed; the login counts as successful only when the
    /// final response is HTTP 200.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::LoginFailed`]: any final status other than 200 (not retried).
    /// - [`ScraperError::RateLimited`]: HTTP 429 after all retries exhausted.
    /// - [`ScraperError::UnexpectedStatus`]: 5xx after all retries exhausted.
    /// - [`ScraperError::Http`]: network or TLS failure after all retries exhausted.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<WarehouseSession, ScraperError> {
        let url = urls::endpoint_url(&self.base_url, "login");
        let form = [("userEmail", email), ("password", password)];

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.post(&url).form(&form).send().await?;
                let status = response.status();

                if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                    return Err(status_error(&response, url));
                }
                if status != StatusCode::OK {
                    return Err(ScraperError::LoginFailed {
                        status: status.as_u16(),
                        url,
                    });
                }
                Ok(())
            }
        })
        .await?;

        tracing::info!(base_url = %self.base_url, "logged in to warehouse");

        Ok(WarehouseSession {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            max_retries: self.max_retries,
            backoff_base_secs: self.backoff_base_secs,
        })
    }
}

/// Maps a non-success response to the matching error variant.
pub(super) fn status_error(response: &Response, url: String) -> ScraperError {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        return ScraperError::RateLimited {
            url,
            retry_after_secs,
        };
    }

    if status == StatusCode::NOT_FOUND {
        return ScraperError::NotFound { url };
    }

    ScraperError::UnexpectedStatus {
        status: status.as_u16(),
        url,
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
