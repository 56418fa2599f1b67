//! Warehouse endpoint URL helpers.

use crate::error::ScraperError;

/// Validates a configured base URL and returns it without a trailing slash.
///
/// Only `http`/`https` URLs with a host are accepted. A path prefix is kept
/// so the warehouse UI can live under a sub-path.
pub(super) fn normalize_base_url(base_url: &str) -> Result<String, ScraperError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let invalid = |reason: String| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let url = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_owned()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_owned()));
    }

    Ok(trimmed.to_owned())
}

/// Joins a validated base URL and an endpoint path.
pub(super) fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}/{endpoint}")
}

/// Builds the inventory search URL for one search term.
pub(super) fn search_url(base_url: &str, search_term: &str) -> Result<String, ScraperError> {
    let endpoint = endpoint_url(base_url, "searchInventory");
    let mut url = reqwest::Url::parse(&endpoint).map_err(|e| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: format!("\"{endpoint}\" is not a valid URL: {e}"),
    })?;
    url.query_pairs_mut().append_pair("searchTerm", search_term);
    Ok(url.to_string())
}
