use super::*;

#[test]
fn normalize_base_url_strips_trailing_slash() {
    assert_eq!(
        urls::normalize_base_url("http://warehouse.local:3000/").unwrap(),
        "http://warehouse.local:3000"
    );
}

#[test]
fn normalize_base_url_keeps_path_prefix() {
    assert_eq!(
        urls::normalize_base_url(" https://erp.example.com/wms/ ").unwrap(),
        "https://erp.example.com/wms"
    );
}

#[test]
fn normalize_base_url_rejects_relative_url() {
    let err = urls::normalize_base_url("warehouse.local").unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn normalize_base_url_rejects_other_schemes() {
    let err = urls::normalize_base_url("ftp://warehouse.local").unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidBaseUrl { ref reason, .. } if reason.contains("ftp")),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn normalize_base_url_rejects_query_string() {
    assert!(urls::normalize_base_url("http://warehouse.local/?tenant=1").is_err());
}

#[test]
fn endpoint_url_joins_path() {
    assert_eq!(
        urls::endpoint_url("http://warehouse.local:3000", "login"),
        "http://warehouse.local:3000/login"
    );
}

#[test]
fn search_url_encodes_search_term() {
    assert_eq!(
        urls::search_url("http://warehouse.local:3000", "CW0026-NGS-1").unwrap(),
        "http://warehouse.local:3000/searchInventory?searchTerm=CW0026-NGS-1"
    );
    assert_eq!(
        urls::search_url("http://warehouse.local:3000", "A&B 1").unwrap(),
        "http://warehouse.local:3000/searchInventory?searchTerm=A%26B+1"
    );
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = WarehouseClient::new("not a url", 5, "stockscan-test/0.1", 0, 0);
    assert!(matches!(result, Err(ScraperError::InvalidBaseUrl { .. })));
}

#[test]
fn new_normalizes_base_url() {
    let client = WarehouseClient::new("http://warehouse.local:3000/", 5, "stockscan-test/0.1", 0, 0)
        .expect("client builds");
    assert_eq!(client.base_url(), "http://warehouse.local:3000");
}
