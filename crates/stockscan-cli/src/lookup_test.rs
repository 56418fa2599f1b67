use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;

fn record(final_stock: &str, locations: &[&str]) -> StockRecord {
    StockRecord {
        final_stock: Some(final_stock.to_string()),
        locations: locations.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn skus(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn reports_keep_input_order() {
    let input = skus(&["A", "B", "C"]);
    let reports = collect_reports(&input, 2, |sku| async move {
        Ok(record(&format!("{sku}-qty"), &[]))
    })
    .await
    .unwrap();

    let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["A", "B", "C"]);
    assert_eq!(reports[1].final_amount.as_deref(), Some("B-qty"));
}

#[tokio::test]
async fn failed_sku_is_skipped() {
    let input = skus(&["A", "MISSING", "C"]);
    let reports = collect_reports(&input, 4, |sku| async move {
        if sku == "MISSING" {
            Err(ScraperError::NotFound {
                url: "http://warehouse.test/searchInventory".to_string(),
            })
        } else {
            Ok(record("1", &["X1(1)"]))
        }
    })
    .await
    .unwrap();

    let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["A", "C"]);
}

#[tokio::test]
async fn all_failures_fail_the_run() {
    let input = skus(&["A", "B"]);
    let err = collect_reports(&input, 1, |_sku| async {
        Err::<StockRecord, _>(ScraperError::UnexpectedStatus {
            status: 500,
            url: "http://warehouse.test/searchInventory".to_string(),
        })
    })
    .await
    .unwrap_err();

    assert!(err.to_string().contains("all 2 SKU lookups failed"), "got: {err}");
}

#[tokio::test]
async fn zero_concurrency_still_runs() {
    let calls = Arc::new(AtomicUsize::new(0));
    let input = skus(&["A", "B"]);
    let counter = Arc::clone(&calls);
    let reports = collect_reports(&input, 0, move |_sku| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(StockRecord::default())
        }
    })
    .await
    .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn reports_apply_display_filter() {
    let input = skus(&["CW0026-NGS-1"]);
    let reports = collect_reports(&input, 1, |_sku| async {
        Ok(record("42", &["A1-01(8)", "OUTBOUND(2)", "CW0026-NGS-1", "B2"]))
    })
    .await
    .unwrap();

    assert_eq!(reports[0].location_list, "A1-01(8)\nB2");
}

#[test]
fn cli_skus_are_trimmed_and_deduplicated() {
    let resolved = resolve_skus(
        skus(&[" A ", "B", "A", "  "]),
        None,
        Path::new("/does/not/exist.yaml"),
    )
    .unwrap();
    assert_eq!(resolved, ["A", "B"]);
}

#[test]
fn blank_cli_skus_are_an_error() {
    let err = resolve_skus(skus(&[" "]), None, Path::new("/does/not/exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("no SKUs"), "got: {err}");
}

#[test]
fn falls_back_to_sku_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skus.yaml");
    std::fs::write(&path, "skus:\n  - HK0002QXJ\n  - Z6X-H7\n").unwrap();

    let resolved = resolve_skus(Vec::new(), None, &path).unwrap();
    assert_eq!(resolved, ["HK0002QXJ", "Z6X-H7"]);
}

#[test]
fn skus_file_flag_overrides_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.yaml");
    std::fs::write(&path, "skus:\n  - 3C-05-BK\n").unwrap();

    let resolved =
        resolve_skus(Vec::new(), Some(&path), Path::new("/does/not/exist.yaml")).unwrap();
    assert_eq!(resolved, ["3C-05-BK"]);
}

#[test]
fn missing_sku_file_is_an_error() {
    let err = resolve_skus(Vec::new(), None, Path::new("/does/not/exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to load SKU file"), "got: {err}");
}

#[test]
fn empty_sku_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skus.yaml");
    std::fs::write(&path, "skus: []\n").unwrap();

    let err = resolve_skus(Vec::new(), None, &path).unwrap_err();
    assert!(err.to_string().contains("no SKUs"), "got: {err}");
}
