use std::io::Write;
use std::path::Path;

use super::*;

#[test]
fn parses_sku_list() {
    let yaml = "skus:\n  - CW0026-NGS-1\n  - 3C-05-BK\n  - HK0002QXJ\n";
    let file = parse_skus(yaml).expect("valid sku file");
    assert_eq!(file.skus, vec!["CW0026-NGS-1", "3C-05-BK", "HK0002QXJ"]);
}

#[test]
fn trims_entries() {
    let yaml = "skus:\n  - '  Z6X-H7 '\n";
    let file = parse_skus(yaml).unwrap();
    assert_eq!(file.skus, vec!["Z6X-H7"]);
}

#[test]
fn rejects_blank_entry() {
    let yaml = "skus:\n  - '   '\n";
    let err = parse_skus(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
}

#[test]
fn rejects_duplicate_after_trim() {
    let yaml = "skus:\n  - X003RT4T5J\n  - ' X003RT4T5J'\n";
    let err = parse_skus(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("X003RT4T5J")),
        "got: {err:?}"
    );
}

#[test]
fn rejects_missing_skus_key() {
    let err = parse_skus("items: []\n").unwrap_err();
    assert!(matches!(err, ConfigError::SkusFileParse(_)), "got: {err:?}");
}

#[test]
fn load_skus_reports_missing_file() {
    let err = load_skus(Path::new("/nonexistent/stockscan/skus.yaml")).unwrap_err();
    assert!(
        matches!(err, ConfigError::SkusFileIo { ref path, .. } if path.contains("skus.yaml")),
        "got: {err:?}"
    );
}

#[test]
fn load_skus_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "skus:\n  - D125452HDZN\n  - D125459J27O").unwrap();
    let loaded = load_skus(file.path()).unwrap();
    assert_eq!(loaded.skus, vec!["D125452HDZN", "D125459J27O"]);
}
