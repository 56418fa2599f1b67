//! Per-SKU report rows and their text rendering.

use serde::Serialize;
use stockscan_scraper::{filter_display_locations, StockRecord};

/// Shown in place of an empty location list.
pub(crate) const NO_LOCATIONS: &str = "none";
/// Shown when the page had no final stock row.
const MISSING_AMOUNT: &str = "None";

/// One SKU as it appears in the printed report and the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SkuReport {
    pub id: String,
    pub final_amount: Option<String>,
    /// Display locations joined by newlines, or [`NO_LOCATIONS`].
    pub location_list: String,
}

impl SkuReport {
    pub(crate) fn new(sku: &str, record: &StockRecord) -> Self {
        let locations = filter_display_locations(&record.locations, sku);
        let location_list = if locations.is_empty() {
            NO_LOCATIONS.to_string()
        } else {
            locations.join("\n")
        };

        Self {
            id: sku.to_string(),
            final_amount: record.final_stock.clone(),
            location_list,
        }
    }

    /// Cell values in spreadsheet column order.
    pub(crate) fn cells(&self) -> [&str; 3] {
        [
            self.id.as_str(),
            self.final_amount.as_deref().unwrap_or(""),
            self.location_list.as_str(),
        ]
    }
}

pub(crate) fn format_report(report: &SkuReport) -> String {
    format!(
        "id: {}\nfinal amount: {}\nlocation list: {}",
        report.id,
        report.final_amount.as_deref().unwrap_or(MISSING_AMOUNT),
        report.location_list
    )
}

/// Renders all reports as text blocks separated by a blank line.
pub(crate) fn render_reports(reports: &[SkuReport]) -> String {
    reports
        .iter()
        .map(format_report)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(final_stock: Option<&str>, locations: &[&str]) -> StockRecord {
        StockRecord {
            final_stock: final_stock.map(str::to_string),
            locations: locations.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn joins_display_locations_with_newlines() {
        let report = SkuReport::new(
            "CW0026-NGS-1",
            &record(Some("42"), &["A1-01(8)", "B2", "Outbound(1)", "CW0026-NGS-1"]),
        );
        assert_eq!(report.final_amount.as_deref(), Some("42"));
        assert_eq!(report.location_list, "A1-01(8)\nB2");
    }

    #[test]
    fn empty_location_list_reads_none() {
        let report = SkuReport::new("3C-05-BK", &record(None, &["3C-05-BK", "cm"]));
        assert_eq!(report.location_list, NO_LOCATIONS);
        assert_eq!(report.final_amount, None);
    }

    #[test]
    fn formats_text_block() {
        let report = SkuReport::new("HK0002QXJ", &record(Some("7"), &["C3(7)"]));
        assert_eq!(
            format_report(&report),
            "id: HK0002QXJ\nfinal amount: 7\nlocation list: C3(7)"
        );
    }

    #[test]
    fn missing_amount_is_rendered_as_none() {
        let report = SkuReport::new("Z6X-H7", &StockRecord::default());
        assert_eq!(
            format_report(&report),
            "id: Z6X-H7\nfinal amount: None\nlocation list: none"
        );
    }

    #[test]
    fn render_separates_blocks_with_blank_line() {
        let reports = vec![
            SkuReport::new("A", &record(Some("1"), &["X1(1)"])),
            SkuReport::new("B", &record(Some("2"), &[])),
        ];
        assert_eq!(
            render_reports(&reports),
            "id: A\nfinal amount: 1\nlocation list: X1(1)\n\nid: B\nfinal amount: 2\nlocation list: none"
        );
    }

    #[test]
    fn cells_follow_column_order() {
        let report = SkuReport::new("A", &record(None, &["X1(1)", "X2"]));
        assert_eq!(report.cells(), ["A", "", "X1(1)\nX2"]);
    }

    #[test]
    fn serializes_to_json() {
        let report = SkuReport::new("A", &record(Some("3"), &["X1(3)"]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "A", "final_amount": "3", "location_list": "X1(3)"})
        );
    }
}
