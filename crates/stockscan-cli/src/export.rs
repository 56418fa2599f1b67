//! Spreadsheet export of lookup results.
//!
//! Layout: a header row, then one row per SKU followed by two blank
//! separator rows. Every cell wraps and aligns to the top so multi-line
//! location lists stay readable.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::report::SkuReport;

pub(crate) const HEADERS: [&str; 3] = ["id", "final amount", "location list"];
const SEPARATOR_ROWS: u32 = 2;
/// Points per line of a wrapped location list.
const LINE_HEIGHT: f64 = 15.0;
const COLUMN_PADDING: f64 = 2.0;

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("failed to write spreadsheet {path}: {source}")]
    Xlsx {
        path: String,
        #[source]
        source: XlsxError,
    },
}

/// `inventory_report_<timestamp>.xlsx` inside `dir`.
pub(crate) fn default_export_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "inventory_report_{}.xlsx",
        now.format("%Y%m%d_%H%M%S")
    ))
}

/// Writes `reports` to a new workbook at `path`, replacing any existing file.
pub(crate) fn export_to_xlsx(reports: &[SkuReport], path: &Path) -> Result<(), ExportError> {
    let wrap = |source| ExportError::Xlsx {
        path: path.display().to_string(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_sheet(worksheet, reports).map_err(wrap)?;
    workbook.save(path).map_err(wrap)?;

    tracing::info!(path = %path.display(), rows = reports.len(), "exported inventory report");
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, reports: &[SkuReport]) -> Result<(), XlsxError> {
    let cell_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);
    let header_format = cell_format.clone().set_bold();

    worksheet.set_name("Inventory")?;

    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (index, report) in reports.iter().enumerate() {
        let row = data_row(index);
        for (col, value) in (0u16..).zip(report.cells()) {
            worksheet.write_string_with_format(row, col, value, &cell_format)?;
        }
        for separator in separator_rows(index) {
            for col in (0u16..).take(HEADERS.len()) {
                worksheet.write_blank(separator, col, &cell_format)?;
            }
        }
    }

    for (row, height) in row_heights(reports) {
        worksheet.set_row_height(row, height)?;
    }

    for (col, width) in (0u16..).zip(column_widths(reports)) {
        worksheet.set_column_width(col, width)?;
    }

    Ok(())
}

/// Sheet row of the `index`th report. Row 0 is the header.
fn data_row(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(1 + SEPARATOR_ROWS).saturating_add(1)
}

/// Blank rows written after the `index`th report.
fn separator_rows(index: usize) -> RangeInclusive<u32> {
    let row = data_row(index);
    row.saturating_add(1)..=row.saturating_add(SEPARATOR_ROWS)
}

/// Height for every data row; header and separator rows keep the default.
fn row_heights(reports: &[SkuReport]) -> Vec<(u32, f64)> {
    reports
        .iter()
        .enumerate()
        .map(|(index, report)| (data_row(index), row_height(&report.location_list)))
        .collect()
}

/// Height of a data row: one [`LINE_HEIGHT`] per line of the location list.
fn row_height(location_list: &str) -> f64 {
    let lines = location_list.matches('\n').count() + 1;
    LINE_HEIGHT * f64::from(u32::try_from(lines).unwrap_or(u32::MAX))
}

/// Widths sized to the longest single line in each column, header included.
fn column_widths(reports: &[SkuReport]) -> [f64; 3] {
    let mut longest = HEADERS.map(longest_line);
    for report in reports {
        for (width, value) in longest.iter_mut().zip(report.cells()) {
            *width = (*width).max(longest_line(value));
        }
    }
    longest.map(|chars| f64::from(u32::try_from(chars).unwrap_or(u32::MAX)) + COLUMN_PADDING)
}

fn longest_line(value: &str) -> usize {
    value.lines().map(|line| line.chars().count()).max().unwrap_or(0)
}
