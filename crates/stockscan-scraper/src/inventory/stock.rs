//! Final stock quantity extraction.

use super::page::InventoryPage;

/// Header text that marks the quantity table.
const QUANTITY_HEADER_MARKER: &str = "Qt.";
/// Minimum width of a row read by the fallback scan.
const WIDE_ROW_MIN_CELLS: usize = 8;

/// Reads the final stock quantity for `search_term` from a search page.
///
/// Two layouts are recognised, tried in order:
/// 1. A `Qt.` header cell whose row is followed by a sibling row of at least
///    three cells: the third cell holds the quantity.
/// 2. Any row of at least eight cells mentioning `search_term`: the eighth
///    cell holds the quantity.
///
/// Returns `None` when neither layout matches or the matched cell is blank.
#[must_use]
pub fn extract_final_stock(page: &InventoryPage, search_term: &str) -> Option<String> {
    if let Some(stock) = stock_below_quantity_header(page) {
        tracing::debug!(search_term, stock = %stock, "final stock read below Qt. header");
        return Some(stock);
    }

    if let Some(stock) = stock_from_wide_row(page, search_term) {
        tracing::debug!(search_term, stock = %stock, "final stock read from wide row");
        return Some(stock);
    }

    tracing::debug!(search_term, "no final stock row on page");
    None
}

fn stock_below_quantity_header(page: &InventoryPage) -> Option<String> {
    page.cells()
        .iter()
        .filter(|cell| cell.text.contains(QUANTITY_HEADER_MARKER))
        .find_map(|cell| {
            let header_row = page.row(cell.row?)?;
            let value_row = page.row(header_row.next_sibling?)?;
            value_row.cells.get(2).cloned()
        })
        .filter(|stock| !stock.is_empty())
}

fn stock_from_wide_row(page: &InventoryPage, search_term: &str) -> Option<String> {
    page.rows()
        .iter()
        .find(|row| row.cells.len() >= WIDE_ROW_MIN_CELLS && row.text.contains(search_term))
        .and_then(|row| row.cells.get(WIDE_ROW_MIN_CELLS - 1).cloned())
        .filter(|stock| !stock.is_empty())
}
