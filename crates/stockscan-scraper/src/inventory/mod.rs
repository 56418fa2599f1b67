//! Inventory search page parsing.
//!
//! Turns the HTML of one warehouse search result into a [`StockRecord`].
//! Everything here is synchronous and side-effect free; every call works on
//! its own page snapshot, so pages for different SKUs can be parsed
//! concurrently without coordination.

mod display;
mod locations;
mod page;
mod stock;

pub use display::filter_display_locations;
pub use locations::extract_locations;
pub use page::{Cell, InventoryPage, Row};
pub use stock::extract_final_stock;

use crate::types::StockRecord;

/// Parses a search result page for `search_term` into a [`StockRecord`].
///
/// Never fails: missing tables, rows or quantities degrade to `None` and an
/// empty location list.
#[must_use]
pub fn parse_stock_record(html: &str, search_term: &str) -> StockRecord {
    StockRecord::from_page(&InventoryPage::parse(html), search_term)
}

impl StockRecord {
    #[must_use]
    pub fn from_page(page: &InventoryPage, search_term: &str) -> Self {
        if page.is_empty() {
            return Self::default();
        }
        Self {
            final_stock: extract_final_stock(page, search_term),
            locations: extract_locations(page),
        }
    }
}

#[cfg(test)]
#[path = "../inventory_test.rs"]
mod tests;
