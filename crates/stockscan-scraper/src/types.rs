//! Records produced by the inventory page parser.

use serde::{Deserialize, Serialize};

/// Consolidated stock for one SKU as read from a warehouse search page.
///
/// `locations` holds `CODE` or `CODE(qty)` strings, deduplicated and sorted
/// case-insensitively. Both fields are best-effort: a page without a stock
/// row or location cells yields `None` and an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub final_stock: Option<String>,
    pub locations: Vec<String>,
}

/// The most specific location code seen for one base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    /// Normalized code up to its first `-`.
    pub base_name: String,
    /// Trimmed, uppercased code as it appeared before the quantity.
    pub normalized_location: String,
    /// Raw quantity text from the cell that produced this entry, empty when
    /// the cell had none. Totals are summed separately, so this is informational.
    pub quantity: String,
}

impl LocationEntry {
    /// A hyphenated code that is longer than the current one names a more
    /// specific bin within the same base location.
    #[must_use]
    pub fn is_more_specific_than(&self, other: &LocationEntry) -> bool {
        self.normalized_location.contains('-')
            && self.normalized_location.chars().count() > other.normalized_location.chars().count()
    }
}
