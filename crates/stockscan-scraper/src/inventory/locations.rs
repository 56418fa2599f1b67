//! Storage location extraction and quantity aggregation.
//!
//! Location cells look like `A1-01(5)`: a bin code followed by the quantity
//! stored there. The same bin may appear in several cells (one per receipt),
//! with different capitalisation, so the page is read twice: once to learn
//! which codes exist, once to sum every cell that starts with a known code.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::page::{Cell, InventoryPage};
use crate::types::LocationEntry;

/// Cell texts containing any of these are never location codes.
///
/// Matched as substrings, so `Move Inventory to: (select)` is caught too.
const EXCLUDED_FRAGMENTS: [&str; 3] = ["Move Inventory to:", "Order", "Processed"];

/// Returns the consolidated `CODE` / `CODE(qty)` list for a search page.
///
/// Entries are deduplicated and sorted case-insensitively. A page without
/// location cells yields an empty list.
#[must_use]
pub fn extract_locations(page: &InventoryPage) -> Vec<String> {
    let entries = collect_location_entries(page.cells());
    let totals = aggregate_quantities(page.cells(), &entries);
    tracing::debug!(
        known_locations = entries.len(),
        aggregated = totals.len(),
        "aggregated location quantities"
    );
    dedupe_and_sort(totals.iter().map(ToString::to_string))
}

/// Pass 1: keeps the most specific code per base name, in first-seen order.
pub(crate) fn collect_location_entries(cells: &[Cell]) -> Vec<LocationEntry> {
    let mut entries: Vec<LocationEntry> = Vec::new();
    let mut by_base_name: HashMap<String, usize> = HashMap::new();

    for cell in cells {
        let text = cell.text.trim();
        if !is_location_candidate(text) {
            continue;
        }

        let (base_location, quantity) = split_location(text);
        if base_location.is_empty() {
            continue;
        }

        let normalized_location = base_location.to_uppercase();
        let base_name = normalized_location
            .split_once('-')
            .map_or(normalized_location.as_str(), |(head, _)| head)
            .to_string();
        let entry = LocationEntry {
            base_name: base_name.clone(),
            normalized_location,
            quantity: quantity.unwrap_or_default().to_string(),
        };

        match by_base_name.entry(base_name) {
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push(entry);
            }
            Entry::Occupied(slot) => {
                let existing = &mut entries[*slot.get()];
                if entry.is_more_specific_than(existing) {
                    *existing = entry;
                }
            }
        }
    }

    entries
}

/// Summed quantity for one spelling of a location as it appears on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocationTotal {
    pub location: String,
    pub quantity: u64,
}

impl fmt::Display for LocationTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity > 0 {
            write!(f, "{}({})", self.location, self.quantity)
        } else {
            f.write_str(&self.location)
        }
    }
}

/// Pass 2: sums every non-excluded cell that starts with a known code.
///
/// Totals are keyed by the cell's own code (the text before `(`), compared
/// case-insensitively; the first spelling seen is the one reported. A cell
/// counts once even when several known codes prefix it.
pub(crate) fn aggregate_quantities(cells: &[Cell], entries: &[LocationEntry]) -> Vec<LocationTotal> {
    let mut totals: Vec<LocationTotal> = Vec::new();
    let mut by_location: HashMap<String, usize> = HashMap::new();

    for cell in cells {
        let text = cell.text.trim();
        if is_excluded(text) {
            continue;
        }
        let upper = text.to_uppercase();
        if !entries
            .iter()
            .any(|entry| upper.starts_with(entry.normalized_location.as_str()))
        {
            continue;
        }

        let (base_location, quantity) = split_location(text);
        let quantity = parse_quantity(quantity);

        match by_location.entry(base_location.to_uppercase()) {
            Entry::Vacant(slot) => {
                slot.insert(totals.len());
                totals.push(LocationTotal {
                    location: base_location.to_string(),
                    quantity,
                });
            }
            Entry::Occupied(slot) => {
                let total = &mut totals[*slot.get()];
                total.quantity = total.quantity.saturating_add(quantity);
            }
        }
    }

    totals
}

/// Drops case-insensitive duplicates (first spelling wins) and sorts by the
/// uppercase form.
pub(crate) fn dedupe_and_sort<I>(locations: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = locations
        .into_iter()
        .filter(|location| seen.insert(location.to_uppercase()))
        .collect();
    unique.sort_by_cached_key(|location| location.to_uppercase());
    unique
}

/// Pass 1 only learns codes from cells that carry a quantity.
fn is_location_candidate(text: &str) -> bool {
    !text.is_empty() && text.contains('(') && !is_excluded(text)
}

/// Cells that are never locations, whichever pass reads them.
fn is_excluded(text: &str) -> bool {
    if EXCLUDED_FRAGMENTS
        .iter()
        .any(|fragment| text.contains(fragment))
    {
        return true;
    }
    if text.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    let lower = text.to_lowercase();
    if lower.contains("cm") || lower.contains("inch") {
        return true;
    }

    text.to_uppercase().starts_with("MTIPS")
}

/// Splits `CODE(qty)` into the trimmed code and the raw quantity text.
///
/// The quantity runs from the first `(` to the next `(`, with trailing `)`
/// removed. Cells without `(` have no quantity.
fn split_location(text: &str) -> (&str, Option<&str>) {
    match text.split_once('(') {
        Some((code, rest)) => {
            let raw = rest.split_once('(').map_or(rest, |(quantity, _)| quantity);
            (code.trim(), Some(raw.trim_end_matches(')')))
        }
        None => (text.trim(), None),
    }
}

/// Plain digit strings parse; anything else (blank, signed, spaced, overflow)
/// reads as 0.
fn parse_quantity(raw: Option<&str>) -> u64 {
    raw.filter(|q| !q.is_empty() && q.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|q| q.parse().ok())
        .unwrap_or(0)
}
