//! Report-side cleanup of parsed location lists.

/// Values that are unit labels or padding rather than locations.
const EXCLUDED_EXACT: [&str; 4] = ["cm", "inch", "", " "];

/// Removes entries that should not be shown for `sku`.
///
/// Drops unit labels and anything mentioning `cm`/`inch`, outbound staging
/// areas (any case), and the SKU itself. The report substitutes `none` when
/// nothing is left.
#[must_use]
pub fn filter_display_locations(locations: &[String], sku: &str) -> Vec<String> {
    locations
        .iter()
        .filter(|location| is_displayable(location, sku))
        .cloned()
        .collect()
}

fn is_displayable(location: &str, sku: &str) -> bool {
    !EXCLUDED_EXACT.contains(&location)
        && !location.contains("cm")
        && !location.contains("inch")
        && !location.to_lowercase().contains("outbound")
        && location != sku
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn drops_sku_and_outbound_in_any_case() {
        let locations = owned(&["A1-01(8)", "CW0026-NGS-1", "OUTBOUND-3(2)", "Outbound", "B2"]);
        assert_eq!(
            filter_display_locations(&locations, "CW0026-NGS-1"),
            vec!["A1-01(8)", "B2"]
        );
    }

    #[test]
    fn drops_unit_labels_and_padding() {
        let locations = owned(&["cm", "inch", "", " ", "12cm", "3inch", "C4"]);
        assert_eq!(filter_display_locations(&locations, "sku"), vec!["C4"]);
    }

    #[test]
    fn unit_match_is_case_sensitive() {
        let locations = owned(&["CM-1(2)", "INCH-2"]);
        assert_eq!(filter_display_locations(&locations, "sku"), locations);
    }

    #[test]
    fn sku_match_is_exact() {
        let locations = owned(&["3C-05-BK(2)", "3c-05-bk"]);
        assert_eq!(
            filter_display_locations(&locations, "3C-05-BK"),
            vec!["3C-05-BK(2)", "3c-05-bk"]
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter_display_locations(&[], "sku").is_empty());
    }
}
