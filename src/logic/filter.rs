use std::collections::HashSet;

use crate::state::types::{ALL_BRANDS, VehicleRecord};

/// What: Compute the visible inventory: brand/category filter, search, then name dedup.
///
/// Inputs:
/// - `records`: Full record collection in load order
/// - `brand_filter`: `"all"` or a brand/category value (exact match)
/// - `search_term`: Case-insensitive substring of the record name; empty disables it
///
/// Output:
/// - Records passing both predicates, keeping only the first record of each distinct
///   `name`, in input order.
///
/// Details:
/// - Dedup runs after filtering, so a name whose first unit is filtered out is still
///   shown through its first matching unit.
/// - Stock counts are not derived from this output; see `logic::stock`.
pub fn visible_subset<'a>(
    records: &'a [VehicleRecord],
    brand_filter: &str,
    search_term: &str,
) -> Vec<&'a VehicleRecord> {
    let needle = search_term.to_lowercase();
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut visible = Vec::new();
    for rec in records {
        if brand_filter != ALL_BRANDS && !rec.matches_brand(brand_filter) {
            continue;
        }
        if !needle.is_empty() && !rec.name.to_lowercase().contains(&needle) {
            continue;
        }
        if seen.insert(rec.name.as_str()) {
            visible.push(rec);
        }
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::RecordId;

    fn rec(id: RecordId, name: &str, brand: &str, category: Option<&str>) -> VehicleRecord {
        VehicleRecord {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(v: &[&VehicleRecord]) -> Vec<RecordId> {
        v.iter().map(|r| r.id).collect()
    }

    fn catalog() -> Vec<VehicleRecord> {
        vec![
            rec(1, "GT3", "Porsche", Some("sport")),
            rec(2, "GT3", "Porsche", Some("sport")),
            rec(3, "911", "Porsche", None),
            rec(4, "Bentley Continental", "Bentley", Some("grand-tourer")),
            rec(5, "Cullinan", "Rolls-Royce", Some("suv")),
            rec(6, "Range Rover Sport", "Range Rover", Some("suv")),
            rec(7, "911", "Porsche", None),
        ]
    }

    #[test]
    /// What: `"all"` with no search keeps load order and drops later same-name records
    ///
    /// - Input: Catalog with GT3 twice and 911 twice
    /// - Output: First occurrence of each name only
    fn all_without_search_dedups_in_order() {
        let data = catalog();
        assert_eq!(ids(&visible_subset(&data, "all", "")), vec![1, 3, 4, 5, 6]);
    }

    #[test]
    /// What: Dedup example from the inventory grid
    ///
    /// - Input: `[{1,GT3},{2,GT3},{3,911}]`
    /// - Output: `[1, 3]`
    fn dedup_keeps_first_occurrence() {
        let data = vec![
            rec(1, "GT3", "Porsche", None),
            rec(2, "GT3", "Porsche", None),
            rec(3, "911", "Porsche", None),
        ];
        assert_eq!(ids(&visible_subset(&data, "all", "")), vec![1, 3]);
    }

    #[test]
    /// What: Brand filter matches brand or category, exactly
    ///
    /// - Input: Filters "suv", "Porsche" and "porsche"
    /// - Output: Category and brand matches retained; lower-case brand matches nothing
    fn brand_filter_matches_brand_or_category() {
        let data = catalog();
        assert_eq!(ids(&visible_subset(&data, "suv", "")), vec![5, 6]);
        assert_eq!(ids(&visible_subset(&data, "Porsche", "")), vec![1, 3]);
        assert!(visible_subset(&data, "porsche", "").is_empty());
    }

    #[test]
    /// What: Brand filter drops exactly the non-matching records before dedup
    fn brand_filter_removes_only_non_matching() {
        let data = catalog();
        let kept: Vec<&VehicleRecord> = data.iter().filter(|r| r.matches_brand("sport")).collect();
        let visible = visible_subset(&data, "sport", "");
        assert!(visible.iter().all(|r| r.matches_brand("sport")));
        assert_eq!(kept.len(), 2);
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    /// What: Search is case-insensitive substring matching on the name
    ///
    /// - Input: Terms "ben", "BEN", "sport", "zzz"
    /// - Output: Bentley matches either case; "sport" matches inside a name; "zzz" matches nothing
    fn search_is_case_insensitive_substring() {
        let data = catalog();
        assert_eq!(ids(&visible_subset(&data, "all", "ben")), vec![4]);
        assert_eq!(ids(&visible_subset(&data, "all", "BEN")), vec![4]);
        assert_eq!(ids(&visible_subset(&data, "all", "sport")), vec![6]);
        assert!(visible_subset(&data, "all", "zzz").is_empty());
    }

    #[test]
    /// What: Filter and search compose
    fn brand_and_search_compose() {
        let data = catalog();
        assert_eq!(ids(&visible_subset(&data, "suv", "range")), vec![6]);
        assert!(visible_subset(&data, "Bentley", "range").is_empty());
    }

    #[test]
    /// What: Dedup applies to the filtered sequence, not the raw one
    ///
    /// - Input: First "Coupe" unit is a BMW, second a Mercedes; filter Mercedes-Benz
    /// - Output: The Mercedes unit is shown
    fn dedup_runs_after_filtering() {
        let data = vec![
            rec(1, "Coupe", "BMW", None),
            rec(2, "Coupe", "Mercedes-Benz", None),
        ];
        assert_eq!(ids(&visible_subset(&data, "Mercedes-Benz", "")), vec![2]);
    }
}
