use std::collections::HashMap;

use crate::state::types::{ALL_BRANDS, VehicleRecord};

/// Availability wording class for a model's unit count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    /// One unit (or fewer) left; rendered as a low-stock warning.
    LastUnit,
    /// More than one unit.
    Available(usize),
}

impl StockLevel {
    /// Card badge text.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::LastUnit => "1 unit Available".to_string(),
            Self::Available(n) => format!("{n} Units Available"),
        }
    }
}

/// Whether a brand can be browsed or is still being sourced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrandAvailability {
    /// At least one unit in the catalog.
    InStock(usize),
    /// No units; shown as "coming soon".
    ComingSoon,
}

/// One entry of the brand dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandOption {
    /// Filter value (`"all"`, a brand name or a category).
    pub value: String,
    /// Display text.
    pub label: String,
    /// Units behind this option.
    pub count: usize,
}

/// What: Count units per model name over the full collection.
///
/// Inputs:
/// - `records`: Full catalog (pre-filter, pre-dedup)
///
/// Output:
/// - Map from name to number of records carrying it.
pub fn counts_by_name(records: &[VehicleRecord]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for r in records {
        *counts.entry(r.name.clone()).or_insert(0) += 1;
    }
    counts
}

/// What: Count units per brand over the full collection.
///
/// Inputs:
/// - `records`: Full catalog (pre-filter, pre-dedup)
///
/// Output:
/// - Map from brand to number of records.
pub fn counts_by_brand(records: &[VehicleRecord]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for r in records {
        *counts.entry(r.brand.clone()).or_insert(0) += 1;
    }
    counts
}

/// Classify a unit count; exactly one is the low-stock boundary.
#[must_use]
pub const fn stock_level(count: usize) -> StockLevel {
    if count > 1 {
        StockLevel::Available(count)
    } else {
        StockLevel::LastUnit
    }
}

/// Distinct brands in first-seen order.
pub fn unique_brands(records: &[VehicleRecord]) -> Vec<&str> {
    let mut brands: Vec<&str> = Vec::new();
    for r in records {
        if !brands.contains(&r.brand.as_str()) {
            brands.push(r.brand.as_str());
        }
    }
    brands
}

/// Distinct categories in first-seen order, skipping any that collide with a brand name.
pub fn unique_categories(records: &[VehicleRecord]) -> Vec<&str> {
    let brands = unique_brands(records);
    let mut categories: Vec<&str> = Vec::new();
    for cat in records.iter().filter_map(|r| r.category.as_deref()) {
        if !brands.contains(&cat) && !categories.contains(&cat) {
            categories.push(cat);
        }
    }
    categories
}

/// What: Build the brand dropdown entries.
///
/// Inputs:
/// - `records`: Full catalog
///
/// Output:
/// - `"All Brands (N)"` with the total unit count, then one entry per brand in first-seen
///   order with its unit count, then one entry per category (see `unique_categories`).
///
/// Details:
/// - A category entry counts the records whose `category` equals it; brand entries count
///   by `brand` only.
pub fn brand_options(records: &[VehicleRecord]) -> Vec<BrandOption> {
    let counts = counts_by_brand(records);
    let mut options = vec![BrandOption {
        value: ALL_BRANDS.to_string(),
        label: format!("All Brands ({})", records.len()),
        count: records.len(),
    }];
    options.extend(unique_brands(records).into_iter().map(|brand| {
        let count = counts.get(brand).copied().unwrap_or(0);
        BrandOption {
            value: brand.to_string(),
            label: format!("{brand} ({count})"),
            count,
        }
    }));
    options.extend(unique_categories(records).into_iter().map(|cat| {
        let count = records
            .iter()
            .filter(|r| r.category.as_deref() == Some(cat))
            .count();
        BrandOption {
            value: cat.to_string(),
            label: format!("{cat} ({count})"),
            count,
        }
    }));
    options
}

/// What: Text for the active brand filter button.
///
/// Inputs:
/// - `filter`: Current brand filter value
/// - `records`: Full catalog
///
/// Output:
/// - `"All Brands (N)"` for the sentinel, otherwise `"<filter> (<units>)"`.
///
/// Details:
/// - Units are counted with `VehicleRecord::matches_brand`, so a category value such as
///   "suv" reports the records the grid actually shows for it.
pub fn brand_label(filter: &str, records: &[VehicleRecord]) -> String {
    if filter == ALL_BRANDS {
        return format!("All Brands ({})", records.len());
    }
    let count = records.iter().filter(|r| r.matches_brand(filter)).count();
    format!("{filter} ({count})")
}

/// Availability of `brand` for the brand showcase.
pub fn brand_availability(brand: &str, records: &[VehicleRecord]) -> BrandAvailability {
    match records.iter().filter(|r| r.brand == brand).count() {
        0 => BrandAvailability::ComingSoon,
        n => BrandAvailability::InStock(n),
    }
}
