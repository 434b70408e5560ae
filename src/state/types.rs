//! Core value types used by showroom state.

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a vehicle record within one loaded catalog.
pub type RecordId = u32;

/// Brand filter value that disables brand/category filtering.
pub const ALL_BRANDS: &str = "all";

/// One selectable paint option for a vehicle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    /// Marketing name of the paint (e.g., "Guards Red").
    #[serde(default)]
    pub name: String,
    /// Hex swatch used by graphical front-ends.
    #[serde(default)]
    pub hex: String,
    /// Image showing the vehicle in this paint.
    #[serde(default)]
    pub img: String,
}

/// A single vehicle entry in the catalog.
///
/// Several records may share a `name`: each one is a distinct physical unit of
/// the same model. Only `id` is unique. Everything past `featured` is display
/// data carried through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Unique, stable identifier.
    pub id: RecordId,
    /// Model name; the display deduplication and stock key.
    pub name: String,
    /// Manufacturer.
    pub brand: String,
    /// Optional alternate grouping (e.g., "suv") matched by the brand filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the vehicle appears in the featured strip.
    #[serde(default)]
    pub featured: bool,
    /// Short badge text shown on the card (e.g., "New").
    #[serde(default)]
    pub badge: String,
    /// Secondary headline under the name.
    #[serde(default)]
    pub subtitle: String,
    /// Formatted price.
    #[serde(default)]
    pub price: String,
    /// Formatted power output.
    #[serde(default)]
    pub power: String,
    /// Formatted 0-100 time.
    #[serde(default)]
    pub acceleration: String,
    /// Engine description.
    #[serde(default)]
    pub engine: String,
    /// Model year. Catalog files carry it either as a number or a string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    /// Long description for the detail view.
    #[serde(default)]
    pub description: String,
    /// Gallery images.
    #[serde(default)]
    pub images: Vec<String>,
    /// Paint options.
    #[serde(default)]
    pub colors: Vec<ColorOption>,
}

impl VehicleRecord {
    /// What: Check whether this record belongs to the given brand filter value.
    ///
    /// Inputs:
    /// - `filter`: Brand or category value (never the `all` sentinel here)
    ///
    /// Output:
    /// - `true` when either `brand` or `category` equals `filter` exactly.
    #[must_use]
    pub fn matches_brand(&self, filter: &str) -> bool {
        self.brand == filter || self.category.as_deref() == Some(filter)
    }

    /// Image shown on the card: the first paint option wins over the gallery.
    #[must_use]
    pub fn display_image(&self) -> Option<&str> {
        self.colors
            .first()
            .map(|c| c.img.as_str())
            .or_else(|| self.images.first().map(String::as_str))
    }
}

/// Accept `2024` as well as `"2024"` for display-only fields.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// User-driven predicates applied to the inventory grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// `"all"` or a brand/category value.
    pub brand_filter: String,
    /// Lower-cased search text; empty disables the search predicate.
    pub search_term: String,
    /// 1-based page number.
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            brand_filter: ALL_BRANDS.to_string(),
            search_term: String::new(),
            current_page: 1,
        }
    }
}

impl FilterState {
    /// Whether a brand/category filter is active.
    #[must_use]
    pub fn is_brand_filtered(&self) -> bool {
        self.brand_filter != ALL_BRANDS
    }
}

/// Outcome of toggling an id in the compare selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// The id was appended.
    Added,
    /// The id was present and has been removed.
    Removed,
    /// The selection is full; nothing changed.
    RejectedCapacity,
}

/// Which pane receives typed characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Navigation keys drive the inventory grid.
    #[default]
    Grid,
    /// Characters edit the search term.
    Search,
}
