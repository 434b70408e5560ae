//! Inventory logic: filtering, pagination, compare selection, recently viewed
//! history and stock aggregation.
//!
//! Everything here is plain data in, plain data out. The only side effect is
//! the recency queue writing its slot into the injected key-value store.

pub mod compare;
pub mod filter;
pub mod paginate;
pub mod recent;
pub mod selection;
pub mod stock;

pub use compare::{CompareRow, Comparison, build_comparison};
pub use filter::visible_subset;
pub use paginate::{Page, paginate};
pub use recent::{RECENT_CAPACITY, RECENT_KEY, RecencyQueue, RecordOutcome};
pub use selection::{COMPARE_CAPACITY, COMPARE_MINIMUM, SelectionSet};
pub use stock::{
    BrandAvailability, BrandOption, StockLevel, brand_availability, brand_label, brand_options,
    counts_by_brand, counts_by_name, stock_level, unique_brands, unique_categories,
};
