//! Headless `--list` output: one inventory page printed as plain text.

use std::fmt::Write as _;

use crate::app::{Launch, initial_state};
use crate::error::LoadError;
use crate::logic::stock_level;
use crate::state::AppState;
use crate::store::{DataSource, MemoryStore, load_store};

/// What: Load the catalog and format the page selected by the launch options.
///
/// Inputs:
/// - `launch`: Effective settings plus initial brand, search and page
///
/// Output:
/// - Listing text ready for stdout.
///
/// # Errors
/// - Any `LoadError` from loading the catalog.
///
/// Details:
/// - Uses an in-memory session store so listing never touches the saved session.
pub async fn handle_list(launch: &Launch) -> Result<String, LoadError> {
    let source = DataSource::parse(&launch.settings.data_source);
    tracing::info!(source = %source, "List requested from CLI");
    let store = load_store(&source).await?;
    let app = initial_state(store, launch, Box::new(MemoryStore::new()));
    Ok(render_listing(&app))
}

/// What: Format the current page of `app` as text.
///
/// Output:
/// - A header line (`brand label · page x/y · n cars`) followed by one tab-separated line per
///   card: name, brand, price, availability. An empty result prints the no-match message.
#[must_use]
pub fn render_listing(app: &AppState) -> String {
    let page = app.page_view();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} · page {}/{} · {} cars",
        app.brand_label(),
        page.effective_page,
        page.page_count.max(1),
        page.total
    );
    if page.items.is_empty() {
        out.push_str("No cars found matching your criteria.\n");
        return out;
    }
    for rec in &page.items {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            rec.name,
            rec.brand,
            rec.price,
            stock_level(app.stock_for(&rec.name)).label()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VehicleRecord;
    use crate::store::RecordStore;

    fn app(search: Option<&str>) -> AppState {
        let records = vec![
            VehicleRecord {
                id: 1,
                name: "M4".into(),
                brand: "BMW".into(),
                price: "$80,000".into(),
                ..Default::default()
            },
            VehicleRecord {
                id: 2,
                name: "M4".into(),
                brand: "BMW".into(),
                price: "$80,000".into(),
                ..Default::default()
            },
        ];
        let store = RecordStore::new(records).expect("unique ids");
        let launch = Launch {
            search: search.map(str::to_string),
            ..Launch::default()
        };
        initial_state(store, &launch, Box::new(MemoryStore::new()))
    }

    #[test]
    /// What: Listing shows the deduplicated card with the full unit count
    fn listing_shows_page() {
        let text = render_listing(&app(None));
        assert!(text.starts_with("All Brands (2) · page 1/1 · 1 cars"));
        assert!(text.contains("M4\tBMW\t$80,000\t2 Units Available"));
    }

    #[test]
    /// What: No matches print the empty-state message
    fn listing_empty() {
        let text = render_listing(&app(Some("zonda")));
        assert!(text.contains("No cars found matching your criteria."));
    }
}
