use crate::state::AppState;
use crate::store::{FileStore, KeyValueStore, MemoryStore, RecordStore};
use crate::theme::{SessionStoreKind, Settings, session_path};

/// What: Everything needed to start a session, after CLI overrides.
///
/// Details:
/// - `brand`, `search` and `page` seed the filter state; `None` keeps the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Launch {
    /// Effective settings (config file plus CLI overrides).
    pub settings: Settings,
    /// Initial brand/category filter.
    pub brand: Option<String>,
    /// Initial search term.
    pub search: Option<String>,
    /// Initial page (1-based).
    pub page: Option<usize>,
    /// Wipe the stored session before the recency queue is used.
    pub clear_session: bool,
}

/// What: Open the session storage selected in settings.
///
/// Output:
/// - `FileStore` at `<config>/session.json`, or a fresh `MemoryStore`.
#[must_use]
pub fn open_session_store(kind: SessionStoreKind) -> Box<dyn KeyValueStore> {
    match kind {
        SessionStoreKind::File => {
            let path = session_path();
            tracing::debug!(path = %path.display(), "[Session] Using file store");
            Box::new(FileStore::open(&path))
        }
        SessionStoreKind::Memory => {
            tracing::debug!("[Session] Using in-memory store");
            Box::new(MemoryStore::new())
        }
    }
}

/// What: Build the session state for a loaded catalog and apply the launch options.
///
/// Inputs:
/// - `store`: Loaded record store
/// - `launch`: Settings and initial filter values
/// - `kv`: Session storage
///
/// Output:
/// - `AppState` with brand, then search, then page applied in that order.
///
/// Details:
/// - An out-of-range initial page is ignored and the session starts on page 1.
#[must_use]
pub fn initial_state(store: RecordStore, launch: &Launch, kv: Box<dyn KeyValueStore>) -> AppState {
    let mut app = AppState::new(store, launch.settings.clone(), kv);
    if launch.clear_session {
        app.clear_session();
        tracing::info!("[Session] Cleared stored session");
    }
    if let Some(brand) = &launch.brand {
        app.set_brand_filter(brand);
    }
    if let Some(term) = &launch.search {
        app.set_search_term(term);
    }
    if let Some(page) = launch.page
        && !app.set_page(page)
    {
        tracing::warn!(page, "[Session] Initial page out of range; starting on page 1");
    }
    app
}
