//! Session controller owning filter, selection and recency state.

use std::collections::HashMap;

use ratatui::widgets::ListState;

use crate::error::SelectionError;
use crate::logic::{
    self, BrandAvailability, BrandOption, COMPARE_CAPACITY, Page, RecencyQueue, RecordOutcome, SelectionSet,
};
use crate::state::modal::Modal;
use crate::state::types::{Focus, FilterState, RecordId, SelectionChange, VehicleRecord};
use crate::store::{KeyValueStore, RecordStore};
use crate::theme::Settings;

/// Everything one browsing session owns.
///
/// Built only after the catalog loaded, so every operation below can assume a
/// populated record store. The renderer reads this by reference; the event
/// layer mutates it exclusively through the methods here.
#[derive(Debug)]
pub struct AppState {
    /// Read-only catalog.
    pub store: RecordStore,
    /// Effective settings (config file plus CLI overrides).
    pub settings: Settings,
    /// Brand filter, search term and page.
    pub filter: FilterState,
    /// Search text as typed (the filter keeps a lower-cased copy).
    pub input: String,
    /// Compare selection.
    pub selection: SelectionSet,
    /// Recently viewed names.
    pub recent: RecencyQueue,
    /// Active overlay.
    pub modal: Modal,
    /// Transient message; cleared on the next key press.
    pub notice: Option<String>,
    /// Which pane receives keys.
    pub focus: Focus,
    /// Cursor position within the current page.
    pub selected: usize,
    /// Widget state mirroring `selected`.
    pub list_state: ListState,
    /// Units per model name over the full catalog.
    stock: HashMap<String, usize>,
    /// Session storage backing the recency queue.
    kv: Box<dyn KeyValueStore>,
}

impl AppState {
    /// What: Start a session over a loaded catalog.
    ///
    /// Inputs:
    /// - `store`: Loaded record store
    /// - `settings`: Effective settings
    /// - `kv`: Session storage (the recency queue is restored from it)
    ///
    /// Output:
    /// - Fresh state on page 1 with no filter, no selection and the cursor on the first card.
    #[must_use]
    pub fn new(store: RecordStore, settings: Settings, kv: Box<dyn KeyValueStore>) -> Self {
        let recent = RecencyQueue::restore(kv.as_ref());
        let stock = logic::counts_by_name(store.records());
        let mut list_state = ListState::default();
        list_state.select((!store.is_empty()).then_some(0));
        Self {
            store,
            settings,
            filter: FilterState::default(),
            input: String::new(),
            selection: SelectionSet::new(),
            recent,
            modal: Modal::None,
            notice: None,
            focus: Focus::Grid,
            selected: 0,
            list_state,
            stock,
            kv,
        }
    }

    /// What: Current page of the visible inventory.
    ///
    /// Output:
    /// - Filter → dedup → paginate, recomputed from the store on every call.
    #[must_use]
    pub fn page_view(&self) -> Page<&VehicleRecord> {
        let visible = logic::visible_subset(
            self.store.records(),
            &self.filter.brand_filter,
            &self.filter.search_term,
        );
        logic::paginate(&visible, self.settings.page_size, self.filter.current_page)
    }

    /// Change the brand/category filter; always returns to page 1.
    pub fn set_brand_filter(&mut self, value: &str) {
        tracing::debug!(brand = value, "[Filter] Brand filter changed");
        self.filter.brand_filter = value.to_string();
        self.filter.current_page = 1;
        self.reset_cursor();
    }

    /// Dropdown entries: `All Brands`, each brand, then each category.
    #[must_use]
    pub fn brand_options(&self) -> Vec<BrandOption> {
        logic::brand_options(self.store.records())
    }

    /// Showcase entries with their availability, in configured order.
    #[must_use]
    pub fn showcase(&self) -> Vec<(&str, BrandAvailability)> {
        self.settings
            .showcase_brands
            .iter()
            .map(|b| (b.as_str(), logic::brand_availability(b, self.store.records())))
            .collect()
    }

    /// Step through the dropdown (`All Brands`, brands, categories), wrapping at both ends.
    pub fn cycle_brand_filter(&mut self, forward: bool) {
        let values: Vec<String> = self
            .brand_options()
            .into_iter()
            .map(|o| o.value)
            .collect();
        let len = values.len();
        let pos = values
            .iter()
            .position(|v| *v == self.filter.brand_filter)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        if let Some(value) = values.get(next).cloned() {
            self.set_brand_filter(&value);
        }
    }

    /// What: Replace the search text.
    ///
    /// Details:
    /// - Resets to page 1 unless `reset_page_on_search` is off, in which case the page is
    ///   kept even if the narrower result has fewer pages.
    pub fn set_search_term(&mut self, value: &str) {
        self.input = value.to_string();
        self.filter.search_term = value.to_lowercase();
        if self.settings.reset_page_on_search {
            self.filter.current_page = 1;
        }
        self.reset_cursor();
    }

    /// Append one typed character to the search text.
    pub fn push_search_char(&mut self, ch: char) {
        let mut next = self.input.clone();
        next.push(ch);
        self.set_search_term(&next);
    }

    /// Remove the last character of the search text.
    pub fn pop_search_char(&mut self) {
        let mut next = self.input.clone();
        if next.pop().is_some() {
            self.set_search_term(&next);
        }
    }

    /// What: Jump to page `n`.
    ///
    /// Output:
    /// - `true` when the page changed; `false` for `n < 1` or `n` past the last page.
    pub fn set_page(&mut self, n: usize) -> bool {
        if n < 1 {
            return false;
        }
        let last = self.page_view().page_count.max(1);
        if n > last {
            return false;
        }
        self.filter.current_page = n;
        self.reset_cursor();
        true
    }

    /// Advance one page if there is one.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.filter.current_page.saturating_add(1))
    }

    /// Go back one page if not on the first.
    pub fn previous_page(&mut self) -> bool {
        if self.filter.current_page <= 1 {
            return false;
        }
        // A stranded page (past the end after a narrower search) steps back freely.
        self.filter.current_page -= 1;
        self.reset_cursor();
        true
    }

    /// What: Add or remove a vehicle from the compare selection.
    ///
    /// Output:
    /// - The selection change; a full selection also raises a notice.
    pub fn toggle_compare_selection(&mut self, id: RecordId) -> SelectionChange {
        let change = self.selection.toggle(id);
        self.notice = match change {
            SelectionChange::RejectedCapacity => Some(
                SelectionError::CapacityExceeded {
                    capacity: COMPARE_CAPACITY,
                }
                .to_string(),
            ),
            SelectionChange::Added | SelectionChange::Removed => None,
        };
        tracing::debug!(id, ?change, size = self.selection.len(), "[Compare] Toggled");
        change
    }

    /// Empty the compare selection and return how many vehicles it held.
    pub fn clear_compare_selection(&mut self) -> usize {
        let n = self.selection.clear();
        if n > 0 {
            self.notice = Some(format!("Cleared {n} vehicle(s) from compare."));
        }
        n
    }

    /// What: Open the detail view for `id` and record it as recently viewed.
    ///
    /// Output:
    /// - `Some(outcome)` of the recency update; `None` (and no change) for unknown ids.
    pub fn view_detail(&mut self, id: RecordId) -> Option<RecordOutcome> {
        let name = self.store.get(id)?.name.clone();
        let outcome = self.recent.record(&name, self.kv.as_mut());
        self.modal = Modal::Detail { id };
        Some(outcome)
    }

    /// What: Open the comparison table for the current selection.
    ///
    /// # Errors
    /// - `SelectionError::InsufficientSelection` with fewer than two selected; a notice
    ///   is raised and nothing else changes.
    pub fn build_comparison(&mut self) -> Result<(), SelectionError> {
        match logic::build_comparison(&self.selection, &self.store) {
            Ok(comparison) => {
                self.modal = Modal::Compare { comparison };
                Ok(())
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// What: Brand showcase click: filter to the brand, or show "coming soon" when it has
    /// no stock.
    pub fn open_brand(&mut self, brand: &str) -> BrandAvailability {
        let availability = logic::brand_availability(brand, self.store.records());
        match availability {
            BrandAvailability::InStock(_) => self.set_brand_filter(brand),
            BrandAvailability::ComingSoon => {
                self.modal = Modal::ComingSoon {
                    brand: brand.to_string(),
                };
            }
        }
        availability
    }

    /// Open the brand/category dropdown with the active filter highlighted.
    pub fn open_brand_dropdown(&mut self) {
        let cursor = self
            .brand_options()
            .iter()
            .position(|o| o.value == self.filter.brand_filter)
            .unwrap_or(0);
        self.modal = Modal::Brands { cursor };
    }

    /// Open the brand showcase; raises a notice instead when no brands are configured.
    pub fn open_showcase(&mut self) {
        if self.settings.showcase_brands.is_empty() {
            self.notice = Some("No showcase brands configured.".to_string());
            return;
        }
        self.modal = Modal::Showcase { cursor: 0 };
    }

    /// Move the highlight of an open pick list, clamped to its entries.
    pub fn move_modal_cursor(&mut self, delta: isize) {
        let len = match self.modal {
            Modal::Brands { .. } => self.brand_options().len(),
            Modal::Showcase { .. } => self.settings.showcase_brands.len(),
            _ => return,
        };
        if let Modal::Brands { cursor } | Modal::Showcase { cursor } = &mut self.modal {
            *cursor = cursor.saturating_add_signed(delta).min(len.saturating_sub(1));
        }
    }

    /// What: Apply the highlighted entry of an open pick list.
    ///
    /// Output:
    /// - `true` when a pick list was open. The dropdown closes and sets the filter; the
    ///   showcase closes and goes through `open_brand`, which may open "coming soon".
    pub fn confirm_modal_choice(&mut self) -> bool {
        match self.modal {
            Modal::Brands { cursor } => {
                let value = self.brand_options().into_iter().nth(cursor).map(|o| o.value);
                self.modal = Modal::None;
                if let Some(value) = value {
                    self.set_brand_filter(&value);
                }
                true
            }
            Modal::Showcase { cursor } => {
                let brand = self.settings.showcase_brands.get(cursor).cloned();
                self.modal = Modal::None;
                if let Some(brand) = brand {
                    let availability = self.open_brand(&brand);
                    tracing::debug!(brand = %brand, ?availability, "[Filter] Showcase brand opened");
                }
                true
            }
            _ => false,
        }
    }

    /// Units in the full catalog sharing `name`.
    #[must_use]
    pub fn stock_for(&self, name: &str) -> usize {
        self.stock.get(name).copied().unwrap_or(0)
    }

    /// Featured vehicles in load order.
    #[must_use]
    pub fn featured(&self) -> Vec<&VehicleRecord> {
        self.store.featured().collect()
    }

    /// Recently viewed names, most recent first.
    #[must_use]
    pub fn recent(&self) -> &[String] {
        self.recent.current()
    }

    /// Text for the active brand filter.
    #[must_use]
    pub fn brand_label(&self) -> String {
        logic::brand_label(&self.filter.brand_filter, self.store.records())
    }

    /// Move the cursor within the current page, clamped to its bounds.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.page_view().items.len();
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(self.selected));
    }

    /// Vehicle under the cursor.
    #[must_use]
    pub fn selected_record(&self) -> Option<&VehicleRecord> {
        self.page_view().items.get(self.selected).copied()
    }

    /// Wipe the session storage and the in-memory recent list.
    pub fn clear_session(&mut self) {
        self.kv.clear();
        self.recent = RecencyQueue::default();
    }

    /// Put the cursor back on the first card of the current page.
    fn reset_cursor(&mut self) {
        self.selected = 0;
        let has_items = !self.page_view().items.is_empty();
        self.list_state.select(has_items.then_some(0));
    }
}
