//! Event handling layer for the showroom TUI.
//!
//! Key presses are translated into `AppState` operations. Modal overlays and
//! the search field take precedence over grid navigation.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{ALL_BRANDS, AppState, Focus, Modal};

mod modals;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    app.notice = None;

    if app.modal.is_open() {
        modals::handle_modal_key(ke, app);
        return false;
    }
    match app.focus {
        Focus::Search => {
            search::handle_search_key(ke, app);
            false
        }
        Focus::Grid => handle_grid_key(ke, app),
    }
}

/// Grid navigation and actions. Returns `true` on quit.
fn handle_grid_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_page();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_page();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => {
            if let Some(id) = app.selected_record().map(|r| r.id) {
                app.view_detail(id);
            }
        }
        KeyCode::Char('c') => {
            if let Some(id) = app.selected_record().map(|r| r.id) {
                app.toggle_compare_selection(id);
            }
        }
        KeyCode::Char('x') => {
            app.clear_compare_selection();
        }
        KeyCode::Char('v') => {
            // Failure already surfaced as a notice.
            let _ = app.build_comparison();
        }
        KeyCode::Char('b') => app.cycle_brand_filter(true),
        KeyCode::Char('B') => app.cycle_brand_filter(false),
        KeyCode::Char('a') => app.set_brand_filter(ALL_BRANDS),
        KeyCode::Char('f') => app.open_brand_dropdown(),
        KeyCode::Char('o') => app.open_showcase(),
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Char(d) if d.is_ascii_digit() && d != '0' => {
            let n = d.to_digit(10).map_or(1, |v| v as usize);
            app.set_page(n);
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VehicleRecord;
    use crate::store::{MemoryStore, RecordStore};
    use crate::theme::Settings;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Porsche on odd ids, BMW on even; ids 4 and 5 are "suv", the rest "coupe".
    fn app() -> AppState {
        let records = (1..=5)
            .map(|i| VehicleRecord {
                id: i,
                name: format!("Model {i}"),
                brand: if i % 2 == 0 { "BMW" } else { "Porsche" }.to_string(),
                category: Some(if i > 3 { "suv" } else { "coupe" }.to_string()),
                ..Default::default()
            })
            .collect();
        let store = RecordStore::new(records).expect("unique ids");
        AppState::new(store, Settings::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    /// What: Quit keys end the loop; other keys do not
    fn quit_keys() {
        let mut app = app();
        assert!(!handle_event(key(KeyCode::Down), &mut app));
        assert!(handle_event(key(KeyCode::Char('q')), &mut app));
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(ctrl_c, &mut app));
    }

    #[test]
    /// What: Enter opens details for the card under the cursor and Esc closes it
    fn enter_opens_detail() {
        let mut app = app();
        handle_event(key(KeyCode::Down), &mut app);
        handle_event(key(KeyCode::Enter), &mut app);
        assert_eq!(app.modal, Modal::Detail { id: 2 });
        assert_eq!(app.recent(), &["Model 2"]);
        // Esc closes the modal instead of quitting
        assert!(!handle_event(key(KeyCode::Esc), &mut app));
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Compare keys toggle, report insufficient selection, and open the table
    fn compare_keys() {
        let mut app = app();
        handle_event(key(KeyCode::Char('c')), &mut app);
        handle_event(key(KeyCode::Char('v')), &mut app);
        assert!(app.notice.is_some());
        assert_eq!(app.modal, Modal::None);

        handle_event(key(KeyCode::Down), &mut app);
        handle_event(key(KeyCode::Char('c')), &mut app);
        handle_event(key(KeyCode::Char('v')), &mut app);
        assert!(matches!(app.modal, Modal::Compare { .. }));
    }

    #[test]
    /// What: Page keys move between pages and digits jump directly
    fn paging_keys() {
        let mut app = app();
        handle_event(key(KeyCode::Right), &mut app);
        assert_eq!(app.filter.current_page, 2);
        handle_event(key(KeyCode::Right), &mut app);
        assert_eq!(app.filter.current_page, 2);
        handle_event(key(KeyCode::Char('1')), &mut app);
        assert_eq!(app.filter.current_page, 1);
        handle_event(key(KeyCode::Char('9')), &mut app);
        assert_eq!(app.filter.current_page, 1);
    }

    #[test]
    /// What: Search mode captures characters until Enter
    fn search_mode_typing() {
        let mut app = app();
        handle_event(key(KeyCode::Char('/')), &mut app);
        for ch in "l 5".chars() {
            handle_event(key(KeyCode::Char(ch)), &mut app);
        }
        assert_eq!(app.input, "l 5");
        // 'q' is text while searching
        assert!(!handle_event(key(KeyCode::Char('q')), &mut app));
        handle_event(key(KeyCode::Backspace), &mut app);
        handle_event(key(KeyCode::Enter), &mut app);
        assert_eq!(app.focus, Focus::Grid);
        assert_eq!(app.page_view().items.len(), 1);
    }

    #[test]
    /// What: Brand keys cycle and reset the filter
    fn brand_keys() {
        let mut app = app();
        handle_event(key(KeyCode::Char('b')), &mut app);
        assert_eq!(app.filter.brand_filter, "Porsche");
        handle_event(key(KeyCode::Char('a')), &mut app);
        assert_eq!(app.filter.brand_filter, ALL_BRANDS);
    }

    #[test]
    /// What: Categories are reachable by cycling with `b` after the brands
    ///
    /// - Input: `b` pressed four times, then `B` once
    /// - Output: Porsche, BMW, coupe, suv; `B` steps back to coupe
    fn brand_cycle_reaches_categories() {
        let mut app = app();
        for _ in 0..4 {
            handle_event(key(KeyCode::Char('b')), &mut app);
        }
        assert_eq!(app.filter.brand_filter, "suv");
        let ids: Vec<_> = app.page_view().items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 5]);
        assert_eq!(app.brand_label(), "suv (2)");
        handle_event(key(KeyCode::Char('B')), &mut app);
        assert_eq!(app.filter.brand_filter, "coupe");
    }

    #[test]
    /// What: The `f` dropdown selects a category with arrows and Enter
    ///
    /// - Input: `f`, Down four times, Enter
    /// - Output: Dropdown closes and the grid shows the two suvs
    fn dropdown_selects_category() {
        let mut app = app();
        handle_event(key(KeyCode::Char('f')), &mut app);
        assert_eq!(app.modal, Modal::Brands { cursor: 0 });
        for _ in 0..4 {
            handle_event(key(KeyCode::Down), &mut app);
        }
        assert_eq!(app.modal, Modal::Brands { cursor: 4 });
        handle_event(key(KeyCode::Enter), &mut app);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.filter.brand_filter, "suv");
        assert_eq!(app.page_view().total, 2);

        // Esc leaves the filter alone
        handle_event(key(KeyCode::Char('f')), &mut app);
        assert_eq!(app.modal, Modal::Brands { cursor: 4 });
        handle_event(key(KeyCode::Up), &mut app);
        assert!(!handle_event(key(KeyCode::Esc), &mut app));
        assert_eq!(app.filter.brand_filter, "suv");
    }

    #[test]
    /// What: The showcase reaches the coming-soon overlay for a brand without stock
    ///
    /// - Input: `o`, Down three times to Ferrari, Enter
    /// - Output: Coming-soon overlay for Ferrari; filter untouched
    fn showcase_opens_coming_soon() {
        let mut app = app();
        handle_event(key(KeyCode::Char('o')), &mut app);
        assert_eq!(app.modal, Modal::Showcase { cursor: 0 });
        for _ in 0..3 {
            handle_event(key(KeyCode::Char('j')), &mut app);
        }
        handle_event(key(KeyCode::Enter), &mut app);
        assert_eq!(
            app.modal,
            Modal::ComingSoon {
                brand: "Ferrari".into()
            }
        );
        assert_eq!(app.filter.brand_filter, ALL_BRANDS);
        handle_event(key(KeyCode::Enter), &mut app);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Picking an in-stock showcase brand filters the grid
    ///
    /// - Input: `o`, Down nine times (clamped on BMW, the last entry), Enter
    /// - Output: No overlay; filter is BMW
    fn showcase_filters_in_stock_brand() {
        let mut app = app();
        handle_event(key(KeyCode::Char('o')), &mut app);
        for _ in 0..9 {
            handle_event(key(KeyCode::Down), &mut app);
        }
        assert_eq!(app.modal, Modal::Showcase { cursor: 6 });
        handle_event(key(KeyCode::Enter), &mut app);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.filter.brand_filter, "BMW");
    }
}
