//! TUI rendering for showroom.
//!
//! The renderer only reads plain data from [`AppState`] (the current page,
//! stock counts, selection, recent list) and never filters on its own.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::theme;

mod footer;
mod header;
mod inventory;
mod modals;

/// What: Render one full frame of the catalog browser.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Session state (list state is updated for the highlight)
///
/// Details:
/// - Layout top to bottom: search/brand header, inventory grid with pagination,
///   compare bar and recently viewed, status line; overlays on top.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let recent_h: u16 = if app.recent().is_empty() { 0 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(recent_h),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    inventory::render_inventory(f, app, chunks[1]);
    footer::render_compare_bar(f, app, chunks[2]);
    footer::render_recent(f, app, chunks[3]);
    footer::render_status(f, app, chunks[4]);

    modals::render_modal(f, app, area);
}

/// What: Render the blocking screen shown when the catalog could not be loaded.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `message`: Load error text
pub fn render_load_error(f: &mut Frame, message: &str) {
    let th = theme();
    let area = f.area();
    let lines = vec![
        Line::from(Span::styled(
            "Error loading inventory. Please try again later.",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.subtext0))),
        Line::from(""),
        Line::from(Span::styled("Press q to quit.", Style::default().fg(th.overlay1))),
    ];
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(" Inventory unavailable ", Style::default().fg(th.red)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.red)),
        );
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use crate::state::{AppState, VehicleRecord};
    use crate::store::{MemoryStore, RecordStore};
    use crate::theme::Settings;

    fn app() -> AppState {
        let records = vec![
            VehicleRecord {
                id: 1,
                name: "911 GT3".into(),
                brand: "Porsche".into(),
                price: "$225,000".into(),
                featured: true,
                ..Default::default()
            },
            VehicleRecord {
                id: 2,
                name: "911 GT3".into(),
                brand: "Porsche".into(),
                ..Default::default()
            },
            VehicleRecord {
                id: 3,
                name: "Cullinan".into(),
                brand: "Rolls-Royce".into(),
                ..Default::default()
            },
        ];
        let store = RecordStore::new(records).expect("unique ids");
        AppState::new(store, Settings::default(), Box::new(MemoryStore::new()))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: Full frame renders cards with stock badges and the brand label
    ///
    /// - Input: Catalog with two GT3 units and one Cullinan
    /// - Output: Buffer contains the deduplicated cards and unit wording
    fn renders_inventory_frame() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let mut app = app();
        terminal.draw(|f| super::ui(f, &mut app)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(text.contains("911 GT3"));
        assert!(text.contains("2 Units Available"));
        assert!(text.contains("1 unit Available"));
        assert!(text.contains("All Brands (3)"));
    }

    #[test]
    /// What: Detail and compare overlays render without panicking
    fn renders_overlays() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let mut app = app();
        app.view_detail(1);
        terminal.draw(|f| super::ui(f, &mut app)).expect("draw detail");
        assert!(buffer_text(&terminal).contains("$225,000"));

        app.modal = crate::state::Modal::None;
        app.toggle_compare_selection(1);
        app.toggle_compare_selection(3);
        app.build_comparison().expect("two selected");
        terminal.draw(|f| super::ui(f, &mut app)).expect("draw compare");
        assert!(buffer_text(&terminal).contains("Engine"));
    }

    #[test]
    /// What: Brand dropdown and showcase list their entries
    ///
    /// - Input: Dropdown opened, then the showcase with the default line-up
    /// - Output: Dropdown shows "Rolls-Royce (1)"; showcase marks Ferrari as coming soon
    fn renders_pick_lists() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let mut app = app();
        app.open_brand_dropdown();
        terminal.draw(|f| super::ui(f, &mut app)).expect("draw dropdown");
        let text = buffer_text(&terminal);
        assert!(text.contains("Filter by brand"));
        assert!(text.contains("Rolls-Royce (1)"));

        app.modal = crate::state::Modal::None;
        app.open_showcase();
        terminal.draw(|f| super::ui(f, &mut app)).expect("draw showcase");
        let text = buffer_text(&terminal);
        assert!(text.contains("Mercedes-Benz"));
        assert!(text.contains("Coming soon"));
    }

    #[test]
    /// What: Help overlay states which pages the digit keys reach
    fn renders_help_page_range() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let mut app = app();
        app.modal = crate::state::Modal::Help;
        terminal.draw(|f| super::ui(f, &mut app)).expect("draw help");
        let text = buffer_text(&terminal);
        assert!(text.contains("Jump to page 1-9"));
        assert!(text.contains("Brand showcase"));
    }

    #[test]
    /// What: Load error screen shows the message
    fn renders_load_error() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| super::render_load_error(f, "catalog request failed"))
            .expect("draw");
        assert!(buffer_text(&terminal).contains("catalog request failed"));
    }
}
