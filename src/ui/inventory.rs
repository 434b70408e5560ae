use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::logic::{StockLevel, stock_level};
use crate::state::{AppState, VehicleRecord};
use crate::theme::{Theme, theme};
use crate::util::truncate_to_width;

/// What: Render the current inventory page and the pagination row.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Session state; `list_state` drives the highlight
/// - `area`: Grid rectangle
///
/// Details:
/// - Cards are built from `AppState::page_view` only; stock badges use the full-catalog
///   counts so a deduplicated card still reports every unit.
/// - The pagination row is hidden when everything fits on one page.
pub fn render_inventory(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let width = usize::from(rows[0].width.saturating_sub(4));
    let (items, title, pagination) = {
        let state: &AppState = app;
        let page = state.page_view();
        let items: Vec<ListItem> = page
            .items
            .iter()
            .map(|r| card(r, state, &th, width))
            .collect();
        let title = format!(
            " Inventory ({}) · page {}/{} ",
            page.total,
            page.effective_page,
            page.page_count.max(1)
        );
        let pagination = pagination_line(
            page.effective_page,
            page.page_count,
            (page.has_previous(), page.has_next()),
            &th,
        );
        (items, title, pagination)
    };

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No cars found matching your criteria.",
            Style::default().fg(th.subtext0),
        )))
        .block(grid_block(title, &th));
        f.render_widget(empty, rows[0]);
    } else {
        let list = List::new(items)
            .style(Style::default().fg(th.text).bg(th.base))
            .block(grid_block(title, &th))
            .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, rows[0], &mut app.list_state);
    }
    f.render_widget(Paragraph::new(pagination), rows[1]);
}

/// Bordered container for the grid.
fn grid_block(title: String, th: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
}

/// Two-line card: headline with badge and price, then specs and availability.
fn card(r: &VehicleRecord, app: &AppState, th: &Theme, width: usize) -> ListItem<'static> {
    let level = stock_level(app.stock_for(&r.name));
    let stock_color = match level {
        StockLevel::LastUnit => th.yellow,
        StockLevel::Available(_) => th.green,
    };
    let mut head = Vec::new();
    if !r.badge.is_empty() {
        head.push(Span::styled(
            format!("[{}] ", r.badge),
            Style::default().fg(th.yellow),
        ));
    }
    head.push(Span::styled(
        r.name.clone(),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    ));
    if !r.price.is_empty() {
        head.push(Span::styled(format!("  {}", r.price), Style::default().fg(th.mauve)));
    }
    if app.selection.contains(r.id) {
        head.push(Span::styled(
            "  [✓ compare]",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ));
    }

    let specs: Vec<&str> = [r.subtitle.as_str(), r.power.as_str(), r.acceleration.as_str(), r.year.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    let detail = Line::from(vec![
        Span::styled(
            truncate_to_width(&format!("    {}", specs.join(" · ")), width.saturating_sub(22)),
            Style::default().fg(th.overlay2),
        ),
        Span::styled(format!("  {}", level.label()), Style::default().fg(stock_color)),
    ]);
    ListItem::new(vec![Line::from(head), detail])
}

/// `« 1 [2] 3 »` with disabled arrows at the ends; empty for a single page.
fn pagination_line(
    current: usize,
    count: usize,
    (has_previous, has_next): (bool, bool),
    th: &Theme,
) -> Line<'static> {
    if count <= 1 {
        return Line::from("");
    }
    let enabled = Style::default().fg(th.text);
    let disabled = Style::default().fg(th.surface2);
    let mut spans = vec![Span::styled(
        "« ",
        if has_previous { enabled } else { disabled },
    )];
    for i in 1..=count {
        if i == current {
            spans.push(Span::styled(
                format!("[{i}] "),
                Style::default().fg(th.crust).bg(th.lavender),
            ));
        } else {
            spans.push(Span::styled(format!("{i} "), enabled));
        }
    }
    spans.push(Span::styled(
        "»",
        if has_next { enabled } else { disabled },
    ));
    Line::from(spans)
}
