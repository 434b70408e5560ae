use ratatui::{
    Frame,
    layout::Constraint,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use crate::logic::{BrandAvailability, Comparison, stock_level};
use crate::state::{AppState, Modal, VehicleRecord};
use crate::theme::{Theme, theme};

/// What: Draw the active overlay, if any.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Session state holding the modal
/// - `area`: Full screen area used to center the overlay
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Detail { id } => {
            if let Some(rec) = app.store.get(*id) {
                let lines = detail_lines(rec, app);
                render_box(f, area, &rec.name, lines, (90, 24));
            }
        }
        Modal::Compare { comparison } => render_compare(f, area, comparison),
        Modal::Brands { cursor } => {
            let th = theme();
            let entries: Vec<(String, Span<'static>)> = app
                .brand_options()
                .into_iter()
                .map(|o| {
                    let units = Span::styled(
                        stock_level(o.count).label(),
                        Style::default().fg(th.green),
                    );
                    (o.label, units)
                })
                .collect();
            let height = u16::try_from(entries.len()).unwrap_or(u16::MAX).saturating_add(4);
            render_box(f, area, "Filter by brand", picker_lines(entries, *cursor), (56, height));
        }
        Modal::Showcase { cursor } => {
            let th = theme();
            let entries: Vec<(String, Span<'static>)> = app
                .showcase()
                .into_iter()
                .map(|(brand, availability)| {
                    let status = match availability {
                        BrandAvailability::InStock(n) => {
                            Span::styled(stock_level(n).label(), Style::default().fg(th.green))
                        }
                        BrandAvailability::ComingSoon => {
                            Span::styled("Coming soon", Style::default().fg(th.yellow))
                        }
                    };
                    (brand.to_string(), status)
                })
                .collect();
            let height = u16::try_from(entries.len()).unwrap_or(u16::MAX).saturating_add(4);
            render_box(f, area, "Our Brands", picker_lines(entries, *cursor), (56, height));
        }
        Modal::ComingSoon { brand } => {
            let th = theme();
            let lines = vec![
                Line::from(Span::styled(
                    "Stock Currently Unavailable",
                    Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("We are currently sourcing new {brand} models. Check back soon."),
                    Style::default().fg(th.subtext0),
                )),
            ];
            render_box(f, area, brand, lines, (60, 8));
        }
        Modal::Help => render_box(f, area, "Keys", help_lines(), (64, 22)),
    }
}

/// Centered rectangle of at most `max_w` x `max_h`, kept two cells inside `area`.
fn centered(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(4).min(max_w);
    let h = area.height.saturating_sub(4).min(max_h);
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// Double-bordered frame shared by every overlay, with `title` in the top border.
fn modal_block(title: &str, th: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle))
}

/// What: Clear a centered rectangle and draw `lines` inside a titled overlay frame.
///
/// Inputs:
/// - `max`: Upper bound on (width, height); the box shrinks with small terminals
fn render_box(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, max: (u16, u16)) {
    let th = theme();
    let rect = centered(area, max.0, max.1);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(modal_block(title, &th));
    f.render_widget(p, rect);
}

/// Detail card body: price and stock, spec rows, colors, description and the compare hint.
fn detail_lines(rec: &VehicleRecord, app: &AppState) -> Vec<Line<'static>> {
    let th = theme();
    let label = |k: &str, v: &str| {
        Line::from(vec![
            Span::styled(format!("{k:<10}"), Style::default().fg(th.overlay1)),
            Span::styled(
                if v.is_empty() { "-".to_string() } else { v.to_string() },
                Style::default().fg(th.text),
            ),
        ])
    };
    let mut lines = Vec::new();
    if !rec.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            rec.subtitle.clone(),
            Style::default().fg(th.subtext0),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled(
            rec.price.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", stock_level(app.stock_for(&rec.name)).label()),
            Style::default().fg(th.green),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(label("Brand", &rec.brand));
    lines.push(label("Engine", &rec.engine));
    lines.push(label("Power", &rec.power));
    lines.push(label("0-100", &rec.acceleration));
    lines.push(label("Year", &rec.year));
    if let Some(img) = rec.display_image().filter(|s| !s.is_empty()) {
        lines.push(label("Image", img));
    }
    if !rec.colors.is_empty() {
        let names: Vec<&str> = rec.colors.iter().map(|c| c.name.as_str()).collect();
        lines.push(label("Colors", &names.join(", ")));
    }
    if !rec.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            rec.description.clone(),
            Style::default().fg(th.subtext0),
        )));
    }
    lines.push(Line::from(""));
    let hint = if app.selection.contains(rec.id) {
        "c: remove from compare   Esc: close"
    } else {
        "c: add to compare   Esc: close"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(th.overlay1))));
    lines
}

/// Table with one column per compared vehicle, in selection order.
fn render_compare(f: &mut Frame, area: Rect, comparison: &Comparison) {
    let th = theme();
    let rect = centered(area, 110, 14);
    f.render_widget(Clear, rect);

    let mut header = vec![Cell::from("")];
    header.extend(comparison.records.iter().map(|r| {
        Cell::from(Span::styled(
            r.name.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
    }));
    let rows: Vec<Row> = comparison
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![Cell::from(Span::styled(
                row.label,
                Style::default().fg(th.overlay1),
            ))];
            cells.extend(row.cells.iter().map(|c| Cell::from(c.clone())));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(8)];
    widths.extend(comparison.records.iter().map(|_| Constraint::Fill(1)));
    let table = Table::new(rows, widths)
        .header(Row::new(header).bottom_margin(1))
        .style(Style::default().fg(th.text).bg(th.mantle))
        .column_spacing(2)
        .block(modal_block("Compare", &th));
    f.render_widget(table, rect);
}

/// Pick list rows: `(label, status)` per entry with the highlighted row marked, then a key hint.
fn picker_lines(entries: Vec<(String, Span<'static>)>, cursor: usize) -> Vec<Line<'static>> {
    let th = theme();
    let mut lines: Vec<Line<'static>> = entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, status))| {
            let (marker, style) = if i == cursor {
                ("▸ ", Style::default().fg(th.crust).bg(th.lavender))
            } else {
                ("· ", Style::default().fg(th.text))
            };
            Line::from(vec![
                Span::styled(format!("{marker}{label:<26}"), style),
                status,
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        "↑↓ move · Enter select · Esc close",
        Style::default().fg(th.overlay1),
    )));
    lines
}

/// Key reference rows, in the order the grid handles them.
fn help_lines() -> Vec<Line<'static>> {
    let th = theme();
    [
        ("/", "Search by name"),
        ("Esc", "Leave search / close overlay"),
        ("↑ ↓ k j", "Move between cars"),
        ("← → h l", "Previous / next page"),
        ("1-9", "Jump to page 1-9 (→ for later pages)"),
        ("Enter", "View details"),
        ("c", "Add or remove from compare"),
        ("x", "Clear compare selection"),
        ("v", "Open comparison"),
        ("f", "Pick a brand or category"),
        ("o", "Brand showcase"),
        ("b B", "Next / previous brand or category"),
        ("a", "Show all brands"),
        ("?", "This help"),
        ("q", "Quit"),
    ]
    .into_iter()
    .map(|(k, v)| {
        Line::from(vec![
            Span::styled(format!("{k:<10}"), Style::default().fg(th.sapphire)),
            Span::styled(v, Style::default().fg(th.text)),
        ])
    })
    .collect()
}
