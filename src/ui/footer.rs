use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::logic::COMPARE_CAPACITY;
use crate::state::AppState;
use crate::theme::theme;
use crate::util::truncate_to_width;

/// What: Render the compare bar listing the selected vehicles.
///
/// Details:
/// - Shows `Compare (n/3)` and the selected names in selection order; ids that
///   no longer resolve are skipped.
pub fn render_compare_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let n = app.selection.len();
    let width = usize::from(area.width.saturating_sub(4));
    let line = if n == 0 {
        Line::from(Span::styled(
            "Press c on a card to add it to the comparison.",
            Style::default().fg(th.overlay1),
        ))
    } else {
        let names: Vec<&str> = app
            .selection
            .ids()
            .iter()
            .filter_map(|&id| app.store.get(id))
            .map(|r| r.name.as_str())
            .collect();
        let ready = app.selection.compare_eligible();
        Line::from(vec![
            Span::styled(
                truncate_to_width(&names.join("  ·  "), width.saturating_sub(24)),
                Style::default().fg(th.text),
            ),
            Span::styled(
                if ready { "   v: compare now" } else { "   select one more" },
                Style::default().fg(if ready { th.green } else { th.overlay1 }),
            ),
        ])
    };
    let title_style = if n > 0 {
        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.overlay1)
    };
    let bar = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(
                format!(" Compare ({n}/{COMPARE_CAPACITY}) "),
                title_style,
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(bar, area);
}

/// What: Render the "Previously Viewed" strip, newest first.
///
/// Details:
/// - Nothing is drawn when the area is collapsed (empty recency queue).
pub fn render_recent(f: &mut Frame, app: &AppState, area: Rect) {
    if area.height == 0 {
        return;
    }
    let th = theme();
    let mut spans = Vec::new();
    for (i, name) in app.recent().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(th.surface2)));
        }
        spans.push(Span::styled(name.clone(), Style::default().fg(th.text)));
    }
    let strip = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(
                " Previously Viewed ",
                Style::default().fg(th.overlay1),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(strip, area);
}

/// One-line status: the pending notice if any, otherwise key hints.
pub fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = app.notice.as_ref().map_or_else(
        || {
            Line::from(Span::styled(
                " / search  ←→ page  ↑↓ move  Enter details  c compare  v view  f brands  o showcase  ? help  q quit",
                Style::default().fg(th.overlay1),
            ))
        },
        |msg| {
            Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
            ))
        },
    );
    f.render_widget(Paragraph::new(line), area);
}
