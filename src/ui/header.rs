use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// What: Render the search field, active brand filter and featured strip.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Session state (input text, focus, brand filter, featured records)
/// - `area`: Header rectangle
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let search_focused = matches!(app.focus, Focus::Search);
    let mut search_line = vec![
        Span::styled(
            "> ",
            Style::default().fg(if search_focused {
                th.sapphire
            } else {
                th.overlay1
            }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if search_focused { th.text } else { th.subtext0 }),
        ),
    ];
    if search_focused {
        search_line.push(Span::styled("▏", Style::default().fg(th.sapphire)));
    }
    let brand_line = Line::from(vec![
        Span::styled("Brand: ", Style::default().fg(th.overlay1)),
        Span::styled(
            app.brand_label(),
            Style::default()
                .fg(if app.filter.is_brand_filtered() {
                    th.mauve
                } else {
                    th.text
                })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   f pick · b/B cycle · a all", Style::default().fg(th.surface2)),
    ]);
    let search = Paragraph::new(vec![Line::from(search_line), Line::from(""), brand_line]).block(
        Block::default()
            .title(Span::styled(
                if search_focused { " Search (typing) " } else { " Search " },
                Style::default().fg(if search_focused {
                    th.mauve
                } else {
                    th.overlay1
                }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if search_focused {
                th.mauve
            } else {
                th.surface1
            })),
    );
    f.render_widget(search, cols[0]);

    let width = usize::from(cols[1].width.saturating_sub(4));
    let featured: Vec<Line> = app
        .featured()
        .into_iter()
        .take(3)
        .map(|r| {
            Line::from(vec![
                Span::styled("★ ", Style::default().fg(th.yellow)),
                Span::styled(
                    truncate_to_width(&format!("{}  {}", r.name, r.price), width),
                    Style::default().fg(th.text),
                ),
            ])
        })
        .collect();
    let strip = Paragraph::new(featured).block(
        Block::default()
            .title(Span::styled(" Featured ", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(strip, cols[1]);
}
