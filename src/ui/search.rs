//! Search Input UI
//!
//! Renders the search input box with match count, cursor, and the
//! autocomplete suggestions underneath.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render search input box
///
/// # Arguments
/// - `query`: Current search text
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Number of visible doctors (None while loading)
/// - `suggestions`: Names offered for the current text
/// - `highlighted`: Index of the highlighted suggestion
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: Option<usize>,
    suggestions: &[String],
    highlighted: Option<usize>,
) {
    let title = if active {
        match match_count {
            Some(count) => format!(" Search ({} matches) - Enter to accept, Esc to close ", count),
            None => " Search - Esc to close ".to_string(),
        }
    } else if !query.is_empty() {
        match match_count {
            Some(count) => format!(" Search ({} matches) ", count),
            None => " Search ".to_string(),
        }
    } else {
        " Search (/ or Ctrl-F) ".to_string()
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut lines = Vec::with_capacity(1 + suggestions.len());
    if active {
        lines.push(Line::from(vec![
            Span::raw("Name: "),
            Span::raw(query.to_string()),
            Span::styled("█", cursor_style),
        ]));
    } else if query.is_empty() {
        lines.push(Line::from(Span::styled(
            "Search doctors by name",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Name: {}", query),
            Style::default().fg(Color::Gray),
        )));
    }

    for (idx, name) in suggestions.iter().enumerate() {
        let style = if highlighted == Some(idx) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled("  ↳ ", Style::default().fg(Color::DarkGray)),
            Span::styled(name.clone(), style),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
