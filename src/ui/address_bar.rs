use docfinder::model::{DetailState, LoadStatus, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Load indicator span for the active view
fn render_view_status(view: &View) -> Vec<Span<'static>> {
    let (text, color) = match view {
        View::Listing(listing) => match listing.status {
            LoadStatus::Loading => ("🟡 Loading", Color::Yellow),
            LoadStatus::Loaded => ("🟢 Loaded", Color::Green),
            LoadStatus::Failed { .. } => ("🔴 Failed", Color::Red),
        },
        View::Detail(detail) => match detail.state {
            DetailState::Loading => ("🟡 Loading", Color::Yellow),
            DetailState::Ready(_) => ("🟢 Loaded", Color::Green),
            DetailState::NotFound => ("🟠 Not found", Color::LightRed),
            DetailState::NetworkError { .. } => ("🔴 Failed", Color::Red),
        },
    };

    vec![
        Span::styled(text, Style::default().fg(color)),
        Span::raw(" | "),
    ]
}

/// Render the location bar at the top of the screen
pub fn render_address_bar(
    f: &mut Frame,
    area: Rect,
    view: &View,
    location: &str,
    history_depth: usize,
) {
    let mut spans = render_view_status(view);
    spans.push(Span::styled(
        location.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    if history_depth > 0 {
        spans.push(Span::styled(
            format!("  (← {})", history_depth),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" docfinder ")
        .style(Style::default().fg(Color::Gray));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(paragraph, area);
}
