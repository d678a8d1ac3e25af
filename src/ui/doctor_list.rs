use docfinder::api::Doctor;
use docfinder::logic::formatting::{availability_label, specialties_line, truncate_to_width};
use docfinder::model::{ListingFocus, ListingModel, LoadStatus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Lines of one doctor card, each cut to `width` columns
fn build_card_lines(doctor: &Doctor, width: usize) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&doctor.name, width),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];

    let specialties = specialties_line(doctor);
    if !specialties.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&specialties, width),
            Style::default().fg(Color::Cyan),
        )));
    }

    if !doctor.introduction.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&doctor.introduction, width),
            Style::default().fg(Color::Gray),
        )));
    }

    let facts = format!(
        "Experience: {}  │  Fee: {}",
        doctor.experience, doctor.fees
    );
    lines.push(Line::from(truncate_to_width(&facts, width)));

    lines.push(Line::from(vec![
        Span::styled("Available For: ", label),
        Span::raw(truncate_to_width(
            &availability_label(doctor),
            width.saturating_sub("Available For: ".len()),
        )),
    ]));

    lines.push(Line::from(""));
    lines
}

/// Message shown in place of the list, if any
fn placeholder(listing: &ListingModel) -> Option<(&'static str, Color)> {
    match listing.status {
        LoadStatus::Loading => Some(("Loading doctors...", Color::Yellow)),
        LoadStatus::Failed { .. } => listing.message().map(|m| (m, Color::Red)),
        LoadStatus::Loaded => listing.message().map(|m| (m, Color::Gray)),
    }
}

/// Render the doctor cards of a listing
pub fn render_doctor_list(f: &mut Frame, area: Rect, listing: &ListingModel) {
    let is_focused = listing.focus == ListingFocus::Doctors;
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let title = match listing.status {
        LoadStatus::Loaded => format!(
            " Doctors ({} of {}) ",
            listing.visible.len(),
            listing.doctors.len()
        ),
        _ => " Doctors ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    if let Some((message, color)) = placeholder(listing) {
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    // Borders plus the highlight symbol
    let card_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = listing
        .visible
        .iter()
        .map(|doctor| ListItem::new(build_card_lines(doctor, card_width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        })
        .highlight_symbol("▌ ");

    let mut state = ListState::default();
    state.select(listing.selected_index);
    f.render_stateful_widget(list, area, &mut state);
}
