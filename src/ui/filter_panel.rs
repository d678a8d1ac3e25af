//! Filter panel
//!
//! Consultation mode and sort radios plus the specialty checklist.

use docfinder::model::{FilterState, ListingFocus, ListingModel};
use docfinder::{ConsultMode, SortKey};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Selected specialties missing from the catalog, compared the way the filter does
fn unlisted_selections(listing: &ListingModel) -> Vec<&str> {
    listing
        .filters
        .specialties
        .iter()
        .filter(|name| {
            let name = name.to_lowercase();
            !listing.specialties.iter().any(|s| s.to_lowercase() == name)
        })
        .map(String::as_str)
        .collect()
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•) "
    } else {
        "( ) "
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x] "
    } else {
        "[ ] "
    }
}

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(key, Style::default().fg(Color::Yellow))
}

/// Radio lines for consultation mode and sort
fn build_option_lines(filters: &FilterState) -> Vec<Line<'static>> {
    let header = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Consultation Mode", header))];

    for (key, mode) in [("v ", ConsultMode::VideoConsult), ("i ", ConsultMode::InClinic)] {
        lines.push(Line::from(vec![
            key_span(key),
            Span::raw(radio(filters.consult.as_ref() == Some(&mode))),
            Span::raw(mode.as_str().to_string()),
        ]));
    }
    if let Some(ConsultMode::Unrecognized(label)) = &filters.consult {
        lines.push(Line::from(Span::styled(
            format!("  (•) {} (unknown)", label),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Sort by", header)));
    for (key, sort) in [("f ", SortKey::FeesAscending), ("e ", SortKey::ExperienceDescending)] {
        lines.push(Line::from(vec![
            key_span(key),
            Span::raw(radio(filters.sort == Some(sort))),
            Span::raw(sort.as_str()),
        ]));
    }

    lines
}

/// Render the filter panel for a listing
pub fn render_filter_panel(f: &mut Frame, area: Rect, listing: &ListingModel) {
    let option_lines = build_option_lines(&listing.filters);
    let options_height = option_lines.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(options_height), Constraint::Min(3)])
        .split(area);

    let title = if listing.filters.is_default() {
        " Filters "
    } else {
        " Filters (x: clear) "
    };
    let options = Paragraph::new(option_lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(options, chunks[0]);

    render_specialty_checklist(f, chunks[1], listing);
}

fn render_specialty_checklist(f: &mut Frame, area: Rect, listing: &ListingModel) {
    let is_focused = listing.focus == ListingFocus::Specialties;

    let mut items: Vec<ListItem> = listing
        .specialties
        .iter()
        .map(|name| {
            let checked = listing.filters.has_specialty(name);
            let style = if checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(checkbox(checked), style),
                Span::styled(name.clone(), style),
            ]))
        })
        .collect();

    // Selected specialties nobody in the directory has still filter the list
    for name in unlisted_selections(listing) {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{}{} (none listed)", checkbox(true), name),
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let title = if is_focused {
        " Specialties (Space: toggle) "
    } else {
        " Specialties (Tab) "
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(if is_focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(listing.specialty_cursor);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_to_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_option_lines_mark_active_choices() {
        let filters = FilterState {
            consult: Some(ConsultMode::InClinic),
            sort: Some(SortKey::FeesAscending),
            ..Default::default()
        };
        let text = lines_to_text(&build_option_lines(&filters));
        assert!(text.contains("( ) Video Consult"), "got: {}", text);
        assert!(text.contains("(•) In Clinic"), "got: {}", text);
        assert!(text.contains("(•) Fees (Low to High)"), "got: {}", text);
        assert!(text.contains("( ) Experience (High to Low)"), "got: {}", text);
    }

    fn listing_with(catalog: &[&str], selected: &[&str]) -> ListingModel {
        let mut listing = ListingModel::new(FilterState {
            specialties: selected.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        });
        listing.specialties = catalog.iter().map(|s| s.to_string()).collect();
        listing
    }

    #[test]
    fn test_unlisted_selection_uses_unicode_case_folding() {
        let listing = listing_with(&["ént", "Dentist"], &["ÉNT", "DENTIST"]);
        assert!(unlisted_selections(&listing).is_empty());
    }

    #[test]
    fn test_unlisted_selection_reports_missing_names() {
        let listing = listing_with(&["Dentist"], &["Dentist", "Cardiologist"]);
        assert_eq!(unlisted_selections(&listing), vec!["Cardiologist"]);
    }

    #[test]
    fn test_option_lines_show_unknown_mode() {
        let filters = FilterState {
            consult: Some(ConsultMode::Unrecognized("Home Visit".to_string())),
            ..Default::default()
        };
        let text = lines_to_text(&build_option_lines(&filters));
        assert!(text.contains("Home Visit (unknown)"), "got: {}", text);
    }
}
