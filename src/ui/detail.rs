//! Doctor detail page
//!
//! Header with badges, then About, Languages and Consultation Options.
//! Error states show their message with a hint back to the listing.

use docfinder::api::Doctor;
use docfinder::model::{DetailModel, DetailState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BACK_HINT: &str = "← Back to doctor listings (Esc)";

fn badge(text: &str, color: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!(" {} ", text), Style::default().fg(Color::Black).bg(color)),
        Span::raw(" "),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Page body for a loaded doctor
fn build_detail_lines(doctor: &Doctor) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            doctor.name.clone(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            doctor.specialties.join(", "),
            Style::default().fg(Color::Gray),
        )),
    ];

    let clinic = doctor.clinic.as_ref();
    let video_consult = clinic.is_some_and(|c| c.video_consult);
    let in_clinic = clinic.is_some_and(|c| c.in_clinic);

    let mut badges = Vec::new();
    if !doctor.experience.is_empty() {
        badges.extend(badge(&doctor.experience, Color::LightBlue));
    }
    if !doctor.fees.is_empty() {
        badges.extend(badge(&doctor.fees, Color::LightGreen));
    }
    if video_consult {
        badges.extend(badge("Video Consult", Color::LightMagenta));
    }
    if in_clinic {
        badges.extend(badge("In Clinic", Color::Indexed(111)));
    }
    lines.push(Line::from(badges));
    lines.push(Line::from(""));

    lines.push(heading("About"));
    lines.push(Line::from(doctor.introduction.clone()));
    lines.push(Line::from(""));

    if !doctor.languages.is_empty() {
        lines.push(heading("Languages"));
        let mut spans = Vec::new();
        for language in &doctor.languages {
            spans.extend(badge(language, Color::Gray));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(heading("Consultation Options"));
    if video_consult {
        lines.push(Line::from(Span::styled(
            "Video Consultation",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  Fee: {}", doctor.fees)));
    }
    if in_clinic {
        lines.push(Line::from(Span::styled(
            "In-Clinic Visit",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  Fee: {}", doctor.fees)));

        let place = clinic.and_then(|c| {
            let address = c.address.as_ref().and_then(|a| a.one_line());
            match (c.name.as_deref(), address) {
                (Some(name), Some(address)) => Some(format!("{}, {}", name, address)),
                (Some(name), None) => Some(name.to_string()),
                (None, address) => address,
            }
        });
        if let Some(place) = place {
            lines.push(Line::from(Span::styled(
                format!("  {}", place),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    if !video_consult && !in_clinic {
        lines.push(Line::from(Span::styled(
            "Not specified",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

/// Render the detail page
pub fn render_detail(f: &mut Frame, area: Rect, detail: &DetailModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Doctor {} ", detail.doctor_id))
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = match &detail.state {
        DetailState::Ready(doctor) => Paragraph::new(build_detail_lines(doctor))
            .block(block)
            .wrap(Wrap { trim: false }),
        DetailState::Loading => Paragraph::new("Loading doctor...")
            .block(block)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        DetailState::NotFound | DetailState::NetworkError { .. } => {
            let message = detail.message().unwrap_or_default();
            Paragraph::new(vec![
                Line::from(Span::styled(message, Style::default().fg(Color::Red))),
                Line::from(""),
                Line::from(Span::styled(BACK_HINT, Style::default().fg(Color::Gray))),
            ])
            .block(block)
            .alignment(Alignment::Center)
        }
    };

    f.render_widget(paragraph, area);
}
