use chrono::Datelike;
use docfinder::logic::errors::ErrorType;
use docfinder::model::{DetailState, LoadStatus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn error_label(error_type: &ErrorType) -> &'static str {
    match error_type {
        ErrorType::ConnectionRefused => "Connection refused",
        ErrorType::Timeout => "Timed out",
        ErrorType::NotFound => "HTTP 404",
        ErrorType::ServerError => "Server error",
        ErrorType::HttpStatus => "HTTP error",
        ErrorType::NetworkError => "Network error",
        ErrorType::InvalidData => "Invalid data",
        ErrorType::Other => "Error",
    }
}

/// Status text and color for the active view
///
/// Failures show their classification and raw cause.
fn build_status_text(view: &View) -> (String, Color) {
    match view {
        View::Listing(listing) => match &listing.status {
            LoadStatus::Loading => ("Fetching doctor directory...".to_string(), Color::Yellow),
            LoadStatus::Failed { error_type, message } => {
                (format!("{}: {}", error_label(error_type), message), Color::Red)
            }
            LoadStatus::Loaded => {
                let filters = &listing.filters;
                let mut parts = vec![format!(
                    "Doctors: {}/{}",
                    listing.visible.len(),
                    listing.doctors.len()
                )];
                if let Some(mode) = &filters.consult {
                    parts.push(format!("Mode: {}", mode.as_str()));
                }
                if !filters.specialties.is_empty() {
                    parts.push(format!("Specialties: {}", filters.specialties.len()));
                }
                if let Some(sort) = filters.sort {
                    parts.push(format!("Sort: {}", sort.as_str()));
                }
                (parts.join(" │ "), Color::Gray)
            }
        },
        View::Detail(detail) => match &detail.state {
            DetailState::Loading => (format!("Fetching doctor {}...", detail.doctor_id), Color::Yellow),
            DetailState::Ready(doctor) => (format!("Doctor {}: {}", doctor.id, doctor.name), Color::Gray),
            DetailState::NotFound => (
                format!("No doctor with id {} in the directory", detail.doctor_id),
                Color::LightRed,
            ),
            DetailState::NetworkError { error_type, message } => {
                (format!("{}: {}", error_label(error_type), message), Color::Red)
            }
        },
    }
}

/// Render the bottom status bar with the footer on the right
pub fn render_status_bar(f: &mut Frame, area: Rect, view: &View, endpoint_url: &str) {
    let footer = format!(
        "© {} docfinder │ {} ",
        chrono::Local::now().year(),
        endpoint_url
    );
    let footer_width = (footer.chars().count() as u16).min(area.width / 2);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(footer_width)])
        .split(area);

    let (text, color) = build_status_text(view);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {}", text), Style::default().fg(color)))),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray)))),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use docfinder::api::Doctor;
    use docfinder::error::FetchError;
    use docfinder::model::{FilterState, ListingModel};
    use docfinder::SortKey;

    #[test]
    fn test_loaded_listing_status() {
        let mut listing = ListingModel::new(FilterState {
            sort: Some(SortKey::FeesAscending),
            ..Default::default()
        });
        listing.load(vec![Doctor::default(), Doctor::default()]);

        let (text, _) = build_status_text(&View::Listing(listing));
        assert_eq!(text, "Doctors: 2/2 │ Sort: Fees (Low to High)");
    }

    #[test]
    fn test_failed_listing_status_shows_cause() {
        let mut listing = ListingModel::new(FilterState::default());
        listing.fail(&FetchError::Status {
            url: "http://localhost/doctors.json".to_string(),
            status: 503,
        });

        let (text, color) = build_status_text(&View::Listing(listing));
        assert!(text.starts_with("Server error: "), "got: {}", text);
        assert!(text.contains("503"), "got: {}", text);
        assert_eq!(color, Color::Red);
    }
}
