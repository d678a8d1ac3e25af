use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top location bar area
    pub address_area: Rect,
    /// Filter panel area (listing only)
    pub filter_area: Option<Rect>,
    /// Doctor list or detail page area
    pub content_area: Rect,
    /// Search input area (listing only)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Width of the filter panel for a terminal width
fn filter_panel_width(total_width: u16) -> u16 {
    (total_width / 3).clamp(24, 36).min(total_width / 2)
}

/// Calculate the screen layout for all UI components
///
/// `suggestion_count` adds rows under the search input while suggestions
/// are shown.
pub fn calculate_layout(
    terminal_size: Rect,
    is_listing: bool,
    suggestion_count: usize,
    legend_height: u16,
) -> LayoutInfo {
    let search_height = if is_listing {
        let rows = u16::try_from(suggestion_count).unwrap_or(u16::MAX);
        rows.saturating_add(3).min(terminal_size.height)
    } else {
        0
    };

    // Location bar (top) + search + content + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Location bar (top border, text, bottom border)
            Constraint::Length(search_height), // Search input plus suggestion rows
            Constraint::Min(5),                // Content area
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(1),             // Status bar
        ])
        .split(terminal_size);

    let address_area = main_chunks[0];
    let search_area = if is_listing { Some(main_chunks[1]) } else { None };
    let body_area = main_chunks[2];
    let legend_area = main_chunks[3];
    let status_area = main_chunks[4];

    let (filter_area, content_area) = if is_listing {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(filter_panel_width(body_area.width)),
                Constraint::Min(10),
            ])
            .split(body_area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, body_area)
    };

    LayoutInfo {
        address_area,
        filter_area,
        content_area,
        search_area,
        legend_area,
        status_area,
    }
}
