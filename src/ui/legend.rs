use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which page the legend describes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendContext {
    Listing,
    Detail,
}

fn hotkey(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    context: LegendContext,
    search_mode: bool,
    can_go_back: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Search editing captures the keyboard
    if search_mode {
        hotkey_spans.extend(hotkey("type", ":Search  "));
        hotkey_spans.extend(hotkey("↑/↓", ":Suggestion  "));
        hotkey_spans.extend(hotkey("Enter", ":Accept  "));
        hotkey_spans.extend(hotkey("Esc", ":Close"));
        return hotkey_spans;
    }

    if context == LegendContext::Listing {
        if vim_mode {
            hotkey_spans.extend(hotkey("jk", ":Nav  "));
            hotkey_spans.extend(hotkey("l", ":Open  "));
            hotkey_spans.extend(hotkey("g/G", ":First/Last  "));
        } else {
            hotkey_spans.extend(hotkey("↑/↓", ":Nav  "));
            hotkey_spans.extend(hotkey("Enter", ":Open  "));
        }

        hotkey_spans.extend(hotkey("/", ":Search  "));
        hotkey_spans.extend(hotkey("v", ":Video  "));
        hotkey_spans.extend(hotkey("i", ":In Clinic  "));
        hotkey_spans.extend(hotkey("f", ":Sort Fees  "));
        hotkey_spans.extend(hotkey("e", ":Sort Exp  "));
        hotkey_spans.extend(hotkey("Tab", ":Specialties  "));
        hotkey_spans.extend(hotkey("x", ":Clear Filters  "));
    }

    if can_go_back || context == LegendContext::Detail {
        let back_key = if vim_mode { "h/Esc" } else { "Esc" };
        hotkey_spans.extend(hotkey(back_key, ":Back  "));
    }

    hotkey_spans.extend(hotkey("H", ":Home  "));
    hotkey_spans.extend(hotkey("r", ":Reload  "));

    // Quit - always available
    hotkey_spans.extend(hotkey("q", ":Quit"));

    hotkey_spans
}

fn build_legend_paragraph(
    vim_mode: bool,
    context: LegendContext,
    search_mode: bool,
    can_go_back: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, context, search_mode, can_go_back));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    context: LegendContext,
    search_mode: bool,
    can_go_back: bool,
) {
    let legend = build_legend_paragraph(vim_mode, context, search_mode, can_go_back);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    context: LegendContext,
    search_mode: bool,
    can_go_back: bool,
) -> u16 {
    // Count lines without the block; line_count() does not account for borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, context, search_mode, can_go_back));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
