use crate::App;
use docfinder::model::{LoadStatus, View};
use ratatui::Frame;

use super::{
    address_bar, detail, doctor_list, filter_panel, layout,
    legend::{self, LegendContext},
    search, status_bar,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;

    let context = match model.view {
        View::Listing(_) => LegendContext::Listing,
        View::Detail(_) => LegendContext::Detail,
    };
    let can_go_back = !model.navigation.history.is_empty();

    let legend_height = legend::calculate_legend_height(
        size.width,
        model.ui.vim_mode,
        context,
        model.ui.search_mode,
        can_go_back,
    );
    let suggestion_count = if model.ui.search_mode {
        model.ui.suggestions.len()
    } else {
        0
    };
    let layout_info = layout::calculate_layout(
        size,
        context == LegendContext::Listing,
        suggestion_count,
        legend_height,
    );

    address_bar::render_address_bar(
        f,
        layout_info.address_area,
        &model.view,
        &model.navigation.location,
        model.navigation.history.len(),
    );

    match &model.view {
        View::Listing(listing) => {
            if let Some(search_area) = layout_info.search_area {
                let match_count = matches!(listing.status, LoadStatus::Loaded)
                    .then_some(listing.visible.len());
                search::render_search_input(
                    f,
                    search_area,
                    &listing.filters.search,
                    model.ui.search_mode,
                    match_count,
                    if model.ui.search_mode { &model.ui.suggestions[..] } else { &[] },
                    model.ui.suggestion_index,
                );
            }
            if let Some(filter_area) = layout_info.filter_area {
                filter_panel::render_filter_panel(f, filter_area, listing);
            }
            doctor_list::render_doctor_list(f, layout_info.content_area, listing);
        }
        View::Detail(page) => {
            detail::render_detail(f, layout_info.content_area, page);
        }
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        context,
        model.ui.search_mode,
        can_go_back,
    );

    status_bar::render_status_bar(f, layout_info.status_area, &model.view, &app.endpoint_url);
}
