// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (bars, filter panel, content)
// - render: Main orchestration function that coordinates all rendering
// - address_bar: Top bar with load state and current location
// - search: Search input with autocomplete suggestions
// - filter_panel: Consultation mode, sort and specialty checklist
// - doctor_list: Doctor cards of the listing
// - detail: Doctor detail page
// - legend: Hotkey legend
// - status_bar: Bottom status line and footer

pub mod address_bar;
pub mod detail;
pub mod doctor_list;
pub mod filter_panel;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;

// Re-export main render function for convenience
pub use render::render;
