//! UI Model
//!
//! Preferences and transient input state: search editing, suggestions, quit.

use crate::logic::search::DEFAULT_SUGGESTION_LIMIT;

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Whether the search box is receiving keystrokes
    pub search_mode: bool,

    /// Autocomplete suggestions for the search box
    pub suggestions: Vec<String>,

    /// Highlighted suggestion
    pub suggestion_index: Option<usize>,

    /// Maximum number of suggestions
    pub suggestion_limit: usize,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            search_mode: false,
            suggestions: Vec::new(),
            suggestion_index: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            should_quit: false,
        }
    }

    /// Hide the suggestion list
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestion_index = None;
    }

    /// Highlighted suggestion, or the first one when nothing is highlighted
    pub fn chosen_suggestion(&self) -> Option<&str> {
        self.suggestion_index
            .or(Some(0))
            .and_then(|idx| self.suggestions.get(idx))
            .map(String::as_str)
    }

    /// Leave search editing
    pub fn exit_search(&mut self) {
        self.search_mode = false;
        self.clear_suggestions();
    }
}
