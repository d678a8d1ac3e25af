//! Keyboard Input Handler
//!
//! Handles all keyboard input. Search editing captures keys first; otherwise
//! keys are dispatched per view (listing or detail).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use docfinder::model::ListingFocus;
use docfinder::{ConsultMode, SortKey};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return Ok(());
    }

    // Keys shared by every view
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return Ok(());
        }
        KeyCode::Char('r') => {
            app.reload();
            return Ok(());
        }
        KeyCode::Char('H') => {
            app.go_home();
            return Ok(());
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
            app.go_back();
            return Ok(());
        }
        KeyCode::Char('h') if app.model.ui.vim_mode => {
            app.go_back();
            return Ok(());
        }
        _ => {}
    }

    if app.model.listing().is_some() {
        handle_listing_key(app, key);
    }

    Ok(())
}

/// Keys while the search box is being edited
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.accept_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Down => app.next_suggestion(),
        KeyCode::Up => app.previous_suggestion(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c);
        }
        _ => {}
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let focus = app
        .model
        .listing()
        .map(|listing| listing.focus)
        .unwrap_or(ListingFocus::Doctors);

    match key.code {
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.enter_search_mode();
        }
        KeyCode::Char('v') => app.toggle_consult_mode(ConsultMode::VideoConsult),
        KeyCode::Char('i') => app.toggle_consult_mode(ConsultMode::InClinic),
        KeyCode::Char('f') => app.toggle_sort(SortKey::FeesAscending),
        KeyCode::Char('e') => app.toggle_sort(SortKey::ExperienceDescending),
        KeyCode::Char('x') => app.reset_filters(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char(' ') if focus == ListingFocus::Specialties => {
            app.toggle_specialty_under_cursor();
        }
        KeyCode::Enter | KeyCode::Right => match focus {
            ListingFocus::Specialties => app.toggle_specialty_under_cursor(),
            ListingFocus::Doctors => app.open_selected_doctor(),
        },
        KeyCode::Char('l') if vim_mode && focus == ListingFocus::Doctors => {
            app.open_selected_doctor();
        }
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::Char('g') if vim_mode => app.jump_to_first(),
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),
        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        _ => {}
    }
}
