use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::FilterSetting;
use crate::tui::app::App;
use crate::tui::command_actions::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Chords are not bound in navigation
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => move_selection(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_selection(app, -1),
        KeyCode::Char('a') => begin_add(app),
        KeyCode::Char('e') => begin_edit_title(app),
        KeyCode::Char('p') => begin_edit_priority(app),
        KeyCode::Char(' ') => toggle_selected(app),
        KeyCode::Char('d') => delete_selected(app),
        KeyCode::Char('t') => toggle_filter(app, FilterSetting::Todo),
        KeyCode::Char('f') => toggle_filter(app, FilterSetting::Done),
        KeyCode::Char('s') => cycle_priority_sort(app),
        KeyCode::Char('c') => cycle_date_sort(app),
        _ => {}
    }
}
