mod navigate;
mod prompt;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Mode, list_height};

use navigate::handle_navigate;
use prompt::{handle_choice_prompt, handle_text_prompt};

/// Handle one terminal event. Resizes are accepted in every mode: they only
/// update the page size (pulling the cursor back on screen) and never touch
/// the mode or a prompt's buffer.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "resize");
            app.set_page_size(list_height(height));
        }
        _ => {}
    }
}

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    match &app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::PromptText { .. } => handle_text_prompt(app, key),
        Mode::PromptChoice { .. } => handle_choice_prompt(app, key),
    }
}

/// A character that should be inserted into a text buffer, if any.
/// Control and Alt chords are not text.
fn typed_char(key: &KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if !c.is_control() => Some(c),
        _ => None,
    }
}
