//! Keyboard input handling for the viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to a viewer action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char('o' | ' ') => app.toggle_overlap(),
        KeyCode::Left | KeyCode::Char('h') => app.pan_left(),
        KeyCode::Right | KeyCode::Char('l') => app.pan_right(),
        KeyCode::Char('+' | '=') => app.zoom_in(),
        KeyCode::Char('-') => app.zoom_out(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
