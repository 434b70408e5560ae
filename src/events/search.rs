use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Focus};

/// What: Handle a key while the search field has focus.
///
/// Details:
/// - Printable characters and Backspace edit the term; the grid refilters on every edit.
/// - Enter keeps the term and returns to the grid; Esc clears it first.
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Char(ch) => app.push_search_char(ch),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => app.focus = Focus::Grid,
        KeyCode::Esc => {
            app.set_search_term("");
            app.focus = Focus::Grid;
        }
        _ => {}
    }
}
