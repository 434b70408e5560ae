use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

/// What: Handle a key while an overlay is open.
///
/// Details:
/// - Esc and `q` close any overlay.
/// - In the brand dropdown and the showcase, ↑/↓ (or k/j) move the highlight and Enter
///   applies it; elsewhere Enter closes.
/// - In the detail view `c` toggles the shown vehicle in the compare selection.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    let picker = app.modal.is_picker();
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => app.modal = Modal::None,
        KeyCode::Enter if picker => {
            app.confirm_modal_choice();
        }
        KeyCode::Enter => app.modal = Modal::None,
        KeyCode::Up | KeyCode::Char('k') if picker => app.move_modal_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') if picker => app.move_modal_cursor(1),
        KeyCode::Char('c') => {
            if let Modal::Detail { id } = app.modal {
                app.toggle_compare_selection(id);
            }
        }
        _ => {}
    }
}
