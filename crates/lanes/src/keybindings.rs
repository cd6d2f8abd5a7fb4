//! Fixed key-to-action bindings.
//!
//! Bindings are vim-flavored and not user configurable; every key the app
//! understands is listed here, everything else is a no-op.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lanes_core::Action;

/// Map a key press to its semantic action.
///
/// Returns `None` for unbound keys. `Esc` is not an action; the event loop
/// treats it as the exit key before consulting the bindings.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    // Ctrl/Alt chords are reserved; plain and shifted keys only.
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char('h') => Some(Action::PreviousPanel),
        KeyCode::Char('l') => Some(Action::NextPanel),
        KeyCode::Char('j') => Some(Action::NextItem),
        KeyCode::Char('k') => Some(Action::PreviousItem),
        KeyCode::Char('o') => Some(Action::AppendItem),
        KeyCode::Char('O') => Some(Action::PrependItem),
        _ => None,
    }
}
