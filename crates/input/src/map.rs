//! Key mapping from terminal events to player actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to the action it drives.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        // Turning
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::RotateLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::RotateRight),

        // Walking
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::MoveBackward),

        _ => None,
    }
}

/// Map keyboard input to a player action.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    action_for_key(key.code)
}

/// Check if key should quit the renderer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
