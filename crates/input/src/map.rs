//! Key mapping from terminal events to player actions.

use crate::types::PlayerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to player actions.
///
/// Presses and terminal auto-repeats both count; holding a key relies on the
/// terminal's native repeat rate. Releases map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(PlayerAction::RotateLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(PlayerAction::RotateRight)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(PlayerAction::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(PlayerAction::MoveBackward)
        }
        _ => None,
    }
}

/// Check if key should quit the renderer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
