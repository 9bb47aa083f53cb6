//! Key mapping from terminal events to per-tick input signals.

use crate::types::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a directional signal.
pub fn handle_key_event(key: KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Input::Up),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Input::Down),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Input::Left),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Input::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(Input::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), Some(Input::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), Some(Input::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), Some(Input::Right));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('W'))), Some(Input::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('j'))), Some(Input::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), Some(Input::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), Some(Input::Right));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
