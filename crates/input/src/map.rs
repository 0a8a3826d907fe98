//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game key.
///
/// Letters are lowercased so `A` and `a` select the same cat. Any other key
/// (function keys, Home, Delete, ...) is `Key::Other`. Key releases, control
/// chords and bare modifier presses map to nothing. Callers check
/// `should_quit` first.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Modifier(_) | KeyCode::Null => None,
        _ => Some(Key::Other),
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
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Key::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Key::Down));
    }

    #[test]
    fn test_letters_are_lowercased() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('S'))),
            Some(Key::Char('s'))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('f'))),
            Some(Key::Char('f'))
        );
    }

    #[test]
    fn test_release_and_control_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_unlisted_keys_are_other() {
        for code in [
            KeyCode::F(1),
            KeyCode::F(12),
            KeyCode::Home,
            KeyCode::End,
            KeyCode::PageUp,
            KeyCode::Insert,
            KeyCode::Delete,
            KeyCode::Enter,
            KeyCode::Tab,
        ] {
            assert_eq!(map_key(KeyEvent::from(code)), Some(Key::Other), "{:?}", code);
        }
        assert_eq!(map_key(KeyEvent::from(KeyCode::Null)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
