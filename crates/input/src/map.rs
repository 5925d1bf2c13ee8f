//! Key mapping from terminal events to renderer keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key code to a renderer key.
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Key::W),
            'a' => Some(Key::A),
            's' => Some(Key::S),
            'd' => Some(Key::D),
            'q' => Some(Key::Q),
            'e' => Some(Key::E),
            'z' => Some(Key::Z),
            'x' => Some(Key::X),
            'c' => Some(Key::C),
            'v' => Some(Key::V),
            'n' => Some(Key::N),
            'k' => Some(Key::K),
            'l' => Some(Key::L),
            _ => None,
        },
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Map a full key event, treating Ctrl-C as Escape.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Key::Escape);
    }
    map_key_code(key.code)
}
