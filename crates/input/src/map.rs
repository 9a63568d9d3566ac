//! Key mapping from terminal events to controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A physical control the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::MoveLeft,
        Control::MoveRight,
        Control::SoftDrop,
        Control::RotateCw,
        Control::RotateCcw,
    ];

    pub(crate) fn index(&self) -> usize {
        match self {
            Control::MoveLeft => 0,
            Control::MoveRight => 1,
            Control::SoftDrop => 2,
            Control::RotateCw => 3,
            Control::RotateCcw => 4,
        }
    }
}

/// Map a key code to a control.
pub fn map_key(code: KeyCode) -> Option<Control> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Control::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Control::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Control::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Control::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Some(Control::RotateCcw)
        }

        _ => None,
    }
}

/// Map a key event to a control.
pub fn handle_key_event(key: KeyEvent) -> Option<Control> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    map_key(key.code)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
