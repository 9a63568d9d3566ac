//! Held-key tracker for terminal environments.
//!
//! The core wants level state ("is left held this tick?"). Many terminals only
//! send press events (plus auto-repeat presses while a key is held), so a key
//! counts as held until `key_release_timeout_ms` after its latest press, or
//! until a release event arrives when the terminal does send them. With
//! [`InputHandler::with_release_events`] the timeout is off and only releases
//! end a hold.

use crossterm::event::{KeyCode, KeyEvent};

use crate::map::{handle_key_event, map_key, Control};
use crate::types::{TickInput, KEY_RELEASE_TIMEOUT_MS};

/// Tracks which controls are currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Time of the latest press per control, `None` when released
    last_press_ms: [Option<u64>; 5],
    key_release_timeout_ms: u32,
    /// Terminal reports key releases
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_press_ms: [None; 5],
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press (or auto-repeat) of `code` at `now_ms`.
    pub fn handle_key_press(&mut self, code: KeyCode, now_ms: u64) -> Option<Control> {
        let control = map_key(code)?;
        self.press(control, now_ms);
        Some(control)
    }

    /// Record a press event; Ctrl chords are not controls.
    pub fn handle_press_event(&mut self, key: KeyEvent, now_ms: u64) -> Option<Control> {
        let control = handle_key_event(key)?;
        self.press(control, now_ms);
        Some(control)
    }

    pub fn press(&mut self, control: Control, now_ms: u64) {
        self.last_press_ms[control.index()] = Some(now_ms);
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(control) = map_key(code) {
            self.last_press_ms[control.index()] = None;
        }
    }

    pub fn is_held(&self, control: Control, now_ms: u64) -> bool {
        match self.last_press_ms[control.index()] {
            Some(_) if self.release_events => true,
            Some(t) => now_ms.saturating_sub(t) < u64::from(self.key_release_timeout_ms),
            None => false,
        }
    }

    /// Level state of every control at `now_ms`, dropping stale presses.
    pub fn frame(&mut self, now_ms: u64) -> TickInput {
        for control in Control::ALL {
            if !self.is_held(control, now_ms) {
                self.last_press_ms[control.index()] = None;
            }
        }

        TickInput {
            left: self.is_held(Control::MoveLeft, now_ms),
            right: self.is_held(Control::MoveRight, now_ms),
            soft_drop: self.is_held(Control::SoftDrop, now_ms),
            rotate_cw: self.is_held(Control::RotateCw, now_ms),
            rotate_ccw: self.is_held(Control::RotateCcw, now_ms),
        }
    }

    pub fn reset(&mut self) {
        self.last_press_ms = [None; 5];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_press_is_held_until_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        assert_eq!(ih.handle_key_press(KeyCode::Left, 1000), Some(Control::MoveLeft));
        assert!(ih.frame(1049).left);
        assert!(!ih.frame(1050).left);
        // stays released once expired
        assert!(!ih.frame(1049).left);
    }

    #[test]
    fn test_auto_repeat_extends_hold() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key_press(KeyCode::Down, 0);
        ih.handle_key_press(KeyCode::Down, 40);
        ih.handle_key_press(KeyCode::Down, 80);
        assert!(ih.frame(120).soft_drop);
        assert!(!ih.frame(130).soft_drop);
    }

    #[test]
    fn test_release_event_clears_immediately() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up, 0);
        assert!(ih.frame(1).rotate_cw);
        ih.handle_key_release(KeyCode::Up);
        assert!(ih.frame(2).is_idle());
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Char('?'), 0), None);
        assert!(ih.frame(0).is_idle());
    }

    #[test]
    fn test_tap_is_shorter_than_shift_debounce() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout_ms() < crate::types::SHIFT_DEBOUNCE_MS);
    }

    #[test]
    fn test_ctrl_chord_press_is_ignored() {
        let mut ih = InputHandler::new();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(ih.handle_press_event(ctrl_a, 0), None);
        assert!(ih.frame(1).is_idle());

        let a = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(ih.handle_press_event(a, 0), Some(Control::MoveLeft));
        assert!(ih.frame(1).left);
    }

    #[test]
    fn test_release_events_hold_until_release() {
        let mut ih = InputHandler::new().with_release_events(true);
        assert!(ih.release_events());

        ih.handle_key_press(KeyCode::Down, 0);
        // Well past the timeout, before the terminal's auto-repeat kicks in.
        assert!(ih.frame(500).soft_drop);
        assert!(ih.frame(2_000).soft_drop);

        ih.handle_key_release(KeyCode::Down);
        assert!(!ih.frame(2_001).soft_drop);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);
        ih.handle_key_press(KeyCode::Left, 0);
        ih.handle_key_press(KeyCode::Char('z'), 0);
        ih.reset();
        assert!(ih.frame(1).is_idle());
    }
}
