//! Keyboard state tracking with both edge-triggered and level-triggered queries.
//!
//! - **Level-triggered (held):** `is_held(key)` returns true every frame the key
//!   is physically down.
//!
//! - **Edge-triggered (just_pressed / just_released):** true only during the frame
//!   the transition happened, cleared by `end_frame()` once the frame has consumed
//!   them. The mode cycle advances on `just_released(Space)` because the original
//!   demo reacts to the key-up event, not the key-down.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    F3,
}

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
    just_released: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if self.held.remove(&key) {
            self.just_released.insert(key);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn is_just_released(&self, key: Key) -> bool {
        self.just_released.contains(&key)
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_sets_held_and_just_pressed() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        assert!(input.is_held(Key::Space));
        assert!(input.is_just_pressed(Key::Space));
    }

    #[test]
    fn key_up_clears_held_sets_just_released() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.key_up(Key::Space);
        assert!(!input.is_held(Key::Space));
        assert!(input.is_just_released(Key::Space));
    }

    #[test]
    fn os_key_repeat_does_not_double_just_pressed() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.end_frame();
        // OS auto-repeat delivers key_down again while the key is still held;
        // that must not re-arm the edge.
        input.key_down(Key::Space);
        assert!(input.is_held(Key::Space));
        assert!(!input.is_just_pressed(Key::Space));
    }

    #[test]
    fn key_up_without_down_is_no_op() {
        let mut input = InputState::new();
        input.key_up(Key::Space);
        assert!(!input.is_just_released(Key::Space));
        assert!(!input.is_held(Key::Space));
    }

    #[test]
    fn end_frame_clears_transient_state_keeps_held() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.key_down(Key::F3);
        input.end_frame();
        assert!(!input.is_just_pressed(Key::Space));
        assert!(!input.is_just_pressed(Key::F3));
        assert!(input.is_held(Key::Space));
        assert!(input.is_held(Key::F3));
    }

    #[test]
    fn end_frame_clears_just_released() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.key_up(Key::Space);
        input.end_frame();
        assert!(!input.is_just_released(Key::Space));
    }

    #[test]
    fn keys_are_independent() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.key_down(Key::Escape);
        input.key_up(Key::Space);
        assert!(input.is_just_released(Key::Space));
        assert!(input.is_held(Key::Escape));
        assert!(!input.is_just_released(Key::Escape));
    }
}
