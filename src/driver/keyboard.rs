//! Default keyboard sub-driver.

use std::collections::HashSet;

use parking_lot::Mutex;

use super::KeyboardHandler;
use crate::event::KeyEvent;

/// Keyboard handler tracking the currently held key set by keycode.
#[derive(Debug, Default)]
pub struct KeyboardState {
    pressed: Mutex<HashSet<i32>>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the key with this keycode currently held?
    pub fn is_pressed(&self, sym: i32) -> bool {
        self.pressed.lock().contains(&sym)
    }

    /// Number of keys currently held.
    pub fn pressed_count(&self) -> usize {
        self.pressed.lock().len()
    }
}

impl KeyboardHandler for KeyboardState {
    fn process_key(&self, event: &KeyEvent) {
        // Key-repeat reports do not change held state.
        if event.repeat {
            return;
        }
        let mut pressed = self.pressed.lock();
        if event.pressed {
            pressed.insert(event.sym);
        } else {
            pressed.remove(&event.sym);
        }
    }
}
