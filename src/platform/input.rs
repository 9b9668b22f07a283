//! Keyboard state
//!
//! Key events arrive between frames and only flip entries in the map; the
//! frame callback reads it once per frame.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Key that moves the player paddle up
pub const KEY_UP: &str = "w";
/// Key that moves the player paddle down
pub const KEY_DOWN: &str = "s";

/// Set of currently held keys, by key identifier
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down (`true`) or up (`false`)
    pub fn set(&mut self, key: &str, pressed: bool) {
        if pressed {
            self.pressed.insert(key.to_owned());
        } else {
            self.pressed.remove(key);
        }
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Forget every held key (focus loss)
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Paddle commands for this frame
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_pressed(KEY_UP),
            down: self.is_pressed(KEY_DOWN),
        }
    }
}
