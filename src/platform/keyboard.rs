//! Keyboard state
//!
//! Browsers deliver key events asynchronously; the simulation wants to poll
//! "is held" and "was released this frame". `Keyboard` bridges the two.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
}

impl Key {
    const COUNT: usize = 3;

    fn slot(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Confirm => 2,
        }
    }

    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            " " | "Spacebar" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// True for a fresh `I` press; auto-repeat while held does not toggle again
pub fn is_idle_toggle(key: &str, repeat: bool) -> bool {
    !repeat && key.eq_ignore_ascii_case("i")
}

#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: [bool; Key::COUNT],
    released: [bool; Key::COUNT],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held[key.slot()] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        let slot = key.slot();
        if self.held[slot] {
            self.released[slot] = true;
        }
        self.held[slot] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.slot()]
    }

    pub fn was_released(&self, key: Key) -> bool {
        self.released[key.slot()]
    }

    /// Forget everything (window lost focus; key-up events will not arrive)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Input for the given frame
    pub fn snapshot(&self, frame: u64, idle_mode: bool) -> TickInput {
        TickInput {
            frame,
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            confirm: self.was_released(Key::Confirm),
            idle_mode,
        }
    }

    /// Clear one-shot release flags once a frame has consumed them
    pub fn end_frame(&mut self) {
        self.released = [false; Key::COUNT];
    }
}
