//! Platform abstraction layer
//!
//! Host-side state that sits between raw browser events and the simulation:
//! - Keyboard held / released-this-frame tracking
//! - Fixed-step frame clock and frame counter

pub mod clock;
pub mod keyboard;

pub use clock::FrameClock;
pub use keyboard::{Key, Keyboard, is_idle_toggle};
