//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per host frame, keyed on the frame counter
//! - Seeded RNG only
//! - Stable iteration order (stalactites keep their slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod palette;
pub mod state;
pub mod tick;

pub use collision::{is_safe, max_overlap_height, overlaps_hero};
pub use palette::{Color, STALACTITE_COLORS, random_color};
pub use state::{
    GAME_OVER_MESSAGES, GameOverMessage, GamePhase, GameState, Hero, Obstacle, SessionStats,
};
pub use tick::{TickInput, points_per_distance, scroll_obstacles, tick};
