//! Pastel Stalactites - a single-screen arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phases, obstacles, collision, scoring)
//! - `ui`: Per-frame draw pass against an abstract `Canvas`
//! - `renderer`: WebGPU triangle renderer implementing `Canvas`
//! - `platform`: Keyboard state and fixed-step frame clock
//! - `config`: Validated, data-driven game tunables

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use config::GameConfig;
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: i32 = 256;
    pub const SCREEN_HEIGHT: i32 = 180;

    /// Target frame rate; the simulation advances exactly one frame per step
    pub const FPS: u32 = 60;
    /// Maximum substeps per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Stalactite defaults
    pub const OBSTACLE_WIDTH: i32 = 8;
    pub const MAX_OBSTACLE_HEIGHT: i32 = 150;
    pub const SCROLL_SPEED: i32 = 1;
    /// Obstacles scroll on every Nth frame (half game speed)
    pub const SCROLL_INTERVAL: u64 = 2;

    /// Hero defaults
    pub const HERO_START_HEIGHT: i32 = 150;
    pub const HERO_MIN_HEIGHT: i32 = 4;
    pub const HERO_X: i32 = 10;
    pub const HERO_WIDTH: i32 = OBSTACLE_WIDTH * 2;

    /// Cosmetic colours re-roll every Nth frame
    pub const COLOR_INTERVAL: u64 = 5;
    /// Points per pixel of height above the minimum scoring height, per frame
    pub const SCORE_RATE: f64 = 0.04;

    pub const VERSION: &str = "v1.0.0";
    pub const GAME_TITLE: &str = "PASTEL STALACTITES";
    pub const WINDOW_TITLE: &str = "Pastel Stalactites (v1.0.0)";
    pub const BYLINE: &str = "by Matthew Niznik";
}
