//! Game state and core simulation types
//!
//! Everything the frame update reads or writes lives in `GameState`; the RNG is
//! owned here and seeded explicitly so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::palette::{Color, random_color};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Title,
    /// Active run
    Playing,
    /// Run ended, stats frozen on screen
    GameOver,
}

/// A stalactite hanging from the top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Left edge in pixels (goes negative while scrolling off-screen)
    pub x: i32,
    /// Length downward from the top edge
    pub height: i32,
    pub color: Color,
}

/// The player's bar, growing up from the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub height: i32,
    pub x: i32,
    pub width: i32,
    pub color: Color,
}

/// Per-session scoring
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: f64,
    /// Pixels scrolled while safe
    pub distance: u32,
    /// Score per 100 pixels of distance, truncated
    pub ppd: u32,
}

impl SessionStats {
    /// Score as shown on screen
    pub fn display_score(&self) -> u64 {
        self.score as u64
    }
}

/// Headline shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverMessage {
    /// Text x offset, hand-tuned to centre each message
    pub x: i32,
    pub text: &'static str,
}

pub const GAME_OVER_MESSAGES: [GameOverMessage; 2] = [
    GameOverMessage {
        x: 20,
        text: "You didn't lose; you just found a new way to not win!",
    },
    GameOverMessage { x: 120, text: "Oops!" },
];

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Non-empty iff `phase == Playing`
    pub obstacles: Vec<Obstacle>,
    pub hero: Hero,
    pub stats: SessionStats,
    /// Set when a collision ends a session
    pub game_over_message: Option<GameOverMessage>,
    /// Rotating colour for title and game-over headlines
    pub headline_color: Color,
    /// Completed sessions since startup
    pub sessions_played: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game on the title screen. Fails if `config` is invalid.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let hero = Hero {
            height: config.hero_start_height,
            x: config.hero_x,
            width: config.hero_width,
            color: random_color(&mut rng),
        };
        let headline_color = random_color(&mut rng);

        Ok(Self {
            config,
            seed,
            phase: GamePhase::Title,
            obstacles: Vec::new(),
            hero,
            stats: SessionStats::default(),
            game_over_message: None,
            headline_color,
            sessions_played: 0,
            rng,
        })
    }

    pub fn random_color(&mut self) -> Color {
        random_color(&mut self.rng)
    }

    /// Height for a new or recycled stalactite, in `[1, max_obstacle_height)`
    pub fn random_obstacle_height(&mut self) -> i32 {
        self.rng.random_range(1..self.config.max_obstacle_height)
    }

    /// Reset everything a new session starts from and lay out the stalactites
    /// one slot apart from the right edge
    pub fn start_session(&mut self) {
        let width = self.config.obstacle_width;
        let first_x = self.config.wrap_x();
        let count = self.config.obstacle_count();

        self.obstacles.clear();
        self.obstacles.reserve(count);
        for i in 0..count as i32 {
            let height = self.random_obstacle_height();
            let color = self.random_color();
            self.obstacles.push(Obstacle {
                x: first_x + i * width,
                height,
                color,
            });
        }

        self.hero.height = self.config.hero_start_height;
        self.stats = SessionStats::default();
        self.phase = GamePhase::Playing;
    }

    /// Freeze stats, pick a headline and drop the stalactites
    pub fn end_session(&mut self) {
        let idx = self.rng.random_range(0..GAME_OVER_MESSAGES.len());
        self.game_over_message = Some(GAME_OVER_MESSAGES[idx]);
        self.obstacles.clear();
        self.sessions_played += 1;
        self.phase = GamePhase::GameOver;
    }
}
