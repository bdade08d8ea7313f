//! Game tunables
//!
//! Defaults reproduce the classic 256x180 layout. Any subset of fields can be
//! overridden from JSON; the result is validated before a game may start.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// All numeric game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Display ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub fps: u32,

    // === Stalactites ===
    pub obstacle_width: i32,
    /// Exclusive upper bound for rolled obstacle heights
    pub max_obstacle_height: i32,
    /// Pixels moved per scroll step
    pub scroll_speed: i32,
    /// Frames between scroll steps
    pub scroll_interval: u64,

    // === Hero ===
    pub hero_start_height: i32,
    pub hero_min_height: i32,
    pub hero_x: i32,
    pub hero_width: i32,

    // === Cosmetics / scoring ===
    /// Frames between colour re-rolls
    pub color_interval: u64,
    pub score_rate: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            obstacle_width: OBSTACLE_WIDTH,
            max_obstacle_height: MAX_OBSTACLE_HEIGHT,
            scroll_speed: SCROLL_SPEED,
            scroll_interval: SCROLL_INTERVAL,

            hero_start_height: HERO_START_HEIGHT,
            hero_min_height: HERO_MIN_HEIGHT,
            hero_x: HERO_X,
            hero_width: HERO_WIDTH,

            color_interval: COLOR_INTERVAL,
            score_rate: SCORE_RATE,
        }
    }
}

fn positive(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl GameConfig {
    /// Reject any configuration that would divide by zero, loop forever or
    /// produce an empty random range
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width.into())?;
        positive("screen_height", self.screen_height.into())?;
        positive("fps", self.fps.into())?;
        positive("obstacle_width", self.obstacle_width.into())?;
        positive("scroll_speed", self.scroll_speed.into())?;
        positive("scroll_interval", self.scroll_interval as i64)?;
        positive("hero_min_height", self.hero_min_height.into())?;
        positive("hero_width", self.hero_width.into())?;
        positive("color_interval", self.color_interval as i64)?;

        if self.max_obstacle_height < 2 || self.max_obstacle_height > self.screen_height {
            return Err(ConfigError::ObstacleHeightOutOfRange {
                max_height: self.max_obstacle_height,
                screen_height: self.screen_height,
            });
        }

        if self.hero_start_height < self.hero_min_height
            || self.hero_start_height > self.screen_height
        {
            return Err(ConfigError::HeroHeightOutOfRange {
                start: self.hero_start_height,
                min: self.hero_min_height,
                screen_height: self.screen_height,
            });
        }

        if !self.score_rate.is_finite() || self.score_rate < 0.0 {
            return Err(ConfigError::InvalidScoreRate(self.score_rate));
        }

        Ok(())
    }

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of stalactites alive during a session (one per slot, plus one)
    pub fn obstacle_count(&self) -> usize {
        (self.screen_width / self.obstacle_width) as usize + 1
    }

    /// X position a recycled stalactite re-enters at
    pub fn wrap_x(&self) -> i32 {
        self.screen_width - 1
    }

    /// Hero height at or below which no points are earned
    pub fn min_scoring_height(&self) -> i32 {
        self.screen_height - self.max_obstacle_height
    }

    /// LocalStorage key for browser overrides
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pastel_stalactites_config";

    /// Load overrides from LocalStorage (WASM only); defaults when absent
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let config = Self::from_json(&json)?;
                log::info!("Loaded config overrides from LocalStorage");
                return Ok(config);
            }
        }

        log::info!("Using default config");
        Ok(Self::default())
    }

    /// Load overrides from a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
