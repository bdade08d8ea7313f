use thiserror::Error;

/// Configuration rejected at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: i64 },
    #[error("max obstacle height {max_height} must be in 2..={screen_height}")]
    ObstacleHeightOutOfRange { max_height: i32, screen_height: i32 },
    #[error("hero start height {start} must be in {min}..={screen_height}")]
    HeroHeightOutOfRange {
        start: i32,
        min: i32,
        screen_height: i32,
    },
    #[error("score rate must be finite and non-negative (got {0})")]
    InvalidScoreRate(f64),
    #[error("Config parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("Config read error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
