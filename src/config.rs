//! Game configuration
//!
//! Screen size, target layout, and bar tuning. Loaded once at startup (JSON,
//! every field optional) and validated before a game is built from it.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Construction-time configuration failure
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for [`GameConfig`]
    Parse(serde_json::Error),
    NoTargets,
    NonPositiveBarLength(f32),
    NonPositiveBarSpeed(f32),
    NonPositiveTolerance(f32),
    NonPositiveRadius(f32),
    /// Screen cannot hold a target of the configured radius
    ScreenTooSmall { width: f32, height: f32, radius: f32 },
    InvalidSpeedRange { min: f32, max: f32 },
    /// A target column falls outside the screen
    TargetOffScreen { index: usize, x: f32 },
    /// Field is NaN or infinite (e.g. JSON `1e39` overflows f32)
    NonFinite(&'static str),
    /// One bar step is lost to rounding at the far edge, so a shot never ends
    BarTooSlow { width: f32, speed: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::NoTargets => write!(f, "target_count must be at least 1"),
            ConfigError::NonPositiveBarLength(v) => {
                write!(f, "bar_length must be positive (got {})", v)
            }
            ConfigError::NonPositiveBarSpeed(v) => {
                write!(f, "bar_speed must be positive (got {})", v)
            }
            ConfigError::NonPositiveTolerance(v) => {
                write!(f, "hit_tolerance_y must be positive (got {})", v)
            }
            ConfigError::NonPositiveRadius(v) => {
                write!(f, "target_radius must be positive (got {})", v)
            }
            ConfigError::ScreenTooSmall {
                width,
                height,
                radius,
            } => write!(
                f,
                "screen {}x{} cannot hold targets of radius {}",
                width, height, radius
            ),
            ConfigError::InvalidSpeedRange { min, max } => {
                write!(f, "target speed range [{}, {}) is empty or non-positive", min, max)
            }
            ConfigError::TargetOffScreen { index, x } => {
                write!(f, "target {} at x={} is off screen", index, x)
            }
            ConfigError::NonFinite(field) => write!(f, "{} must be a finite number", field),
            ConfigError::BarTooSlow { width, speed } => write!(
                f,
                "bar_speed {} is too small to move across a {} wide screen",
                speed, width
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Initialization parameters for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,

    // === Targets ===
    pub target_radius: f32,
    pub target_count: usize,
    pub first_target_x: f32,
    pub target_spacing: f32,
    /// Lower bound of the vertical speed magnitude (inclusive)
    pub target_min_speed: f32,
    /// Upper bound of the vertical speed magnitude (exclusive)
    pub target_max_speed: f32,

    // === Bar ===
    pub bar_length: f32,
    pub bar_speed: f32,
    pub hit_tolerance_y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            target_radius: TARGET_RADIUS,
            target_count: TARGET_COUNT,
            first_target_x: FIRST_TARGET_X,
            target_spacing: TARGET_SPACING,
            target_min_speed: TARGET_MIN_SPEED,
            target_max_speed: TARGET_MAX_SPEED,

            bar_length: BAR_LENGTH,
            bar_speed: BAR_SPEED,
            hit_tolerance_y: HIT_TOLERANCE_Y,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Column of target `index`
    pub fn target_x(&self, index: usize) -> f32 {
        self.first_target_x + index as f32 * self.target_spacing
    }

    /// Check that the simulation can behave meaningfully with these values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("target_radius", self.target_radius),
            ("first_target_x", self.first_target_x),
            ("target_spacing", self.target_spacing),
            ("target_min_speed", self.target_min_speed),
            ("target_max_speed", self.target_max_speed),
            ("bar_length", self.bar_length),
            ("bar_speed", self.bar_speed),
            ("hit_tolerance_y", self.hit_tolerance_y),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(field));
        }
        if self.target_count == 0 {
            return Err(ConfigError::NoTargets);
        }
        if !(self.bar_length > 0.0) {
            return Err(ConfigError::NonPositiveBarLength(self.bar_length));
        }
        if !(self.bar_speed > 0.0) {
            return Err(ConfigError::NonPositiveBarSpeed(self.bar_speed));
        }
        if !(self.hit_tolerance_y > 0.0) {
            return Err(ConfigError::NonPositiveTolerance(self.hit_tolerance_y));
        }
        if !(self.target_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.target_radius));
        }
        if !(self.screen_width > 0.0) || !(self.screen_height > 2.0 * self.target_radius) {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                radius: self.target_radius,
            });
        }
        if self.screen_width - self.bar_speed >= self.screen_width {
            return Err(ConfigError::BarTooSlow {
                width: self.screen_width,
                speed: self.bar_speed,
            });
        }
        if !(self.target_min_speed > 0.0) || !(self.target_min_speed < self.target_max_speed) {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.target_min_speed,
                max: self.target_max_speed,
            });
        }
        for index in 0..self.target_count {
            let x = self.target_x(index);
            if !(0.0..=self.screen_width).contains(&x) {
                return Err(ConfigError::TargetOffScreen { index, x });
            }
        }
        Ok(())
    }
}
