//! Dango Shot - skewer bouncing dango with a retracting bar
//!
//! Core modules:
//! - `sim`: Deterministic simulation (target motion, bar motion, hits, turns)
//! - `config`: Initialization parameters with validation
//! - `ui`: Backend-agnostic draw list for whatever renders the game

pub mod config;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 240.0;

    /// Target defaults (32x32 circles)
    pub const TARGET_RADIUS: f32 = 16.0;
    pub const TARGET_COUNT: usize = 5;
    /// Column of the first target; the rest follow at TARGET_SPACING
    pub const FIRST_TARGET_X: f32 = 40.0;
    pub const TARGET_SPACING: f32 = 60.0;
    /// Vertical speed magnitude range, pixels per frame
    pub const TARGET_MIN_SPEED: f32 = 1.5;
    pub const TARGET_MAX_SPEED: f32 = 4.0;

    /// Bar defaults
    pub const BAR_LENGTH: f32 = 100.0;
    /// Pixels per frame while firing
    pub const BAR_SPEED: f32 = 8.0;

    /// Vertical distance that still counts as a hit (strict)
    pub const HIT_TOLERANCE_Y: f32 = 4.0;

    /// Width of one glyph in the bitmap font
    pub const FONT_WIDTH: f32 = 4.0;

    /// Ticks the autopilot lingers on a turn result before continuing
    pub const IDLE_RESULT_TICKS: u32 = 90;
}
