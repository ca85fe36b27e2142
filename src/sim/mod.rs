//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-counted motion only (pixels per frame, never per second)
//! - Seeded RNG only
//! - Stable iteration order (targets in column order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bar_skewers, check_collision};
pub use state::{
    Bar, BarView, GameEvent, GamePhase, GameState, RenderSnapshot, Target, TargetView, TurnResult,
};
pub use tick::{TickInput, tick};
