//! Game state and core simulation types
//!
//! Game owns the bar and every target for its whole lifetime. Targets never
//! reference the bar or each other, so everything is plain owned data.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};

/// Current phase of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bar follows the pointer, waiting for the fire input
    #[default]
    Ready,
    /// Bar is sweeping left, skewering targets
    Firing,
    /// Bar reached the left edge; result is on screen until the next click
    Stuck,
}

/// Things that happened during a tick, for audio/effects on the host side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired,
    TargetHit { index: usize },
    TurnEnded { hits: u32, points: u64 },
    TurnReset,
}

/// Outcome of the last completed turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    Miss,
    Skewered(u32),
}

impl TurnResult {
    pub fn from_hits(hits: u32) -> Self {
        if hits == 0 {
            TurnResult::Miss
        } else {
            TurnResult::Skewered(hits)
        }
    }
}

/// A dango bouncing up and down in its own column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Spawn column, restored on every reset
    origin_x: f32,
    pub pos: Vec2,
    /// Signed vertical speed (pixels per frame)
    pub speed_y: f32,
    pub radius: f32,
    pub is_hit: bool,
    /// Skewered on the bar; only moves with the bar from now on
    pub is_stuck: bool,
}

impl Target {
    /// Create a target in column `origin_x` with a random height and speed
    pub fn new<R: Rng + ?Sized>(origin_x: f32, config: &GameConfig, rng: &mut R) -> Self {
        let mut target = Self {
            origin_x,
            pos: Vec2::new(origin_x, config.screen_height / 2.0),
            speed_y: 0.0,
            radius: config.target_radius,
            is_hit: false,
            is_stuck: false,
        };
        target.reset(config, rng);
        target
    }

    #[inline]
    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    /// Move vertically and bounce off the top/bottom bounds.
    ///
    /// The bound check happens after the move, so a target can overshoot the
    /// bound by less than one frame's step before it turns around.
    pub fn update(&mut self, screen_height: f32) {
        if self.is_stuck {
            return;
        }
        self.pos.y += self.speed_y;
        if self.pos.y <= self.radius || self.pos.y >= screen_height - self.radius {
            self.speed_y = -self.speed_y;
        }
    }

    /// Back to the spawn column with a fresh random height and speed
    pub fn reset<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        self.pos.x = self.origin_x;
        self.is_hit = false;
        self.is_stuck = false;
        self.pos.y = random_spawn_y(config, rng);
        let magnitude = rng.random_range(config.target_min_speed..config.target_max_speed);
        self.speed_y = if rng.random_bool(0.5) { magnitude } else { -magnitude };
    }

    /// Mark as skewered
    pub fn stick(&mut self) {
        self.is_hit = true;
        self.is_stuck = true;
    }
}

/// Whole-pixel height in [radius, height - radius]
fn random_spawn_y<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> f32 {
    let lo = config.target_radius.ceil() as i32;
    let hi = (config.screen_height - config.target_radius).floor() as i32;
    if lo <= hi {
        rng.random_range(lo..=hi) as f32
    } else {
        // Fractional radius leaves no whole pixel in range
        config.screen_height / 2.0
    }
}

/// The skewer. Rests at the right edge, sweeps left when fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    /// Left end of the bar
    pub pos: Vec2,
    pub length: f32,
    /// Pixels per frame while firing
    pub speed: f32,
    /// Where every shot starts (the far edge)
    start_x: f32,
    pub is_firing: bool,
    /// Targets skewered by the current shot
    pub hit_count: u32,
}

impl Bar {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.screen_width, (config.screen_height / 2.0).floor()),
            length: config.bar_length,
            speed: config.bar_speed,
            start_x: config.screen_width,
            is_firing: false,
            hit_count: 0,
        }
    }

    /// Follow the pointer while idle, sweep left while firing
    pub fn update(&mut self, pointer_y: Option<f32>) {
        if self.is_firing {
            self.pos.x = (self.pos.x - self.speed).max(0.0);
        } else if let Some(y) = pointer_y {
            self.pos.y = y;
        }
    }

    /// Start a shot from the far edge; ignored while a shot is in flight
    pub fn fire(&mut self) {
        if !self.is_firing {
            self.is_firing = true;
            self.hit_count = 0;
            self.pos.x = self.start_x;
        }
    }

    pub fn reset(&mut self) {
        self.is_firing = false;
    }

    /// Bar has reached the left edge
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.pos.x <= 0.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.length
    }
}

/// Per-target data the renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub is_hit: bool,
}

/// Bar data the renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarView {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub is_firing: bool,
}

/// Everything a frame needs to draw, detached from the live state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub targets: Vec<TargetView>,
    pub bar: BarView,
    pub score: u64,
    pub phase: GamePhase,
    pub last_hit_count: u32,
    /// Live hit counter, only while firing
    pub hit_count: Option<u32>,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the RNG was last (re)seeded with
    pub seed: u64,
    rng: Pcg32,
    /// Only ever grows, by hits² at the end of a turn
    pub score: u64,
    pub phase: GamePhase,
    /// Hits scored by the last completed turn
    pub last_hit_count: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks spent in the current phase
    pub phase_ticks: u32,
    pub bar: Bar,
    /// Fixed at construction, iterated in column order
    pub targets: Vec<Target>,
    /// Events queued since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate `config` and build a fresh game
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let targets = (0..config.target_count)
            .map(|i| Target::new(config.target_x(i), &config, &mut rng))
            .collect();
        log::debug!(
            "New game: {} targets, seed {}",
            config.target_count,
            seed
        );
        Ok(Self {
            bar: Bar::new(&config),
            config,
            seed,
            rng,
            score: 0,
            phase: GamePhase::Ready,
            last_hit_count: 0,
            time_ticks: 0,
            phase_ticks: 0,
            targets,
            events: Vec::new(),
        })
    }

    /// Restart the random stream (targets keep their current spawn until reset)
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Bounds-checked target access
    pub fn target(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        log::debug!("Phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.phase_ticks = 0;
    }

    /// Put the bar away and respawn every target
    pub fn reset_turn(&mut self) {
        self.bar.reset();
        for target in &mut self.targets {
            target.reset(&self.config, &mut self.rng);
        }
        self.events.push(GameEvent::TurnReset);
    }

    /// Result of the finished turn (only meaningful while stuck)
    pub fn turn_result(&self) -> Option<TurnResult> {
        match self.phase {
            GamePhase::Stuck => Some(TurnResult::from_hits(self.last_hit_count)),
            _ => None,
        }
    }

    /// Hand queued events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            targets: self
                .targets
                .iter()
                .map(|t| TargetView {
                    x: t.pos.x,
                    y: t.pos.y,
                    radius: t.radius,
                    is_hit: t.is_hit,
                })
                .collect(),
            bar: BarView {
                x: self.bar.pos.x,
                y: self.bar.pos.y,
                length: self.bar.length,
                is_firing: self.bar.is_firing,
            },
            score: self.score,
            phase: self.phase,
            last_hit_count: self.last_hit_count,
            hit_count: self.bar.is_firing.then_some(self.bar.hit_count),
        }
    }
}
