//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one frame. Motion is expressed in
//! pixels per frame, so the host decides the frame rate (60 Hz nominal).

use super::collision::check_collision;
use super::state::{GameEvent, GamePhase, GameState, RenderSnapshot};
use crate::consts::IDLE_RESULT_TICKS;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer height; only read while the bar is idle
    pub pointer_y: Option<f32>,
    /// Primary action pressed this frame (rising edge, not held)
    pub fire: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame and return what to draw
pub fn tick(state: &mut GameState, input: &TickInput) -> RenderSnapshot {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;
    state.phase_ticks = state.phase_ticks.saturating_add(1);

    // Free targets bounce in every phase
    let screen_height = state.config.screen_height;
    for target in &mut state.targets {
        if !target.is_stuck {
            target.update(screen_height);
        }
    }

    match state.phase {
        GamePhase::Ready => {
            state.bar.update(input.pointer_y);
            if input.fire {
                state.bar.fire();
                state.events.push(GameEvent::Fired);
                state.set_phase(GamePhase::Firing);
            }
        }

        GamePhase::Firing => {
            state.bar.update(None);

            // Skewered targets ride along with the bar until it stops
            if state.bar.pos.x > 0.0 {
                let step = state.bar.speed;
                for target in state.targets.iter_mut().filter(|t| t.is_stuck) {
                    target.pos.x -= step;
                }
            }

            let hits = check_collision(
                &mut state.bar,
                &mut state.targets,
                state.config.hit_tolerance_y,
            );
            for index in hits {
                log::debug!("Target {} skewered ({} on bar)", index, state.bar.hit_count);
                state.events.push(GameEvent::TargetHit { index });
            }

            if state.bar.is_spent() {
                finish_turn(state);
            }
        }

        GamePhase::Stuck => {
            if input.fire {
                state.reset_turn();
                state.set_phase(GamePhase::Ready);
            }
        }
    }

    state.snapshot()
}

/// Bar reached the edge: bank the hits and show the result
fn finish_turn(state: &mut GameState) {
    let hits = state.bar.hit_count;
    state.last_hit_count = hits;
    let points = u64::from(hits) * u64::from(hits);
    if hits > 0 {
        state.score += points;
    }
    log::info!(
        "Turn over: {} hit(s), +{} (score {})",
        hits,
        points,
        state.score
    );
    state.events.push(GameEvent::TurnEnded { hits, points });
    state.set_phase(GamePhase::Stuck);
}

/// Fill in pointer and fire for demo play
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Ready => {
            // Lead each free target to the frame the bar tip reaches its column
            // (ignores bounces, so it misses now and then)
            let config = &state.config;
            let low = config.target_radius;
            let high = config.screen_height - config.target_radius;
            let aim = state
                .targets
                .iter()
                .filter(|t| !t.is_stuck)
                .map(|t| {
                    let travel = (config.screen_width - t.pos.x).max(0.0);
                    let frames = (travel / config.bar_speed).ceil() + 1.0;
                    t.pos.y + t.speed_y * frames
                })
                .find(|y| (low..=high).contains(y));

            input.pointer_y = aim.or_else(|| state.targets.first().map(|t| t.pos.y));
            input.fire = true;
        }
        GamePhase::Firing => {
            input.fire = false;
        }
        GamePhase::Stuck => {
            input.fire = state.phase_ticks >= IDLE_RESULT_TICKS;
        }
    }
}
