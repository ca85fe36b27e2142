//! Dango Shot - headless runner
//!
//! Drives the simulation with the autopilot at a fixed step, no window.
//! Useful for soak-testing the state machine and checking seeds.

use std::path::PathBuf;

use clap::Parser;

use dango_shot::GameConfig;
use dango_shot::sim::{GameEvent, GameState, TickInput, TurnResult, tick};
use dango_shot::ui::{draw_list, result_message};

/// Dango Shot headless runner
#[derive(Parser)]
#[command(version, about = "Plays Dango Shot with the autopilot and reports the score")]
struct Cli {
    /// RNG seed for target spawns
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of turns to play
    #[arg(long, default_value_t = 10)]
    turns: u32,

    /// JSON config file (missing fields use defaults)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stop after this many frames even if turns remain
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    };
    let state = config.and_then(|config| GameState::new(config, cli.seed));
    let mut state = match state {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Dango Shot starting: seed {}, {} targets",
        cli.seed,
        state.config.target_count
    );

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut turns = 0u32;
    let mut best = 0u32;
    let mut draw_calls = 0usize;

    while turns < cli.turns && state.time_ticks < cli.max_ticks {
        let snapshot = tick(&mut state, &input);
        draw_calls += draw_list(&snapshot, &state.config, state.time_ticks).len();

        for event in state.drain_events() {
            match event {
                GameEvent::TargetHit { index } => {
                    log::debug!("frame {}: target {} hit", state.time_ticks, index);
                }
                GameEvent::TurnEnded { hits, points } => {
                    turns += 1;
                    best = best.max(hits);
                    println!(
                        "Turn {:>3}: {:<16} +{:<3} score {}",
                        turns,
                        result_message(TurnResult::from_hits(hits)),
                        points,
                        state.score
                    );
                }
                GameEvent::Fired | GameEvent::TurnReset => {}
            }
        }
    }

    if turns < cli.turns {
        log::warn!("Stopped after {} frames with {} turn(s) played", state.time_ticks, turns);
    }
    log::debug!("{} draw commands generated", draw_calls);
    println!(
        "Final score {} over {} turn(s), best skewer {} ({} frames)",
        state.score, turns, best, state.time_ticks
    );
}
