//! Tri Billiards headless demo
//!
//! Runs one scripted round without a renderer: seed the board, place the two
//! player balls at sensible spots, launch them at the target, tick until
//! everything settles, and print the final round summary as JSON. Useful for
//! eyeballing determinism (`tri-billiards 42` always prints the same round)
//! and as a reference for how an embedding UI drives the core.

use glam::Vec2;
use tri_billiards::sim::{RoundPhase, RoundState, tick};

/// Hard cap on demo ticks; a round settles in far fewer
const MAX_TICKS: u32 = 200_000;

fn main() {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            let fallback: u64 = rand::random();
            log::warn!("could not parse seed {arg:?}, using {fallback}");
            fallback
        }),
        None => rand::random(),
    };
    log::info!("running demo round with seed {seed}");

    let mut state = RoundState::new(seed);
    let mut ticks = 0;
    while state.phase != RoundPhase::Finished && ticks < MAX_TICKS {
        if state.accepts_placement() {
            let spot = pick_spot(&state);
            if !state.place(spot) || !state.commit_launch() {
                log::error!("scripted placement at {spot:?} was rejected");
                break;
            }
        } else {
            tick(&mut state);
            ticks += 1;
        }
    }

    match serde_json::to_string_pretty(&state.summary()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize summary: {err}"),
    }
}

/// Farthest acceptable grid point from the target, same scan a simple AI
/// opponent would use
fn pick_spot(state: &RoundState) -> Vec2 {
    let t = &state.tuning;
    let mut best = (f32::MIN, Vec2::new(t.board_width / 2.0, t.board_height / 2.0));
    let mut y = 40.0;
    while y < t.board_height {
        let mut x = 40.0;
        while x < t.board_width {
            let p = Vec2::new(x, y);
            if state.can_place(p) {
                let d = p.distance(state.target.pos);
                if d > best.0 {
                    best = (d, p);
                }
            }
            x += 80.0;
        }
        y += 80.0;
    }
    best.1
}
