//! Per-tick simulation advance
//!
//! One tick = one rendered frame. Commands (`place`, `commit_launch`,
//! `reset`) are applied between ticks by the embedding layer; this function
//! only moves the physics and the round phase forward.

use super::collision::resolve_pair;
use super::state::{RoundPhase, RoundState};

/// Advance the round by one tick.
///
/// While `Settling`: integrate every ball, then resolve the target against
/// each player ball and every distinct unordered player pair exactly once.
/// `resolve_pair` mutates both sides, so visiting a pair twice in a tick
/// would double the impulse; the `i < j` enumeration is what keeps the
/// momentum exchange correct.
///
/// On the edge into all-stopped the round either reopens for placement or,
/// with no placements left, finalizes its score exactly once.
pub fn tick(state: &mut RoundState) {
    state.time_ticks += 1;

    if state.phase != RoundPhase::Settling {
        return;
    }

    let tuning = state.tuning.clone();

    state.target.integrate(&tuning);
    for ball in &mut state.player_balls {
        ball.integrate(&tuning);
    }

    for ball in &mut state.player_balls {
        resolve_pair(&mut state.target, ball, &tuning);
    }
    for i in 0..state.player_balls.len() {
        for j in (i + 1)..state.player_balls.len() {
            let (head, tail) = state.player_balls.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0], &tuning);
        }
    }

    if state.all_stopped() {
        if state.balls_left > 0 {
            state.phase = RoundPhase::Placing;
            log::debug!("settled, {} placement(s) left", state.balls_left);
        } else {
            state.finalize_round();
            state.phase = RoundPhase::Finished;
        }
    }
}
