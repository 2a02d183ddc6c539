//! Data-driven physics and game balance
//!
//! Every constant the simulation consumes is gathered here so tests and the
//! embedding application can run with non-default physics (e.g. a perfectly
//! elastic restitution) without touching the sim code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and round-structure parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Board extent in pixels; walls sit at 0 and these bounds
    pub board_width: f32,
    pub board_height: f32,

    /// Shared ball radius
    pub ball_radius: f32,
    /// Speed applied to a player ball on launch (pixels/tick)
    pub initial_speed: f32,

    /// Per-tick multiplicative velocity decay while moving (< 1)
    pub friction: f32,
    /// Speed below which a moving ball snaps to rest
    pub min_velocity: f32,
    /// Ball-ball restitution (1 = perfectly elastic)
    pub restitution: f32,
    /// Wall restitution applied to the bounced axis
    pub wall_restitution: f32,

    /// Player balls placed per round
    pub balls_per_round: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            ball_radius: BALL_RADIUS,
            initial_speed: INITIAL_SPEED,
            friction: FRICTION,
            min_velocity: MIN_VELOCITY,
            restitution: RESTITUTION,
            wall_restitution: WALL_RESTITUTION,
            balls_per_round: BALLS_PER_ROUND,
        }
    }
}

impl Tuning {
    /// Collision distance between two ball centers
    #[inline]
    pub fn contact_distance(&self) -> f32 {
        self.ball_radius * 2.0
    }
}
