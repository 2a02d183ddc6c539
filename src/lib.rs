//! Tri Billiards - a billiards-style triangle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, round state machine)
//! - `tuning`: Data-driven physics balance
//!
//! Rendering and input are the embedding application's job: it feeds pointer
//! events in as placement/launch commands, drives `sim::tick` once per frame,
//! and reads ball positions and the round summary back out for drawing.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Board width in pixels (full window width)
    pub const BOARD_WIDTH: f32 = 800.0;
    /// Board height in pixels (the window is taller; the strip below is UI, not board)
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Shared radius of every ball (no per-ball size variation)
    pub const BALL_RADIUS: f32 = 15.0;
    /// Launch speed of a committed player ball (pixels/tick)
    pub const INITIAL_SPEED: f32 = 22.0;

    /// Per-tick multiplicative velocity decay while moving
    pub const FRICTION: f32 = 0.99;
    /// Speed below which a moving ball snaps to rest
    pub const MIN_VELOCITY: f32 = 0.1;
    /// Fraction of normal relative velocity retained in ball-ball collisions
    pub const RESTITUTION: f32 = 0.6;
    /// Fraction of velocity retained on the bounced axis at a wall
    pub const WALL_RESTITUTION: f32 = 0.8;

    /// Player balls placed per round
    pub const BALLS_PER_ROUND: u32 = 2;
}
