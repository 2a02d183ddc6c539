//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per rendered frame)
//! - Seeded RNG only (the target ball spawn is the sole randomness)
//! - Commands delivered between ticks, never during one
//! - No rendering or platform dependencies

pub mod collision;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::resolve_pair;
pub use score::{Triangle, triangle_area};
pub use state::{Ball, BallRole, RoundPhase, RoundState, RoundSummary};
pub use tick::tick;
