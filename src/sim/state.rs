//! Round state and core simulation types
//!
//! Everything needed to replay a round deterministically lives here: the
//! balls, the round phase machine, and the placement/launch/reset commands.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::score::Triangle;
use crate::tuning::Tuning;

/// What a ball is for. Classification only; physics treats both alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallRole {
    /// The stationary ball the player shoots at
    Target,
    /// A ball placed and launched by the player
    Player,
}

/// A ball entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub role: BallRole,
    /// True while the ball is in motion; cleared only by friction decay
    pub moving: bool,
}

impl Ball {
    pub fn new(pos: Vec2, role: BallRole) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            role,
            moving: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one tick: Euler step, wall bounces, friction, rest check.
    ///
    /// Each axis bounces independently: the position is clamped to keep the
    /// ball edge inside the board and only that axis's velocity is reflected
    /// (scaled by wall restitution). Dropping below `min_velocity` is the one
    /// way a ball comes to rest.
    pub fn integrate(&mut self, tuning: &Tuning) {
        if !self.moving {
            return;
        }

        self.pos += self.vel;

        let r = tuning.ball_radius;
        if self.pos.x - r < 0.0 {
            self.pos.x = r;
            self.vel.x = -self.vel.x * tuning.wall_restitution;
        } else if self.pos.x + r > tuning.board_width {
            self.pos.x = tuning.board_width - r;
            self.vel.x = -self.vel.x * tuning.wall_restitution;
        }

        if self.pos.y - r < 0.0 {
            self.pos.y = r;
            self.vel.y = -self.vel.y * tuning.wall_restitution;
        } else if self.pos.y + r > tuning.board_height {
            self.pos.y = tuning.board_height - r;
            self.vel.y = -self.vel.y * tuning.wall_restitution;
        }

        self.vel *= tuning.friction;

        if self.speed() < tuning.min_velocity {
            self.vel = Vec2::ZERO;
            self.moving = false;
        }
    }

    /// Aim at `target` and start moving at `speed`.
    ///
    /// A zero-length direction (already on the target) leaves the velocity
    /// untouched; degenerate launches are defined, not errors.
    pub fn launch_toward(&mut self, target: Vec2, speed: f32) {
        let delta = target - self.pos;
        let distance = delta.length();
        if distance > 0.0 {
            self.vel = delta / distance * speed;
            self.moving = true;
        }
    }
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Awaiting a ball placement
    Placing,
    /// At least one ball is still moving; placement is locked out
    Settling,
    /// All balls placed and at rest; score is final until reset
    Finished,
}

/// Complete round state (deterministic given seed and command sequence)
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,

    pub target: Ball,
    /// Player balls in placement order
    pub player_balls: Vec<Ball>,
    /// Placements remaining this round
    pub balls_left: u32,
    /// True between a successful `place` and its `commit_launch`
    pending_launch: bool,

    pub phase: RoundPhase,
    pub score: f32,
    /// Monotonic max over all rounds this process; survives `reset`
    pub best_score: f32,
    pub triangle: Option<Triangle>,

    /// Simulation tick counter
    pub time_ticks: u64,
}

impl RoundState {
    /// Create a fresh round with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = Ball::new(Self::random_target_pos(&mut rng, &tuning), BallRole::Target);
        Self {
            seed,
            rng,
            balls_left: tuning.balls_per_round,
            tuning,
            target,
            player_balls: Vec::new(),
            pending_launch: false,
            phase: RoundPhase::Placing,
            score: 0.0,
            best_score: 0.0,
            triangle: None,
            time_ticks: 0,
        }
    }

    /// Spawn position for the target: in bounds with a two-radius wall margin
    fn random_target_pos(rng: &mut Pcg32, tuning: &Tuning) -> Vec2 {
        let margin = tuning.ball_radius * 2.0;
        Vec2::new(
            rng.random_range(margin..=tuning.board_width - margin),
            rng.random_range(margin..=tuning.board_height - margin),
        )
    }

    /// Start a new round: fresh random target, no player balls. Best score
    /// carries over.
    pub fn reset(&mut self) {
        self.target = Ball::new(
            Self::random_target_pos(&mut self.rng, &self.tuning),
            BallRole::Target,
        );
        self.player_balls.clear();
        self.balls_left = self.tuning.balls_per_round;
        self.pending_launch = false;
        self.phase = RoundPhase::Placing;
        self.score = 0.0;
        self.triangle = None;
        log::info!(
            "round reset: target at ({:.1}, {:.1})",
            self.target.pos.x,
            self.target.pos.y
        );
    }

    /// True iff every ball on the board is at rest
    pub fn all_stopped(&self) -> bool {
        !self.target.moving && self.player_balls.iter().all(|b| !b.moving)
    }

    /// Whether the round is currently accepting a placement
    pub fn accepts_placement(&self) -> bool {
        self.phase == RoundPhase::Placing && self.balls_left > 0 && !self.pending_launch
    }

    /// Would a ball placed at `point` be accepted?
    ///
    /// One predicate for both the hover preview and the committed placement:
    /// the point must be on the board and at least one ball diameter away
    /// from the target and every player ball, and the round must be in a
    /// placement window.
    pub fn can_place(&self, point: Vec2) -> bool {
        if !self.accepts_placement() {
            return false;
        }
        let in_board = point.x >= 0.0
            && point.x <= self.tuning.board_width
            && point.y >= 0.0
            && point.y <= self.tuning.board_height;
        if !in_board {
            return false;
        }
        let contact = self.tuning.contact_distance();
        if point.distance(self.target.pos) < contact {
            return false;
        }
        self.player_balls
            .iter()
            .all(|b| point.distance(b.pos) >= contact)
    }

    /// Place a resting player ball at `point` (pointer-down).
    ///
    /// Returns false and changes nothing if the placement is invalid. The
    /// ball does not move until `commit_launch`.
    pub fn place(&mut self, point: Vec2) -> bool {
        if !self.can_place(point) {
            return false;
        }
        self.player_balls.push(Ball::new(point, BallRole::Player));
        self.pending_launch = true;
        log::debug!("placed ball at ({:.1}, {:.1})", point.x, point.y);
        true
    }

    /// Fire the most recently placed ball at the target (pointer-up).
    ///
    /// Consumes one remaining placement and moves the round into `Settling`.
    pub fn commit_launch(&mut self) -> bool {
        if !self.pending_launch {
            return false;
        }
        let target_pos = self.target.pos;
        let speed = self.tuning.initial_speed;
        if let Some(ball) = self.player_balls.last_mut() {
            ball.launch_toward(target_pos, speed);
        }
        self.pending_launch = false;
        self.balls_left -= 1;
        self.phase = RoundPhase::Settling;
        true
    }

    /// One-shot score computation on the edge into `Finished`.
    ///
    /// The triangle is always target + the first two player balls; with
    /// fewer than two the score is 0 and no triangle is recorded.
    pub(super) fn finalize_round(&mut self) {
        if self.player_balls.len() >= 2 {
            let tri = Triangle::new(
                self.target.pos,
                self.player_balls[0].pos,
                self.player_balls[1].pos,
            );
            self.score = tri.area;
            self.triangle = Some(tri);
        } else {
            self.score = 0.0;
            self.triangle = None;
        }
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        log::info!(
            "round finished: score {:.1}, best {:.1}",
            self.score,
            self.best_score
        );
    }

    /// Render-facing snapshot of everything the UI layer draws
    pub fn summary(&self) -> RoundSummary {
        let mut balls = Vec::with_capacity(1 + self.player_balls.len());
        balls.push(self.target);
        balls.extend(self.player_balls.iter().copied());
        RoundSummary {
            phase: self.phase,
            score: self.score,
            best_score: self.best_score,
            balls_left: self.balls_left,
            accepts_placement: self.accepts_placement(),
            ball_radius: self.tuning.ball_radius,
            triangle: self.triangle.clone(),
            balls,
        }
    }
}

/// Snapshot handed to the rendering collaborator once per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub phase: RoundPhase,
    pub score: f32,
    pub best_score: f32,
    pub balls_left: u32,
    pub accepts_placement: bool,
    pub ball_radius: f32,
    pub triangle: Option<Triangle>,
    pub balls: Vec<Ball>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_noop_at_rest() {
        let tuning = Tuning::default();
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), BallRole::Player);
        ball.vel = Vec2::new(5.0, 5.0); // stale velocity, but not moving
        ball.integrate(&tuning);
        assert_eq!(ball.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_integrate_euler_step_and_friction() {
        let tuning = Tuning::default();
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), BallRole::Player);
        ball.vel = Vec2::new(10.0, 0.0);
        ball.moving = true;
        ball.integrate(&tuning);
        assert!((ball.pos.x - 110.0).abs() < 1e-4);
        assert!((ball.vel.x - 10.0 * tuning.friction).abs() < 1e-4);
        assert!(ball.moving);
    }

    #[test]
    fn test_wall_bounce_clamps_and_reflects_one_axis() {
        let tuning = Tuning::default();
        let mut ball = Ball::new(Vec2::new(tuning.ball_radius + 2.0, 300.0), BallRole::Player);
        ball.vel = Vec2::new(-10.0, 3.0);
        ball.moving = true;
        ball.integrate(&tuning);

        // Clamped exactly to the left wall
        assert!((ball.pos.x - tuning.ball_radius).abs() < 1e-4);
        // x reflected and scaled by wall restitution, then friction
        let expected_vx = 10.0 * tuning.wall_restitution * tuning.friction;
        assert!((ball.vel.x - expected_vx).abs() < 1e-4);
        // y untouched by the bounce (friction only)
        assert!((ball.vel.y - 3.0 * tuning.friction).abs() < 1e-4);
    }

    #[test]
    fn test_bottom_wall_uses_board_height() {
        let tuning = Tuning::default();
        let mut ball = Ball::new(
            Vec2::new(400.0, tuning.board_height - tuning.ball_radius - 1.0),
            BallRole::Player,
        );
        ball.vel = Vec2::new(0.0, 8.0);
        ball.moving = true;
        ball.integrate(&tuning);
        assert!((ball.pos.y - (tuning.board_height - tuning.ball_radius)).abs() < 1e-4);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_speed_never_stuck_below_threshold() {
        let tuning = Tuning::default();
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), BallRole::Player);
        ball.vel = Vec2::new(0.2, 0.0);
        ball.moving = true;
        for _ in 0..500 {
            ball.integrate(&tuning);
            let s = ball.speed();
            assert!(
                s == 0.0 || s >= tuning.min_velocity,
                "stuck below threshold at speed {s}"
            );
        }
        assert!(!ball.moving);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_launch_toward_unit_direction() {
        let mut ball = Ball::new(Vec2::new(0.0, 0.0), BallRole::Player);
        ball.launch_toward(Vec2::new(30.0, 40.0), 10.0);
        assert!(ball.moving);
        assert!((ball.vel.x - 6.0).abs() < 1e-4);
        assert!((ball.vel.y - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_launch_is_noop() {
        let mut ball = Ball::new(Vec2::new(50.0, 50.0), BallRole::Player);
        ball.launch_toward(Vec2::new(50.0, 50.0), 10.0);
        assert!(!ball.moving);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_target_spawn_respects_margin() {
        for seed in 0..32 {
            let state = RoundState::new(seed);
            let t = &state.tuning;
            let m = t.ball_radius * 2.0;
            let p = state.target.pos;
            assert!(p.x >= m && p.x <= t.board_width - m);
            assert!(p.y >= m && p.y <= t.board_height - m);
        }
    }

    #[test]
    fn test_placement_overlap_boundary() {
        let mut state = RoundState::new(7);
        let contact = state.tuning.contact_distance();
        let target = state.target.pos;
        // Nudge direction pointing back toward the board interior
        let inward = (Vec2::new(
            state.tuning.board_width / 2.0,
            state.tuning.board_height / 2.0,
        ) - target)
            .normalize_or(Vec2::X);

        // Just inside the contact distance: rejected
        let too_close = target + inward * (contact - 0.01);
        assert!(!state.can_place(too_close));
        assert!(!state.place(too_close));
        assert!(state.player_balls.is_empty());

        // Just outside: accepted
        let ok = target + inward * (contact + 0.01);
        assert!(state.can_place(ok));
        assert!(state.place(ok));
        assert_eq!(state.player_balls.len(), 1);
    }

    #[test]
    fn test_placement_rejected_off_board() {
        let state = RoundState::new(7);
        assert!(!state.can_place(Vec2::new(100.0, state.tuning.board_height + 10.0)));
        assert!(!state.can_place(Vec2::new(-5.0, 100.0)));
    }

    #[test]
    fn test_place_then_place_without_commit_rejected() {
        let mut state = RoundState::new(7);
        let spot = far_spot(&state);
        assert!(state.place(spot));
        // Second placement before committing the first is refused
        assert!(!state.place(spot + Vec2::new(100.0, 0.0)));
        assert!(state.commit_launch());
        assert_eq!(state.balls_left, state.tuning.balls_per_round - 1);
        assert_eq!(state.phase, RoundPhase::Settling);
    }

    #[test]
    fn test_commit_without_place_rejected() {
        let mut state = RoundState::new(7);
        assert!(!state.commit_launch());
        assert_eq!(state.phase, RoundPhase::Placing);
    }

    /// A valid placement point well away from the target
    fn far_spot(state: &RoundState) -> Vec2 {
        let t = &state.tuning;
        let candidates = [
            Vec2::new(60.0, 60.0),
            Vec2::new(t.board_width - 60.0, 60.0),
            Vec2::new(60.0, t.board_height - 60.0),
            Vec2::new(t.board_width - 60.0, t.board_height - 60.0),
        ];
        candidates
            .into_iter()
            .find(|&p| state.can_place(p))
            .expect("some corner must be free")
    }
}
