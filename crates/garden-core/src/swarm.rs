//! Follower swarm: spring-damped agents chasing the target in formation.
//!
//! Each follower owns a pair of per-axis springs and a bounded trail. Per tick
//! it advances its phase, evaluates its formation offset around the shared
//! target, springs toward the clamped result and records the new position.
//! Followers are appended and removed at the tail only, so `order` never
//! changes once assigned.

use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::{DELTA_TIME, MAX_FOLLOWERS, MAX_TRAIL, MIN_FOLLOWERS};
use crate::formation::{wrap_phase, FormationId, OffsetInput};
use crate::spring::{Spring, SpringTuning};
use crate::stage::Stage;

pub type Trail = SmallVec<[DVec2; MAX_TRAIL]>;

#[derive(Clone, Debug)]
pub struct Follower {
    pub order: usize,
    pub position: DVec2,
    pub velocity: DVec2,
    pub phase: f64,
    pub angular_speed: f64,
    pub base_radius: f64,
    pub palette_seed: f64,
    pub offset_seed: f64,
    pub trail: Trail,
    spring_x: Spring,
    spring_y: Spring,
}

/// Shared per-tick inputs for [`Follower::step`].
#[derive(Clone, Copy, Debug)]
pub struct StepContext {
    pub target: DVec2,
    pub formation: FormationId,
    pub stage: Stage,
    pub elapsed: f64,
    pub dt: f64,
    pub count: usize,
}

impl Follower {
    /// Create follower `order` resting at `at` with a one-point trail.
    ///
    /// Draws five uniforms from `rng` in a fixed order: radius jitter, speed,
    /// phase, palette seed, offset seed.
    pub fn spawn<R: Rng + ?Sized>(
        order: usize,
        at: DVec2,
        tuning: SpringTuning,
        rng: &mut R,
    ) -> Self {
        let ord = order as f64;
        let base_radius = (5.0 + ord * 1.35) * (0.7 + rng.gen::<f64>() * 0.6);
        let angular_speed = 0.3 + rng.gen::<f64>() * 0.6 + ord * 0.03;
        let phase = rng.gen::<f64>() * std::f64::consts::TAU;
        let palette_seed = rng.gen::<f64>();
        let offset_seed = rng.gen::<f64>();
        let spring = tuning.spring(DELTA_TIME);
        let mut trail = Trail::new();
        trail.push(at);
        Self {
            order,
            position: at,
            velocity: DVec2::ZERO,
            phase,
            angular_speed,
            base_radius,
            palette_seed,
            offset_seed,
            trail,
            spring_x: spring,
            spring_y: spring,
        }
    }

    /// Re-derive both springs; position, velocity and trail are untouched.
    pub fn retune(&mut self, tuning: SpringTuning) {
        let spring = tuning.spring(DELTA_TIME);
        self.spring_x = spring;
        self.spring_y = spring;
    }

    pub fn step(&mut self, ctx: &StepContext) {
        let count = ctx.count.max(1);
        let rate = ctx.formation.phase_rate();
        self.phase = wrap_phase(self.phase + self.angular_speed * rate * ctx.dt);
        let offset = ctx.formation.offset(OffsetInput {
            order: self.order,
            phase: self.phase,
            radius: self.base_radius,
            elapsed: ctx.elapsed,
            count,
            stage: ctx.stage,
        });

        let goal = ctx.stage.clamp(ctx.target + offset);
        let (x, vx) = self.spring_x.update(self.position.x, self.velocity.x, goal.x);
        let (y, vy) = self.spring_y.update(self.position.y, self.velocity.y, goal.y);
        self.velocity = DVec2::new(vx, vy);
        self.position = ctx.stage.clamp(DVec2::new(x, y));

        // Drop the oldest first so the trail never spills off the inline buffer
        if self.trail.len() >= MAX_TRAIL {
            let excess = self.trail.len() + 1 - MAX_TRAIL;
            _ = self.trail.drain(..excess);
        }
        self.trail.push(self.position);
    }

    /// Newest trail point, which always equals `position` after a step.
    #[inline]
    pub fn head(&self) -> Option<DVec2> {
        self.trail.last().copied()
    }
}

/// Ordered set of followers sharing one spring tuning.
#[derive(Clone, Debug)]
pub struct Swarm {
    followers: Vec<Follower>,
    tuning: SpringTuning,
}

impl Swarm {
    pub fn new(tuning: SpringTuning) -> Self {
        Self {
            followers: Vec::with_capacity(MAX_FOLLOWERS),
            tuning,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.followers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    #[inline]
    pub fn followers(&self) -> &[Follower] {
        &self.followers
    }

    #[inline]
    pub fn tuning(&self) -> SpringTuning {
        self.tuning
    }

    /// Append a follower at `at`. Returns false once the swarm is full.
    pub fn add<R: Rng + ?Sized>(&mut self, at: DVec2, rng: &mut R) -> bool {
        if self.followers.len() >= MAX_FOLLOWERS {
            return false;
        }
        let order = self.followers.len();
        self.followers.push(Follower::spawn(order, at, self.tuning, rng));
        true
    }

    /// Grow to `count` followers (capped at the maximum).
    pub fn fill_to<R: Rng + ?Sized>(&mut self, count: usize, at: DVec2, rng: &mut R) {
        while self.followers.len() < count.min(MAX_FOLLOWERS) {
            if !self.add(at, rng) {
                break;
            }
        }
    }

    /// Drop the newest follower. Returns false at the minimum size.
    pub fn remove(&mut self) -> bool {
        if self.followers.len() <= MIN_FOLLOWERS {
            return false;
        }
        _ = self.followers.pop();
        true
    }

    pub fn retune(&mut self, tuning: SpringTuning) {
        self.tuning = tuning;
        for follower in &mut self.followers {
            follower.retune(tuning);
        }
    }

    /// Step every follower against the same target and formation.
    pub fn step_all(
        &mut self,
        target: DVec2,
        formation: FormationId,
        stage: Stage,
        elapsed: f64,
        dt: f64,
    ) {
        let ctx = StepContext {
            target,
            formation,
            stage,
            elapsed,
            dt,
            count: self.followers.len(),
        };
        for follower in &mut self.followers {
            follower.step(&ctx);
        }
    }
}
