//! Particle emitter: short-lived ballistic seeds launched from the target.

use glam::DVec2;
use rand::Rng;

use crate::catalog::Theme;
use crate::color::Rgb;
use crate::constants::{
    PARTICLE_GRAVITY, PARTICLE_LIFT_MIN, PARTICLE_LIFT_SPAN, PARTICLE_MARGIN, PARTICLE_SPREAD_X,
    PARTICLE_TTL_MIN, PARTICLE_TTL_SPAN,
};
use crate::stage::Stage;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub life: f64,
    pub ttl: f64,
    pub color: Rgb,
    pub glyph: char,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, ttl: f64, color: Rgb, glyph: char) -> Self {
        Self {
            position,
            velocity,
            acceleration: DVec2::new(0.0, PARTICLE_GRAVITY),
            life: 0.0,
            ttl,
            color,
            glyph,
        }
    }

    /// Explicit Euler step: position first, then velocity.
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.velocity += self.acceleration * dt;
        self.life += dt;
    }

    /// Remaining glow in [0, 1]: 1 at birth, 0 at end of life.
    #[inline]
    pub fn glow(&self) -> f64 {
        if self.ttl <= 0.0 {
            return 0.0;
        }
        (1.0 - self.life / self.ttl).clamp(0.0, 1.0)
    }

    #[inline]
    fn is_alive(&self, stage: Stage) -> bool {
        self.life < self.ttl && stage.contains_with_margin(self.position, PARTICLE_MARGIN)
    }
}

/// Owns the live particle set and the spawn accumulator.
#[derive(Clone, Debug, Default)]
pub struct Emitter {
    particles: Vec<Particle>,
    accumulator: f64,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Insert a particle directly, bypassing the spawn cadence.
    pub fn launch(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// One tick: maybe spawn at `anchor`, then integrate and prune.
    ///
    /// An empty stage does nothing at all, so the accumulator does not build
    /// up while the terminal is too small.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        stage: Stage,
        theme: &Theme,
        anchor: DVec2,
        rng: &mut R,
    ) {
        if stage.is_empty() {
            return;
        }
        self.accumulator += dt;
        if self.accumulator >= theme.seed_interval {
            self.spawn(theme, anchor, rng);
            self.accumulator %= theme.seed_interval;
        }
        self.integrate(dt, stage);
    }

    /// Advance every particle and keep only the live ones, in one pass.
    pub fn integrate(&mut self, dt: f64, stage: Stage) {
        self.particles.retain_mut(|p| {
            p.integrate(dt);
            p.is_alive(stage)
        });
    }

    fn spawn<R: Rng + ?Sized>(&mut self, theme: &Theme, anchor: DVec2, rng: &mut R) {
        let velocity = DVec2::new(
            (rng.gen::<f64>() * 2.0 - 1.0) * PARTICLE_SPREAD_X,
            -PARTICLE_LIFT_MIN - rng.gen::<f64>() * PARTICLE_LIFT_SPAN,
        );
        let ttl = PARTICLE_TTL_MIN + rng.gen::<f64>() * PARTICLE_TTL_SPAN;
        let color = theme.color_at(rng.gen::<f64>());
        self.particles
            .push(Particle::new(anchor, velocity, ttl, color, theme.seed_glyph));
        log::trace!("[seeds] spawned, {} live", self.particles.len());
    }
}
