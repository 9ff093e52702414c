//! Formation offsets: how each follower arranges itself around the target.
//!
//! A formation is a pure function from a follower's identity (order, phase,
//! radius), global time and swarm size to a displacement added to the shared
//! target. The spring then chases `target + offset`.

use std::f64::consts::{PI, TAU};
use std::str::FromStr;

use glam::DVec2;

use crate::catalog;
use crate::error::GardenError;
use crate::stage::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormationId {
    Halo,
    Ribbon,
    Bloom,
    Helix,
}

/// Inputs to an offset evaluation. `phase` is the follower's phase after it
/// has been advanced for this tick.
#[derive(Clone, Copy, Debug)]
pub struct OffsetInput {
    pub order: usize,
    pub phase: f64,
    pub radius: f64,
    pub elapsed: f64,
    pub count: usize,
    pub stage: Stage,
}

impl FormationId {
    pub const ALL: [FormationId; 4] = [
        FormationId::Halo,
        FormationId::Ribbon,
        FormationId::Bloom,
        FormationId::Helix,
    ];

    pub fn index(self) -> usize {
        match self {
            FormationId::Halo => 0,
            FormationId::Ribbon => 1,
            FormationId::Bloom => 2,
            FormationId::Helix => 3,
        }
    }

    pub fn from_index(index: usize) -> FormationId {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> FormationId {
        Self::from_index(self.index() + 1)
    }

    pub fn key(self) -> &'static str {
        match self {
            FormationId::Halo => "halo",
            FormationId::Ribbon => "ribbon",
            FormationId::Bloom => "bloom",
            FormationId::Helix => "helix",
        }
    }

    /// Multiplier on a follower's angular speed while in this formation.
    pub fn phase_rate(self) -> f64 {
        match self {
            FormationId::Halo => 1.0,
            FormationId::Ribbon => 0.6,
            FormationId::Bloom => 1.2,
            FormationId::Helix => 1.0,
        }
    }

    pub fn offset(self, input: OffsetInput) -> DVec2 {
        let t = input.elapsed;
        let order = input.order as f64;
        let phase = input.phase;
        match self {
            FormationId::Halo => {
                let ellipse = 0.55 + 0.25 * (t * 0.8 + order * 0.3).sin();
                DVec2::new(
                    phase.cos() * input.radius * ellipse,
                    phase.sin() * input.radius * 0.6 * ellipse,
                )
            }
            FormationId::Ribbon => {
                let wave = (t * 1.4 + order * 0.7).sin();
                let tail = -order * (1.9 + 0.4 * (t * 0.6).sin());
                DVec2::new(
                    tail + (phase + wave).cos() * 2.4,
                    wave * input.stage.height_f() * 0.09,
                )
            }
            FormationId::Bloom => {
                let petals = (3 + input.order % 5) as f64;
                let bloom = ((t * 0.7 + petals).sin() + 1.0) / 2.0;
                let radius = input.radius * (0.6 + 0.5 * bloom);
                DVec2::new(
                    (phase * petals).cos() * radius,
                    (phase * petals).sin() * radius * 0.6,
                )
            }
            FormationId::Helix => {
                let span = input.count.saturating_sub(1).max(1) as f64;
                let depth = order / span - 0.5;
                let helix_radius = input.stage.width_f() * 0.16;
                DVec2::new(
                    (t * 0.9 + depth * PI * 2.0).sin() * helix_radius
                        + (phase + depth * 6.0).cos() * 3.0,
                    depth * input.stage.height_f() * 0.6 + (t * 1.6 + depth * 4.0).cos() * 4.0,
                )
            }
        }
    }
}

impl FromStr for FormationId {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = catalog::normalize_name(s);
        FormationId::ALL
            .into_iter()
            .find(|id| {
                wanted == id.key()
                    || wanted == catalog::normalize_name(catalog::formation(*id).name)
            })
            .ok_or_else(|| GardenError::UnknownFormation(s.to_string()))
    }
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    phase.rem_euclid(TAU)
}
