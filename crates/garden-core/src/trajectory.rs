//! Trajectory generator: closed-form target paths, one per scene.
//!
//! Every scene is centered on the stage midpoint with amplitudes scaled to the
//! stage size. [`next_target`] evaluates the active scene at the elapsed time
//! and clamps the result onto the stage; manual nudges share the same clamp.

use std::str::FromStr;

use glam::DVec2;

use crate::catalog;
use crate::error::GardenError;
use crate::noise::value_noise;
use crate::stage::Stage;

/// Identifies which parametric curve drives the chase target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    Orbit,
    Rose,
    Cascade,
    Pulse,
    Wander,
}

impl SceneId {
    pub const ALL: [SceneId; 5] = [
        SceneId::Orbit,
        SceneId::Rose,
        SceneId::Cascade,
        SceneId::Pulse,
        SceneId::Wander,
    ];

    /// Position in [`SceneId::ALL`] and in the scene catalog.
    pub fn index(self) -> usize {
        match self {
            SceneId::Orbit => 0,
            SceneId::Rose => 1,
            SceneId::Cascade => 2,
            SceneId::Pulse => 3,
            SceneId::Wander => 4,
        }
    }

    pub fn from_index(index: usize) -> SceneId {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> SceneId {
        Self::from_index(self.index() + 1)
    }

    /// Short identifier accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            SceneId::Orbit => "orbit",
            SceneId::Rose => "rose",
            SceneId::Cascade => "cascade",
            SceneId::Pulse => "pulse",
            SceneId::Wander => "wander",
        }
    }

    /// Unclamped target position at elapsed time `t` (seconds).
    pub fn position(self, t: f64, stage: Stage) -> DVec2 {
        let w = stage.width_f();
        let h = stage.height_f();
        let c = stage.center();
        match self {
            SceneId::Orbit => {
                let a = w * 0.35;
                let b = h * 0.28;
                let speed = 0.55;
                DVec2::new(
                    c.x + (t * speed).cos() * a + (t * 0.9).cos() * w * 0.05,
                    c.y + (t * speed * 1.2).sin() * b + (t * 0.77).sin() * h * 0.04,
                )
            }
            SceneId::Rose => {
                let k = 5.0;
                let theta = t * 0.8;
                let radius = (0.4 + 0.15 * (t * 0.6).sin()) * (k * theta).sin();
                let r = radius * w;
                DVec2::new(c.x + r * theta.cos(), c.y + r * theta.sin())
            }
            SceneId::Cascade => {
                let slow = (t * 0.3).sin();
                let sway = (t * 1.8).sin();
                let drift = (t * 0.5 + sway * 0.4).sin();
                DVec2::new(
                    c.x + drift * w * 0.25,
                    c.y + ((1.0 + slow) / 2.0) * h * 0.35 + (t * 1.2).sin() * h * 0.06,
                )
            }
            SceneId::Pulse => {
                let theta = t * 1.3;
                let pulse = ((t * 2.4).sin() + 1.0) / 2.0;
                let radius = w * (0.18 + 0.28 * pulse);
                DVec2::new(
                    c.x + radius * theta.cos(),
                    c.y + radius * 0.7 * (theta * 1.4).sin(),
                )
            }
            SceneId::Wander => {
                let n1 = value_noise(t * 0.15, 0.0);
                let n2 = value_noise(0.0, t * 0.12 + 3.7);
                DVec2::new(c.x + n1 * w * 0.4, c.y + n2 * h * 0.35)
            }
        }
    }
}

impl FromStr for SceneId {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = catalog::normalize_name(s);
        SceneId::ALL
            .into_iter()
            .find(|id| {
                wanted == id.key() || wanted == catalog::normalize_name(catalog::scene(*id).name)
            })
            .ok_or_else(|| GardenError::UnknownScene(s.to_string()))
    }
}

/// Evaluate `scene` at `elapsed` seconds and clamp onto the stage. An empty
/// stage leaves `current` where it is.
pub fn next_target(scene: SceneId, elapsed: f64, stage: Stage, current: DVec2) -> DVec2 {
    if stage.is_empty() {
        return current;
    }
    stage.clamp(scene.position(elapsed, stage))
}

/// Move `target` by `delta` cells and clamp onto the stage.
pub fn nudge(target: DVec2, delta: DVec2, stage: Stage) -> DVec2 {
    stage.clamp(target + delta)
}

