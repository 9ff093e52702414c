//! The simulation aggregate.
//!
//! [`Garden`] owns every piece of mutable state: controls, stage size, clock,
//! target, swarm, particle emitter and the random streams. Front-ends drive it
//! with [`Garden::resize`], [`Garden::tick`] and [`Garden::apply`] and read
//! frames back through [`Garden::render`].

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::canvas::{self, Canvas, Layers};
use crate::catalog::{self, FormationMeta, SceneMeta, Theme};
use crate::constants::{
    DEFAULT_DAMPING, DEFAULT_FREQUENCY, DEFAULT_SEED, DELTA_TIME, INITIAL_FOLLOWERS,
    MAX_FOLLOWERS, MIN_FOLLOWERS,
};
use crate::controls::{Action, Controls};
use crate::error::GardenError;
use crate::formation::FormationId;
use crate::particles::Emitter;
use crate::stage::Stage;
use crate::swarm::Swarm;
use crate::trajectory::{self, SceneId};

/// Start-up configuration. Numeric fields are clamped when applied.
#[derive(Clone, Debug, PartialEq)]
pub struct GardenSettings {
    pub scene: SceneId,
    pub formation: FormationId,
    pub theme_index: usize,
    pub frequency: f64,
    pub damping: f64,
    pub followers: usize,
    pub auto: bool,
    pub seed: u64,
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            scene: SceneId::Orbit,
            formation: FormationId::Halo,
            theme_index: 0,
            frequency: DEFAULT_FREQUENCY,
            damping: DEFAULT_DAMPING,
            followers: INITIAL_FOLLOWERS,
            auto: true,
            seed: DEFAULT_SEED,
        }
    }
}

pub struct Garden {
    controls: Controls,
    stage: Stage,
    ready: bool,
    elapsed: f64,
    target: DVec2,
    swarm: Swarm,
    emitter: Emitter,
    initial_followers: usize,
    // Separate streams so growing the swarm does not perturb seed spawns
    swarm_rng: StdRng,
    seed_rng: StdRng,
}

impl Garden {
    pub fn new(settings: GardenSettings) -> Result<Self, GardenError> {
        catalog::validate()?;

        let mut controls = Controls::default();
        controls.auto = settings.auto;
        controls.scene = settings.scene;
        controls.formation = settings.formation;
        controls.set_theme_index(settings.theme_index);
        controls.set_frequency(settings.frequency);
        controls.set_damping(settings.damping);

        // Derive independent streams from the base seed
        let stream = |i: u64| {
            let mix = settings.seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            StdRng::seed_from_u64(mix)
        };

        log::info!(
            "[garden] created scene={} formation={} mood={} seed={:#x}",
            settings.scene.key(),
            settings.formation.key(),
            controls.theme().name,
            settings.seed
        );

        Ok(Self {
            swarm: Swarm::new(controls.tuning()),
            controls,
            stage: Stage::default(),
            ready: false,
            elapsed: 0.0,
            target: DVec2::ZERO,
            emitter: Emitter::new(),
            initial_followers: settings.followers.clamp(MIN_FOLLOWERS, MAX_FOLLOWERS),
            swarm_rng: stream(1),
            seed_rng: stream(2),
        })
    }

    /// Apply a terminal size of `columns x rows` cells.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.set_stage(Stage::for_terminal(columns, rows));
    }

    /// Set the drawable stage directly.
    ///
    /// The first non-empty stage centers the target and spawns the initial
    /// swarm there. Later calls only re-clamp the target, and an empty stage
    /// after that is ignored so the last usable size stays in effect.
    pub fn set_stage(&mut self, stage: Stage) {
        if stage.is_empty() && self.ready {
            log::debug!("[garden] ignoring empty {}x{} stage", stage.width, stage.height);
            return;
        }
        self.stage = stage;
        if !self.ready && !stage.is_empty() {
            self.target = stage.center();
            let count = self.initial_followers;
            self.swarm.fill_to(count, self.target, &mut self.swarm_rng);
            self.ready = true;
            log::info!(
                "[garden] ready on {}x{} stage with {} muses",
                stage.width,
                stage.height,
                self.swarm.len()
            );
        }
        self.target = stage.clamp(self.target);
    }

    /// Advance the simulation by one fixed step. Does nothing until ready.
    pub fn tick(&mut self) {
        if !self.ready {
            return;
        }
        self.elapsed += DELTA_TIME;
        if self.controls.auto {
            let scene = self.controls.scene;
            self.target = trajectory::next_target(scene, self.elapsed, self.stage, self.target);
        }
        self.swarm.step_all(
            self.target,
            self.controls.formation,
            self.stage,
            self.elapsed,
            DELTA_TIME,
        );
        self.emitter.step(
            DELTA_TIME,
            self.stage,
            self.controls.theme(),
            self.target,
            &mut self.seed_rng,
        );
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleMode => {
                self.controls.auto = !self.controls.auto;
                log::info!("[garden] mode={}", self.controls.mode_label());
            }
            Action::CycleScene => {
                self.controls.cycle_scene();
                log::info!("[garden] scene={}", self.scene_meta().name);
            }
            Action::CycleFormation => {
                self.controls.cycle_formation();
                log::info!("[garden] formation={}", self.formation_meta().name);
            }
            Action::CycleTheme => {
                self.controls.cycle_theme();
                log::info!("[garden] mood={}", self.theme().name);
            }
            Action::AddFollower => {
                if self.swarm.add(self.target, &mut self.swarm_rng) {
                    log::info!("[garden] muses={}", self.swarm.len());
                }
            }
            Action::RemoveFollower => {
                if self.swarm.remove() {
                    log::info!("[garden] muses={}", self.swarm.len());
                }
            }
            Action::FrequencyUp | Action::FrequencyDown => {
                self.controls.bump_frequency(action == Action::FrequencyUp);
                self.retune();
            }
            Action::DampingUp | Action::DampingDown => {
                self.controls.bump_damping(action == Action::DampingUp);
                self.retune();
            }
            Action::Nudge(direction) => {
                self.controls.auto = false;
                self.target = trajectory::nudge(self.target, direction.delta(), self.stage);
            }
            Action::ToggleHelp => {
                self.controls.show_help = !self.controls.show_help;
            }
        }
    }

    fn retune(&mut self) {
        let tuning = self.controls.tuning();
        self.swarm.retune(tuning);
        log::info!(
            "[garden] retuned freq={:.2} damping={:.2}",
            tuning.frequency,
            tuning.damping
        );
    }

    /// Compose the current frame. Empty until the first valid resize.
    pub fn render(&self) -> Canvas {
        canvas::render(&Layers {
            stage: self.stage,
            theme: self.theme(),
            elapsed: self.elapsed,
            followers: self.swarm.followers(),
            particles: self.emitter.particles(),
            target: self.target,
        })
    }

    /// Labelled status values in display order.
    pub fn status_fields(&self) -> [(&'static str, String); 7] {
        [
            ("scene", self.scene_meta().name.to_string()),
            ("formation", self.formation_meta().name.to_string()),
            ("mood", self.theme().name.to_string()),
            ("mode", self.controls.mode_label().to_string()),
            ("freq", format!("{:.2}", self.controls.frequency())),
            ("damping", format!("{:.2}", self.controls.damping())),
            ("muses", self.swarm.len().to_string()),
        ]
    }

    /// One-line summary, e.g. `scene Ellipse Drift  formation Halo  ...`.
    pub fn status_line(&self) -> String {
        self.status_fields()
            .iter()
            .map(|(label, value)| format!("{label} {value}"))
            .collect::<Vec<_>>()
            .join("  ")
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[inline]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn target(&self) -> DVec2 {
        self.target
    }

    #[inline]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    #[inline]
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn theme(&self) -> &'static Theme {
        self.controls.theme()
    }

    pub fn scene_meta(&self) -> &'static SceneMeta {
        catalog::scene(self.controls.scene)
    }

    pub fn formation_meta(&self) -> &'static FormationMeta {
        catalog::formation(self.controls.formation)
    }
}
