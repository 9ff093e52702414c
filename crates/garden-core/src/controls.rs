//! Mode and parameter state mutated by input actions.

use glam::DVec2;

use crate::catalog::{self, Theme};
use crate::constants::{
    DAMPING_STEP, DEFAULT_DAMPING, DEFAULT_FREQUENCY, FREQUENCY_STEP, MAX_DAMPING, MAX_FREQUENCY,
    MIN_DAMPING, MIN_FREQUENCY, NUDGE_STEP,
};
use crate::formation::FormationId;
use crate::spring::SpringTuning;
use crate::trajectory::SceneId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Unit step in screen space (y grows downward).
    pub fn delta(self) -> DVec2 {
        match self {
            Direction::North => DVec2::new(0.0, -NUDGE_STEP),
            Direction::South => DVec2::new(0.0, NUDGE_STEP),
            Direction::West => DVec2::new(-NUDGE_STEP, 0.0),
            Direction::East => DVec2::new(NUDGE_STEP, 0.0),
        }
    }
}

/// Everything the keyboard can ask of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleMode,
    CycleScene,
    CycleFormation,
    CycleTheme,
    AddFollower,
    RemoveFollower,
    FrequencyUp,
    FrequencyDown,
    DampingUp,
    DampingDown,
    Nudge(Direction),
    ToggleHelp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    pub auto: bool,
    pub scene: SceneId,
    pub formation: FormationId,
    theme_index: usize,
    frequency: f64,
    damping: f64,
    pub show_help: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            auto: true,
            scene: SceneId::Orbit,
            formation: FormationId::Halo,
            theme_index: 0,
            frequency: DEFAULT_FREQUENCY,
            damping: DEFAULT_DAMPING,
            show_help: false,
        }
    }
}

impl Controls {
    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[inline]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[inline]
    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn theme(&self) -> &'static Theme {
        catalog::theme(self.theme_index)
    }

    pub fn tuning(&self) -> SpringTuning {
        SpringTuning {
            frequency: self.frequency,
            damping: self.damping,
        }
    }

    pub fn set_frequency(&mut self, value: f64) {
        self.frequency = clamp_or(value, MIN_FREQUENCY, MAX_FREQUENCY, DEFAULT_FREQUENCY);
    }

    pub fn set_damping(&mut self, value: f64) {
        self.damping = clamp_or(value, MIN_DAMPING, MAX_DAMPING, DEFAULT_DAMPING);
    }

    pub fn set_theme_index(&mut self, index: usize) {
        self.theme_index = index % catalog::THEMES.len();
    }

    pub fn cycle_scene(&mut self) {
        self.scene = self.scene.next();
    }

    pub fn cycle_formation(&mut self) {
        self.formation = self.formation.next();
    }

    pub fn cycle_theme(&mut self) {
        self.set_theme_index(self.theme_index + 1);
    }

    pub fn bump_frequency(&mut self, up: bool) {
        let step = if up { FREQUENCY_STEP } else { -FREQUENCY_STEP };
        self.set_frequency(self.frequency + step);
    }

    pub fn bump_damping(&mut self, up: bool) {
        let step = if up { DAMPING_STEP } else { -DAMPING_STEP };
        self.set_damping(self.damping + step);
    }

    pub fn mode_label(&self) -> &'static str {
        if self.auto {
            "auto"
        } else {
            "manual"
        }
    }
}

/// Clamp into `[min, max]`; NaN falls back to `default`.
#[inline]
fn clamp_or(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_nan() {
        default
    } else {
        value.clamp(min, max)
    }
}
