use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use garden_core::catalog::{self, THEMES};
use garden_core::constants::{DEFAULT_DAMPING, DEFAULT_FREQUENCY, DEFAULT_SEED, INITIAL_FOLLOWERS};
use garden_core::{FormationId, GardenError, GardenSettings, SceneId};

/// Spring-damped muses drifting over procedural backdrops in your terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "harmonic-garden", version)]
pub struct Args {
    /// Starting scene: orbit, rose, cascade, pulse or wander (display names work too)
    #[arg(long, default_value = "orbit")]
    pub scene: SceneId,

    /// Starting formation: halo, ribbon, bloom or helix
    #[arg(long, default_value = "halo")]
    pub formation: FormationId,

    /// Starting mood, by name ("deep current") or catalog index
    #[arg(long, default_value = "0", value_parser = parse_theme)]
    pub theme: usize,

    /// Spring angular frequency, clamped to [1, 14]
    #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
    pub frequency: f64,

    /// Spring damping ratio, clamped to [0.02, 3.2]
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,

    /// Initial number of muses, clamped to [3, 30]
    #[arg(long, default_value_t = INITIAL_FOLLOWERS)]
    pub followers: usize,

    /// RNG seed; defaults to one derived from the clock
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start in manual mode (arrows steer the target)
    #[arg(long)]
    pub manual: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Accept a theme index or a theme name.
pub fn parse_theme(value: &str) -> Result<usize, GardenError> {
    match value.trim().parse::<usize>() {
        Ok(index) if index < THEMES.len() => Ok(index),
        Ok(_) => Err(GardenError::UnknownTheme(value.to_string())),
        Err(_) => catalog::theme_index_by_name(value),
    }
}

impl Args {
    pub fn to_settings(&self) -> GardenSettings {
        GardenSettings {
            scene: self.scene,
            formation: self.formation,
            theme_index: self.theme,
            frequency: self.frequency,
            damping: self.damping,
            followers: self.followers,
            auto: !self.manual,
            seed: self.seed.unwrap_or_else(clock_seed),
        }
    }
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    DEFAULT_SEED ^ nanos
}
