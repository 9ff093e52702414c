// Command-line parsing into garden settings.

use clap::Parser;
use garden_core::constants::{DEFAULT_DAMPING, DEFAULT_FREQUENCY, INITIAL_FOLLOWERS};
use garden_core::{FormationId, SceneId};
use harmonic_garden::cli::{parse_theme, Args};

fn parse(args: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("harmonic-garden").chain(args.iter().copied()))
}

#[test]
fn defaults() {
    let args = parse(&[]).expect("no flags is valid");
    assert_eq!(args.scene, SceneId::Orbit);
    assert_eq!(args.formation, FormationId::Halo);
    assert_eq!(args.theme, 0);
    assert_eq!(args.frequency, DEFAULT_FREQUENCY);
    assert_eq!(args.damping, DEFAULT_DAMPING);
    assert_eq!(args.followers, INITIAL_FOLLOWERS);
    assert_eq!(args.seed, None);
    assert!(!args.manual);
    assert!(args.log_file.is_none());

    let settings = args.to_settings();
    assert!(settings.auto);
}

#[test]
fn every_flag() {
    let args = parse(&[
        "--scene",
        "Pulse Spiral",
        "--formation",
        "helix",
        "--theme",
        "deep current",
        "--frequency",
        "3.5",
        "--damping",
        "1.1",
        "--followers",
        "12",
        "--seed",
        "77",
        "--manual",
        "--log-file",
        "garden.log",
    ])
    .expect("all flags are valid");
    let settings = args.to_settings();
    assert_eq!(settings.scene, SceneId::Pulse);
    assert_eq!(settings.formation, FormationId::Helix);
    assert_eq!(settings.theme_index, 3);
    assert_eq!(settings.frequency, 3.5);
    assert_eq!(settings.damping, 1.1);
    assert_eq!(settings.followers, 12);
    assert_eq!(settings.seed, 77);
    assert!(!settings.auto);
    assert_eq!(
        args.log_file.as_deref(),
        Some(std::path::Path::new("garden.log"))
    );
}

#[test]
fn explicit_seed_is_stable() {
    let a = parse(&["--seed", "5"]).expect("valid").to_settings();
    let b = parse(&["--seed", "5"]).expect("valid").to_settings();
    assert_eq!(a, b);
}

#[test]
fn theme_accepts_index_or_name() {
    assert_eq!(parse_theme("2"), Ok(2));
    assert_eq!(parse_theme("Cosmic Tie-Dye"), Ok(1));
    assert!(parse_theme("4").is_err());
    assert!(parse_theme("sepia").is_err());
}

#[test]
fn bad_values_are_rejected() {
    assert!(parse(&["--scene", "spiral"]).is_err());
    assert!(parse(&["--formation", "grid"]).is_err());
    assert!(parse(&["--theme", "9"]).is_err());
    assert!(parse(&["--followers", "-1"]).is_err());
    assert!(parse(&["--frequency", "fast"]).is_err());
}
