// Seed emitter cadence, ballistic integration and pruning.

use garden_core::catalog::THEMES;
use garden_core::constants::{DELTA_TIME, PARTICLE_GRAVITY};
use garden_core::{Emitter, Particle, Rgb, Stage};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still_particle(at: DVec2, ttl: f64) -> Particle {
    Particle::new(at, DVec2::ZERO, ttl, Rgb::WHITE, '*')
}

#[test]
fn particle_lives_exactly_until_ttl() {
    // Tall enough that gravity never carries a seed off stage first
    let stage = Stage::new(80, 200);
    for ttl in [0.1, 0.5, 1.4, 2.3] {
        let mut emitter = Emitter::new();
        emitter.launch(still_particle(DVec2::new(40.0, 2.0), ttl));
        // Accumulate life the same way the particle does
        let mut life = 0.0;
        for tick in 0..400 {
            emitter.integrate(DELTA_TIME, stage);
            life += DELTA_TIME;
            assert_eq!(
                emitter.len() == 1,
                life < ttl,
                "ttl {ttl}: tick {tick} life {life}"
            );
            if emitter.is_empty() {
                break;
            }
        }
        assert!(emitter.is_empty());
    }
}

#[test]
fn integration_is_position_then_velocity() {
    let stage = Stage::new(80, 24);
    let mut emitter = Emitter::new();
    emitter.launch(Particle::new(
        DVec2::new(10.0, 10.0),
        DVec2::new(6.0, -3.0),
        5.0,
        Rgb::WHITE,
        '+',
    ));
    emitter.integrate(0.5, stage);
    let p = &emitter.particles()[0];
    assert_eq!(p.position, DVec2::new(13.0, 8.5));
    assert_eq!(p.velocity, DVec2::new(6.0, -3.0 + PARTICLE_GRAVITY * 0.5));
    assert_eq!(p.life, 0.5);
}

#[test]
fn particles_leaving_the_margin_are_pruned() {
    let stage = Stage::new(20, 10);
    let mut emitter = Emitter::new();
    // Just inside the two-cell margin on the left, drifting out
    emitter.launch(Particle::new(
        DVec2::new(-1.95, 5.0),
        DVec2::new(-6.0, 0.0),
        5.0,
        Rgb::WHITE,
        '*',
    ));
    emitter.launch(still_particle(DVec2::new(10.0, 1.0), 5.0));
    emitter.integrate(DELTA_TIME, stage);
    assert_eq!(emitter.len(), 1);
    assert_eq!(emitter.particles()[0].position.x, 10.0);
}

#[test]
fn spawns_follow_the_seed_interval() {
    let theme = &THEMES[0];
    assert_eq!(theme.seed_interval, 0.28);
    let stage = Stage::new(80, 24);
    let anchor = stage.center();
    let mut rng = StdRng::seed_from_u64(11);
    let mut emitter = Emitter::new();
    for _ in 0..60 {
        emitter.step(DELTA_TIME, stage, theme, anchor, &mut rng);
    }
    // Spawns at ticks 17, 34 and 51; none has expired or left the stage yet
    assert_eq!(emitter.len(), 3);
    for p in emitter.particles() {
        assert_eq!(p.glyph, theme.seed_glyph);
        assert!(p.ttl >= 1.4 && p.ttl < 2.3);
    }
}

#[test]
fn spawn_velocity_ranges() {
    let theme = &THEMES[2];
    let stage = Stage::new(200, 100);
    let mut rng = StdRng::seed_from_u64(5);
    let mut emitter = Emitter::new();
    // One tick per spawn: a full interval each step
    for _ in 0..50 {
        emitter.step(theme.seed_interval, stage, theme, DVec2::new(100.0, 50.0), &mut rng);
        let newest = emitter.particles().last().expect("a seed was spawned");
        // Already integrated once with dt = interval
        let launch = newest.velocity - newest.acceleration * theme.seed_interval;
        assert!(launch.x >= -14.0 && launch.x < 14.0);
        assert!(launch.y <= -6.0 + 1e-9 && launch.y > -12.0 - 1e-9);
    }
}

#[test]
fn empty_stage_does_nothing() {
    let theme = &THEMES[0];
    let mut rng = StdRng::seed_from_u64(1);
    let mut emitter = Emitter::new();
    for _ in 0..600 {
        emitter.step(DELTA_TIME, Stage::new(0, 0), theme, DVec2::ZERO, &mut rng);
    }
    assert!(emitter.is_empty());
}

#[test]
fn glow_fades_over_life() {
    let mut p = still_particle(DVec2::ZERO, 2.0);
    assert_eq!(p.glow(), 1.0);
    p.life = 1.0;
    assert!((p.glow() - 0.5).abs() < 1e-12);
    p.life = 3.0;
    assert_eq!(p.glow(), 0.0);
}
