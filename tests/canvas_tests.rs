// Layered canvas: pass order, priority overwrite and per-layer styling.

use garden_core::canvas::{render, Layers};
use garden_core::catalog::THEMES;
use garden_core::color::blend;
use garden_core::constants::{
    DELTA_TIME, HEAD_GLYPH, PRIORITY_BACKDROP, PRIORITY_HEAD, PRIORITY_PARTICLE, PRIORITY_TARGET,
    PRIORITY_TRAIL, TARGET_GLYPH,
};
use garden_core::{Canvas, Cell, FormationId, Particle, Rgb, SpringTuning, Stage, Swarm};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn stepped_swarm(stage: Stage, ticks: usize) -> Swarm {
    let mut rng = StdRng::seed_from_u64(21);
    let mut swarm = Swarm::new(SpringTuning {
        frequency: 7.2,
        damping: 0.22,
    });
    swarm.fill_to(12, stage.center(), &mut rng);
    for tick in 1..=ticks {
        let t = tick as f64 * DELTA_TIME;
        let target = DVec2::new(
            stage.center().x + (t * 1.7).cos() * 8.0,
            stage.center().y + (t * 1.1).sin() * 3.0,
        );
        swarm.step_all(target, FormationId::Bloom, stage, t, DELTA_TIME);
    }
    swarm
}

fn cell_of(p: DVec2, stage: Stage) -> Option<(usize, usize)> {
    let (x, y) = (p.x.round(), p.y.round());
    (x >= 0.0 && y >= 0.0 && x < stage.width as f64 && y < stage.height as f64)
        .then(|| (x as usize, y as usize))
}

#[test]
fn cell_priority_is_max_of_painters() {
    let stage = Stage::new(30, 12);
    let swarm = stepped_swarm(stage, 90);
    let particles: Vec<Particle> = (0..8)
        .map(|i| {
            Particle::new(
                DVec2::new(3.0 + i as f64 * 3.4, 2.0 + (i % 4) as f64 * 2.6),
                DVec2::ZERO,
                2.0,
                Rgb::from_u32(0xFF8BD5),
                '*',
            )
        })
        .collect();
    let target = swarm.followers()[0].position;

    for theme in THEMES.iter() {
        let canvas = render(&Layers {
            stage,
            theme,
            elapsed: 1.5,
            followers: swarm.followers(),
            particles: &particles,
            target,
        });

        let mut expected = vec![PRIORITY_BACKDROP; 30 * 12];
        let mut bump = |p: DVec2, prio: u8| {
            if let Some((x, y)) = cell_of(p, stage) {
                let slot = &mut expected[y * 30 + x];
                *slot = (*slot).max(prio);
            }
        };
        for f in swarm.followers() {
            let n = f.trail.len();
            for (i, p) in f.trail.iter().enumerate() {
                bump(*p, if i + 1 == n { PRIORITY_HEAD } else { PRIORITY_TRAIL });
            }
        }
        for p in &particles {
            bump(p.position, PRIORITY_PARTICLE);
        }
        bump(target, PRIORITY_TARGET);

        for y in 0..12 {
            for x in 0..30 {
                let cell = canvas.get(x, y).expect("in bounds");
                assert_eq!(cell.priority, expected[y * 30 + x], "{} at ({x},{y})", theme.name);
            }
        }
    }
}

#[test]
fn equal_priority_goes_to_later_paint() {
    let mut canvas = Canvas::new(4, 4);
    let first = Cell {
        glyph: 'a',
        priority: PRIORITY_TRAIL,
        ..Cell::default()
    };
    let second = Cell {
        glyph: 'b',
        priority: PRIORITY_TRAIL,
        ..Cell::default()
    };
    let lower = Cell {
        glyph: 'c',
        priority: PRIORITY_BACKDROP,
        ..Cell::default()
    };
    assert!(canvas.paint(1, 1, first));
    assert!(canvas.paint(1, 1, second));
    assert!(!canvas.paint(1, 1, lower));
    assert_eq!(canvas.get(1, 1).map(|c| c.glyph), Some('b'));
    // Out of bounds is silently dropped
    assert!(!canvas.paint(4, 0, first));
    assert!(canvas.get(4, 0).is_none());
}

#[test]
fn backdrop_uses_theme_glyphs_and_background() {
    let stage = Stage::new(25, 8);
    let theme = &THEMES[3];
    let canvas = render(&Layers {
        stage,
        theme,
        elapsed: 4.0,
        followers: &[],
        particles: &[],
        target: DVec2::new(-10.0, -10.0),
    });
    assert_eq!(canvas.width(), 25);
    assert_eq!(canvas.height(), 8);
    assert_eq!(canvas.rows().count(), 8);
    for row in canvas.rows() {
        for cell in row {
            assert!(theme.backdrop_glyphs.contains(&cell.glyph));
            assert_eq!(cell.bg, theme.background);
            assert!(!cell.bold);
        }
    }
}

#[test]
fn tie_dye_shader_overrides_background() {
    let stage = Stage::new(40, 16);
    let theme = THEMES
        .iter()
        .find(|t| t.shader.is_some())
        .expect("a shaded theme");
    let canvas = render(&Layers {
        stage,
        theme,
        elapsed: 2.0,
        followers: &[],
        particles: &[],
        target: DVec2::new(-10.0, -10.0),
    });
    let distinct_bg = canvas
        .rows()
        .flatten()
        .map(|c| c.bg)
        .filter(|bg| *bg != theme.background)
        .count();
    assert!(distinct_bg > 0, "shader should tint the background");
    for cell in canvas.rows().flatten() {
        assert!(theme.backdrop_glyphs.contains(&cell.glyph));
    }
}

#[test]
fn target_marker_keeps_background() {
    let stage = Stage::new(20, 10);
    let theme = &THEMES[0];
    let canvas = render(&Layers {
        stage,
        theme,
        elapsed: 0.0,
        followers: &[],
        particles: &[],
        target: DVec2::new(4.4, 6.6),
    });
    let cell = canvas.get(4, 7).expect("in bounds");
    assert_eq!(cell.glyph, TARGET_GLYPH);
    assert_eq!(cell.fg, theme.accent);
    assert_eq!(cell.bg, theme.background);
    assert!(cell.bold);
}

#[test]
fn trail_head_is_marked() {
    let stage = Stage::new(40, 20);
    let swarm = stepped_swarm(stage, 5);
    let theme = &THEMES[0];
    let canvas = render(&Layers {
        stage,
        theme,
        elapsed: 5.0 * DELTA_TIME,
        followers: swarm.followers(),
        particles: &[],
        target: DVec2::new(-10.0, -10.0),
    });
    let heads = canvas
        .rows()
        .flatten()
        .filter(|c| c.glyph == HEAD_GLYPH)
        .count();
    assert!(heads >= 1);
    for cell in canvas.rows().flatten() {
        if cell.glyph == HEAD_GLYPH {
            assert_eq!(cell.priority, PRIORITY_HEAD);
            assert!(cell.bold);
        }
    }
}

#[test]
fn particle_color_fades_into_background() {
    let stage = Stage::new(10, 10);
    let theme = &THEMES[0];
    let color = Rgb::from_u32(0x8D73FF);
    let fresh = Particle::new(DVec2::new(2.0, 2.0), DVec2::ZERO, 2.0, color, '*');
    let mut spent = Particle::new(DVec2::new(7.0, 7.0), DVec2::ZERO, 2.0, color, '*');
    spent.life = 2.0;
    let canvas = render(&Layers {
        stage,
        theme,
        elapsed: 0.0,
        followers: &[],
        particles: &[fresh, spent],
        target: DVec2::new(-10.0, -10.0),
    });

    let bright = canvas.get(2, 2).expect("in bounds");
    assert_eq!(bright.fg, blend(color, theme.color_at(0.98), 0.35));
    assert_eq!(bright.priority, PRIORITY_PARTICLE);
    assert!(bright.bold);

    let faded = canvas.get(7, 7).expect("in bounds");
    assert_eq!(faded.fg, faded.bg);
    assert_eq!(faded.bg, theme.background);
}

#[test]
fn empty_stage_renders_nothing() {
    let canvas = render(&Layers {
        stage: Stage::new(0, 5),
        theme: &THEMES[0],
        elapsed: 0.0,
        followers: &[],
        particles: &[],
        target: DVec2::ZERO,
    });
    assert!(canvas.is_empty());
    assert_eq!(canvas.rows().count(), 0);
}
