//! Layered cell canvas.
//!
//! A frame is composed in four passes over a row-major grid: backdrop, trails,
//! particles, target. Every cell remembers the priority of its last accepted
//! paint; a new paint lands when its priority is at least the current one, so
//! equal priorities go to whichever pass (or follower) painted later.

use glam::DVec2;

use crate::catalog::Theme;
use crate::color::{blend, Rgb};
use crate::constants::{
    HEAD_GLYPH, PRIORITY_BACKDROP, PRIORITY_HEAD, PRIORITY_PARTICLE, PRIORITY_TARGET,
    PRIORITY_TRAIL, TARGET_GLYPH, TRAIL_STRENGTH_EXPONENT,
};
use crate::particles::Particle;
use crate::shader::backdrop_intensity;
use crate::stage::Stage;
use crate::swarm::Follower;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub priority: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::default(),
            bold: false,
            priority: PRIORITY_BACKDROP,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Unconditional write, used by the backdrop pass.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Priority-gated write. Returns whether the paint landed.
    pub fn paint(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) if cell.priority >= self.cells[i].priority => {
                self.cells[i] = cell;
                true
            }
            _ => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, and an empty grid has no rows anyway
        self.cells.chunks(self.width.max(1))
    }
}

/// Everything one frame needs, borrowed from the simulation.
#[derive(Clone, Copy)]
pub struct Layers<'a> {
    pub stage: Stage,
    pub theme: &'a Theme,
    pub elapsed: f64,
    pub followers: &'a [Follower],
    pub particles: &'a [Particle],
    pub target: DVec2,
}

/// Compose a full frame.
pub fn render(layers: &Layers<'_>) -> Canvas {
    let stage = layers.stage;
    let mut canvas = Canvas::new(stage.width as usize, stage.height as usize);
    if canvas.is_empty() {
        return canvas;
    }
    paint_backdrop(&mut canvas, layers);
    paint_trails(&mut canvas, layers);
    paint_particles(&mut canvas, layers);
    paint_target(&mut canvas, layers);
    canvas
}

fn paint_backdrop(canvas: &mut Canvas, layers: &Layers<'_>) {
    let theme = layers.theme;
    let glyphs = theme.backdrop_glyphs;
    let t = layers.elapsed;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let (xf, yf) = (x as f64, y as f64);
            let intensity = backdrop_intensity(xf, yf, t);
            let mut glyph = if glyphs.is_empty() {
                ' '
            } else {
                glyphs[(intensity * glyphs.len() as f64) as usize % glyphs.len()]
            };
            let mut fg = theme.color_at(0.15 + intensity * 0.35);
            let mut bg = theme.background;
            if let Some(shader) = theme.shader {
                let (w, h) = (layers.stage.width, layers.stage.height);
                let sample = shader.sample(xf, yf, t, w, h, theme);
                glyph = sample.glyph.unwrap_or(glyph);
                fg = sample.fg.unwrap_or(fg);
                bg = sample.bg.unwrap_or(bg);
            }
            canvas.set(
                x,
                y,
                Cell {
                    glyph,
                    fg,
                    bg,
                    bold: false,
                    priority: PRIORITY_BACKDROP,
                },
            );
        }
    }
}

fn paint_trails(canvas: &mut Canvas, layers: &Layers<'_>) {
    let theme = layers.theme;
    let glyphs = theme.trail_glyphs;
    for follower in layers.followers {
        let len = follower.trail.len();
        for (i, point) in follower.trail.iter().enumerate() {
            let Some((x, y)) = layers.stage.cell_of(*point) else {
                continue;
            };
            let Some(under) = canvas.get(x, y).copied() else {
                continue;
            };
            let ratio = (i + 1) as f64 / len as f64;
            let strength = ratio.powf(TRAIL_STRENGTH_EXPONENT);
            let mix = (strength * 0.8 + follower.palette_seed * 0.3).clamp(0.0, 1.0);
            let fg = theme.color_at(mix);
            let is_head = i + 1 == len;
            let glyph = if is_head {
                HEAD_GLYPH
            } else if glyphs.is_empty() {
                ' '
            } else {
                glyphs[((strength * glyphs.len() as f64) as usize).min(glyphs.len() - 1)]
            };
            _ = canvas.paint(
                x,
                y,
                Cell {
                    glyph,
                    fg,
                    bg: under.bg,
                    bold: i + 2 >= len,
                    priority: if is_head { PRIORITY_HEAD } else { PRIORITY_TRAIL },
                },
            );
        }
    }
}

fn paint_particles(canvas: &mut Canvas, layers: &Layers<'_>) {
    let sparkle_tip = layers.theme.color_at(0.98);
    for particle in layers.particles {
        let Some((x, y)) = layers.stage.cell_of(particle.position) else {
            continue;
        };
        let Some(under) = canvas.get(x, y).copied() else {
            continue;
        };
        let glow = particle.glow();
        let sparkle = blend(particle.color, sparkle_tip, 1.0 - glow * 0.65);
        let fg = blend(sparkle, under.bg, 1.0 - glow);
        _ = canvas.paint(
            x,
            y,
            Cell {
                glyph: particle.glyph,
                fg,
                bg: under.bg,
                bold: true,
                priority: PRIORITY_PARTICLE,
            },
        );
    }
}

fn paint_target(canvas: &mut Canvas, layers: &Layers<'_>) {
    let Some((x, y)) = layers.stage.cell_of(layers.target) else {
        return;
    };
    let Some(under) = canvas.get(x, y).copied() else {
        return;
    };
    _ = canvas.paint(
        x,
        y,
        Cell {
            glyph: TARGET_GLYPH,
            fg: layers.theme.accent,
            bg: under.bg,
            bold: true,
            priority: PRIORITY_TARGET,
        },
    );
}
