//! Backdrop shaders: per-cell functions of position and time.
//!
//! The plain backdrop is a pair of interfering waves shared by every theme.
//! A theme may additionally name a [`ShaderKind`] whose sample overrides the
//! glyph and colors of each backdrop cell.

use crate::catalog::Theme;
use crate::color::{blend, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Radial swirl with eight-fold petals.
    TieDye,
}

/// Shader output. `None` fields keep the plain backdrop's value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShaderSample {
    pub glyph: Option<char>,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl ShaderKind {
    pub fn sample(
        self,
        x: f64,
        y: f64,
        t: f64,
        width: u16,
        height: u16,
        theme: &Theme,
    ) -> ShaderSample {
        match self {
            ShaderKind::TieDye => tie_dye(x, y, t, width, height, theme),
        }
    }
}

/// Intensity in [0, 1] of the default two-wave backdrop at cell `(x, y)`.
#[inline]
pub fn backdrop_intensity(x: f64, y: f64, t: f64) -> f64 {
    let wave = (x * 0.11 + t * 0.35).sin() + (y * 0.09 - t * 0.21 + x * 0.03).cos();
    (wave + 2.0) / 4.0
}

fn tie_dye(x: f64, y: f64, t: f64, width: u16, height: u16, theme: &Theme) -> ShaderSample {
    if width == 0 || height == 0 {
        return ShaderSample::default();
    }
    let w = width as f64;
    let h = height as f64;
    let cx = (w - 1.0) / 2.0;
    let cy = (h - 1.0) / 2.0;
    let dx = (x - cx) / w;
    let dy = (y - cy) / h;
    let radius = (dx * dx + dy * dy).sqrt();
    let angle = dy.atan2(dx);

    let swirl = radius * 18.0 + angle * 6.0 - t * 1.4;
    let wave = (swirl.sin() + 1.0) / 2.0;
    let petals = (angle * 8.0 + t * 0.9).sin();
    let mix = (wave * 0.7 + radius * 0.5 + petals * 0.2).rem_euclid(1.0);

    let fg = theme.color_at(mix);
    let bg_mix = (wave * 0.6 + 0.2).clamp(0.0, 1.0);
    let bg = blend(fg, theme.background, 1.0 - bg_mix);

    let glyphs = theme.backdrop_glyphs;
    let glyph = if glyphs.is_empty() {
        '~'
    } else {
        let n = glyphs.len() as f64;
        let idx = (petals.abs() * n).rem_euclid(n) as usize;
        glyphs[idx.min(glyphs.len() - 1)]
    };

    ShaderSample {
        glyph: Some(glyph),
        fg: Some(fg),
        bg: Some(bg),
    }
}
