//! Static catalogs: scene and formation metadata, and the mood themes.
//!
//! Entries are immutable process-wide tables. Behavior lives on the id enums
//! ([`SceneId`], [`FormationId`], [`ShaderKind`]); this module only carries
//! names, descriptions and styling data.

use crate::color::{self, Rgb};
use crate::error::GardenError;
use crate::formation::FormationId;
use crate::shader::ShaderKind;
use crate::trajectory::SceneId;

#[derive(Clone, Copy, Debug)]
pub struct SceneMeta {
    pub id: SceneId,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FormationMeta {
    pub id: FormationId,
    pub name: &'static str,
    pub description: &'static str,
}

/// A mood: palette, glyph sets and particle cadence.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub description: &'static str,
    pub palette: &'static [Rgb],
    pub background: Rgb,
    pub accent: Rgb,
    pub backdrop_glyphs: &'static [char],
    pub trail_glyphs: &'static [char],
    pub seed_glyph: char,
    pub seed_interval: f64, // seconds between seeds
    pub shader: Option<ShaderKind>,
}

impl Theme {
    #[inline]
    pub fn color_at(&self, t: f64) -> Rgb {
        color::color_at(self.palette, t)
    }
}

pub static SCENES: [SceneMeta; 5] = [
    SceneMeta {
        id: SceneId::Orbit,
        name: "Ellipse Drift",
        description: "Nested ellipses breathing in slow counterpoint",
    },
    SceneMeta {
        id: SceneId::Rose,
        name: "Rose Bloom",
        description: "Five-petal harmonics unfurling and collapsing",
    },
    SceneMeta {
        id: SceneId::Cascade,
        name: "Cascade",
        description: "Falling waterfall of envelopes and echoes",
    },
    SceneMeta {
        id: SceneId::Pulse,
        name: "Pulse Spiral",
        description: "Heartbeat spiral with luminous bursts",
    },
    SceneMeta {
        id: SceneId::Wander,
        name: "Wander Field",
        description: "Noise-driven drift through latent space",
    },
];

pub static FORMATIONS: [FormationMeta; 4] = [
    FormationMeta {
        id: FormationId::Halo,
        name: "Halo",
        description: "Radial orbits with delicate offsets",
    },
    FormationMeta {
        id: FormationId::Ribbon,
        name: "Ribbon",
        description: "Flowing comet tails weaving in stereo",
    },
    FormationMeta {
        id: FormationId::Bloom,
        name: "Bloom",
        description: "Petal clusters breathing with the beat",
    },
    FormationMeta {
        id: FormationId::Helix,
        name: "Helix",
        description: "Twisted lattice rippling through depth",
    },
];

pub static THEMES: [Theme; 4] = [
    Theme {
        name: "Aurora Bloom",
        description: "Iridescent dusk fields and electric petals",
        palette: &[
            Rgb::from_u32(0x3E1F65),
            Rgb::from_u32(0x5C3C99),
            Rgb::from_u32(0x8D73FF),
            Rgb::from_u32(0xFF8BD5),
            Rgb::from_u32(0xFFE8A3),
        ],
        background: Rgb::from_u32(0x0B0618),
        accent: Rgb::from_u32(0xFFD8FD),
        backdrop_glyphs: &[' ', ' ', '.', '`', '^'],
        trail_glyphs: &['.', '*', '+', 'o'],
        seed_glyph: '*',
        seed_interval: 0.28,
        shader: None,
    },
    Theme {
        name: "Cosmic Tie-Dye",
        description: "Sunburst ripples and peace-wave whorls",
        palette: &[
            Rgb::from_u32(0x321040),
            Rgb::from_u32(0x7E1978),
            Rgb::from_u32(0xF54BA1),
            Rgb::from_u32(0xFFB94F),
            Rgb::from_u32(0xFFEFA9),
        ],
        background: Rgb::from_u32(0x150713),
        accent: Rgb::from_u32(0xFFEFD2),
        backdrop_glyphs: &['~', '-', '.', '=', '*'],
        trail_glyphs: &['.', '*', 'o', '+'],
        seed_glyph: '~',
        seed_interval: 0.26,
        shader: Some(ShaderKind::TieDye),
    },
    Theme {
        name: "Solar Garden",
        description: "Heat shimmer blooms and molten ribbons",
        palette: &[
            Rgb::from_u32(0x251605),
            Rgb::from_u32(0x813D0B),
            Rgb::from_u32(0xD66B02),
            Rgb::from_u32(0xFFAF45),
            Rgb::from_u32(0xF9F871),
        ],
        background: Rgb::from_u32(0x120701),
        accent: Rgb::from_u32(0xFFE9B0),
        backdrop_glyphs: &[' ', '.', ',', '`', '"'],
        trail_glyphs: &['.', '+', '*', 'x'],
        seed_glyph: '+',
        seed_interval: 0.35,
        shader: None,
    },
    Theme {
        name: "Deep Current",
        description: "Bioluminescent swirls in tidal night",
        palette: &[
            Rgb::from_u32(0x010D1B),
            Rgb::from_u32(0x014F86),
            Rgb::from_u32(0x0DA5C0),
            Rgb::from_u32(0x7EF2FF),
            Rgb::from_u32(0xF8FFF6),
        ],
        background: Rgb::from_u32(0x000407),
        accent: Rgb::from_u32(0xB4F1FF),
        backdrop_glyphs: &[' ', '.', '`', '~'],
        trail_glyphs: &['.', ':', '*', 'o'],
        seed_glyph: '*',
        seed_interval: 0.24,
        shader: None,
    },
];

#[inline]
pub fn scene(id: SceneId) -> &'static SceneMeta {
    &SCENES[id.index()]
}

#[inline]
pub fn formation(id: FormationId) -> &'static FormationMeta {
    &FORMATIONS[id.index()]
}

/// Theme at `index`, wrapping around the catalog.
#[inline]
pub fn theme(index: usize) -> &'static Theme {
    &THEMES[index % THEMES.len()]
}

/// Resolve a theme by display name (case, spacing and punctuation ignored).
pub fn theme_index_by_name(name: &str) -> Result<usize, GardenError> {
    let wanted = normalize_name(name);
    THEMES
        .iter()
        .position(|t| normalize_name(t.name) == wanted)
        .ok_or_else(|| GardenError::UnknownTheme(name.to_string()))
}

/// Lowercased ASCII alphanumerics only: "Cosmic Tie-Dye" -> "cosmictiedye".
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Check every theme has usable palettes, glyph sets and seed cadence.
pub fn validate() -> Result<(), GardenError> {
    for theme in THEMES.iter() {
        if theme.palette.is_empty() {
            return Err(GardenError::EmptyPalette { theme: theme.name });
        }
        if theme.backdrop_glyphs.is_empty() {
            return Err(GardenError::EmptyGlyphSet {
                theme: theme.name,
                set: "backdrop",
            });
        }
        if theme.trail_glyphs.is_empty() {
            return Err(GardenError::EmptyGlyphSet {
                theme: theme.name,
                set: "trail",
            });
        }
        if !(theme.seed_interval > 0.0) {
            return Err(GardenError::InvalidSeedInterval { theme: theme.name });
        }
    }
    Ok(())
}
