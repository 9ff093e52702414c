//! Color gradient engine.
//!
//! Palettes are ordered lists of [`Rgb`] stops. [`color_at`] samples a
//! palette at a normalized position and [`blend`] mixes two colors directly.
//! Both are pure and deterministic, so renderers may memoize anything derived
//! from their output.

use std::fmt;
use std::str::FromStr;

use crate::error::GardenError;

/// Upper bound applied to gradient positions so the bracketing pair always
/// exists.
const GRADIENT_T_MAX: f64 = 0.9999;

/// Opaque 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, GardenError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GardenError::InvalidHexColor(hex.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| GardenError::InvalidHexColor(hex.to_string()))?;
        Ok(Self::from_u32(packed))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Sample a palette at `t` in [0, 1].
///
/// `t` is clamped to `[0, 0.9999]`, scaled across the stops and the two
/// bracketing stops are interpolated channel by channel. A single-stop palette
/// returns that stop for every `t`. An empty palette yields white; catalogs
/// are validated at start so this branch is not reached in practice.
pub fn color_at(stops: &[Rgb], t: f64) -> Rgb {
    match stops {
        [] => Rgb::WHITE,
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, GRADIENT_T_MAX);
            let scaled = t * (stops.len() - 1) as f64;
            let idx = scaled as usize;
            let frac = scaled - idx as f64;
            blend(stops[idx], stops[idx + 1], frac)
        }
    }
}

/// Linear per-channel mix from `a` (t = 0) to `b` (t = 1), rounded to the
/// nearest integer.
pub fn blend(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb {
        r: mix_channel(a.r, b.r, t),
        g: mix_channel(a.g, b.g, t),
        b: mix_channel(a.b, b.b, t),
    }
}

#[inline]
fn mix_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = from as f64;
    let to = to as f64;
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}
