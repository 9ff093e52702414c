use thiserror::Error;

/// Errors surfaced by catalog validation and name lookups.
///
/// Runtime simulation never fails: numeric input is clamped where it is
/// applied. These variants only show up at start-up, when catalogs are
/// checked or when the frontend resolves user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GardenError {
    #[error("theme `{theme}` has no color stops")]
    EmptyPalette { theme: &'static str },
    #[error("theme `{theme}` has an empty {set} glyph set")]
    EmptyGlyphSet {
        theme: &'static str,
        set: &'static str,
    },
    #[error("theme `{theme}` seed interval must be positive")]
    InvalidSeedInterval { theme: &'static str },
    #[error("unknown scene `{0}`")]
    UnknownScene(String),
    #[error("unknown formation `{0}`")]
    UnknownFormation(String),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("invalid hex color `{0}`, expected #RRGGBB")]
    InvalidHexColor(String),
}
