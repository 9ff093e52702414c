//! Terminal front-end tuning constants.
//!
//! Simulation constants live in `garden_core::constants`; this module only
//! holds what the terminal needs to pace and decorate frames.

use std::time::Duration;

use crossterm::style::Color;
use garden_core::constants::FPS;

// Frame pacing
pub const FRAME_INTERVAL: Duration = Duration::from_nanos((1_000_000_000.0 / FPS) as u64);

// Footer palette (ANSI 256 indices)
pub const RULE_FG: Color = Color::AnsiValue(213);
pub const BANNER_FG: Color = Color::AnsiValue(213);
pub const TITLE_FG: Color = Color::AnsiValue(205);
pub const VALUE_FG: Color = Color::AnsiValue(111);
pub const STATUS_FG: Color = Color::AnsiValue(230);
pub const STATUS_BG: Color = Color::AnsiValue(57);
pub const HELP_KEY_FG: Color = Color::AnsiValue(250);
pub const HELP_DESC_FG: Color = Color::AnsiValue(244);
pub const HELP_BOX_FG: Color = Color::AnsiValue(230);
pub const HELP_BOX_BG: Color = Color::AnsiValue(54);

// Help box padding (rows, columns)
pub const HELP_PAD_Y: u16 = 1;
pub const HELP_PAD_X: u16 = 2;

pub const RULE_GLYPH: char = '─';
pub const BANNER_TEXT: &str = "harmonic garden";
pub const FIELD_SEPARATOR: &str = "  ";
pub const WAITING_TEXT: &str = "harmonic garden is tuning resonances...";
