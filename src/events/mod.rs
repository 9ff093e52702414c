pub mod keyboard;

pub use keyboard::{command_for_key, KeyCommand, KeyHelp};
