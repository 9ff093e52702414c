//! Terminal front-end for the harmonic garden.
//!
//! The simulation lives in `garden-core`; this crate maps keys to actions,
//! paces ticks at a fixed rate and draws composed frames with crossterm.

pub mod cli;
pub mod constants;
pub mod events;
pub mod frame;
pub mod overlay;
pub mod render;
