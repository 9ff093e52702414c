// Shared simulation tuning constants used by the core and the terminal frontend.

// Timing
pub const FPS: f64 = 60.0; // fixed simulation rate
pub const DELTA_TIME: f64 = 1.0 / FPS; // seconds advanced per tick

// Swarm sizing
pub const MAX_TRAIL: usize = 42; // trail points kept per follower
pub const INITIAL_FOLLOWERS: usize = 9;
pub const MIN_FOLLOWERS: usize = 3;
pub const MAX_FOLLOWERS: usize = 30;

// Spring ranges and defaults
pub const MIN_FREQUENCY: f64 = 1.0;
pub const MAX_FREQUENCY: f64 = 14.0;
pub const MIN_DAMPING: f64 = 0.02;
pub const MAX_DAMPING: f64 = 3.2;
pub const DEFAULT_FREQUENCY: f64 = 7.2;
pub const DEFAULT_DAMPING: f64 = 0.22;

// Live tuning steps
pub const FREQUENCY_STEP: f64 = 0.35;
pub const DAMPING_STEP: f64 = 0.05;
pub const NUDGE_STEP: f64 = 1.0; // cells per manual nudge

// Stage layout
pub const STATUS_LINES: u16 = 6; // rows reserved below the canvas for the footer
pub const MIN_STAGE_HEIGHT: u16 = 10; // below this the footer allowance shrinks
pub const FLOOR_STAGE_HEIGHT: u16 = 3;

// Particles
pub const PARTICLE_MARGIN: f64 = 2.0; // cells a seed may drift outside the stage
pub const PARTICLE_GRAVITY: f64 = 18.0; // downward acceleration, cells/s^2
pub const PARTICLE_SPREAD_X: f64 = 14.0; // max horizontal launch speed
pub const PARTICLE_LIFT_MIN: f64 = 6.0; // base upward launch speed
pub const PARTICLE_LIFT_SPAN: f64 = 6.0;
pub const PARTICLE_TTL_MIN: f64 = 1.4;
pub const PARTICLE_TTL_SPAN: f64 = 0.9;

// Canvas
pub const TRAIL_STRENGTH_EXPONENT: f64 = 1.3; // biases trail styling toward newer points
pub const HEAD_GLYPH: char = '@';
pub const TARGET_GLYPH: char = '#';

// Paint priorities, in paint order
pub const PRIORITY_BACKDROP: u8 = 0;
pub const PRIORITY_TRAIL: u8 = 1;
pub const PRIORITY_HEAD: u8 = 3;
pub const PRIORITY_PARTICLE: u8 = 4;
pub const PRIORITY_TARGET: u8 = 5;

// Default RNG seed when the frontend does not supply one
pub const DEFAULT_SEED: u64 = 0x6A09_E667_F3BC_C909;
