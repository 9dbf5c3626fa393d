//! Kandi Runner - a side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: Draw pass onto an external 2D surface
//! - `platform`: Surface and input contracts the host provides
//! - `audio`: Sound cues for lifecycle events
//! - `session`: Idle / Running / GameOver controller
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{Tuning, TuningError};

use rand::Rng;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// View dimensions (pixels)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 480.0;

    /// Edge length of every scenery tile
    pub const TILE_SIZE: f32 = 32.0;
    /// Vertical distance between terrain height tiers
    pub const TIER_SPACER: f32 = 64.0;
    /// Highest terrain tier
    pub const MAX_TIER: u32 = 4;

    /// Avatar box and spawn point
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 96.0;
    pub const PLAYER_START_X: f32 = 64.0;
    pub const PLAYER_START_Y: f32 = 250.0;

    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 1.0;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Frames a held jump keeps re-applying the impulse
    pub const JUMP_HOLD_FRAMES: u32 = 12;
    /// The avatar sinks this far into a tile when it lands
    pub const LANDING_SINK: f32 = 5.0;

    /// Scroll speed (pixels per tick)
    pub const START_SPEED: u32 = 6;
    /// Hard ceiling for the scroll speed
    pub const SPEED_CAP: u32 = 15;
    /// Speed escalation waits `spawn_interval * speed * ESCALATION_FACTOR` ticks
    pub const ESCALATION_FACTOR: u64 = 20;

    /// Fallback frame delay when no display-refresh callback exists
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Uniform integer in `[low, high]`; collapses to `low` when the range is empty
#[inline]
pub fn roll<R: Rng + ?Sized>(rng: &mut R, low: u32, high: u32) -> u32 {
    if high <= low {
        low
    } else {
        rng.random_range(low..=high)
    }
}
