//! Data-driven game balance
//!
//! Every number the simulation reads lives in [`Tuning`]. The defaults
//! reproduce the classic game; a JSON file may override any subset.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Balance constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub view_width: f32,
    pub view_height: f32,
    pub tile_size: f32,
    pub tier_spacer: f32,

    pub player_size: Vec2,
    pub player_start: Vec2,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_hold_frames: u32,
    /// Frames per row in the avatar sprite sheet
    pub avatar_frames_per_row: u32,

    pub initial_speed: u32,
    pub max_speed: u32,

    /// Terrain the first run starts on
    pub initial_platform_height: u32,
    pub initial_platform_length: u32,
    pub initial_platforms: u32,
    /// Horizontal step between the pre-laid starting tiles
    pub initial_platform_step: f32,

    /// Decorations appear once the score passes this
    pub decoration_min_score: u64,
    /// Hazards appear once the score passes this
    pub hazard_min_score: u64,
    pub max_hazards: usize,

    /// Scroll speed of the sky, backdrop and ground backdrop layers
    pub parallax_speeds: [f32; 3],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            tile_size: TILE_SIZE,
            tier_spacer: TIER_SPACER,

            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            jump_hold_frames: JUMP_HOLD_FRAMES,
            avatar_frames_per_row: 4,

            initial_speed: START_SPEED,
            max_speed: SPEED_CAP,

            initial_platform_height: 2,
            initial_platform_length: 15,
            initial_platforms: 30,
            initial_platform_step: TILE_SIZE - 3.0,

            decoration_min_score: 40,
            hazard_min_score: 100,
            max_hazards: 3,

            parallax_speeds: [0.2, 0.4, 0.6],
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document (missing keys keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.view_width <= 0.0 || self.view_height <= 0.0 {
            return Err(TuningError::Invalid("view size must be positive".into()));
        }
        if self.tile_size <= 0.0 {
            return Err(TuningError::Invalid("tile_size must be positive".into()));
        }
        if self.player_size.x <= 0.0 || self.player_size.y <= 0.0 {
            return Err(TuningError::Invalid("player_size must be positive".into()));
        }
        if self.max_speed == 0 || self.max_speed > SPEED_CAP {
            return Err(TuningError::Invalid(format!(
                "max_speed must be in 1..={SPEED_CAP}, got {}",
                self.max_speed
            )));
        }
        if self.initial_speed == 0 || self.initial_speed > self.max_speed {
            return Err(TuningError::Invalid(format!(
                "initial_speed must be in 1..={}, got {}",
                self.max_speed, self.initial_speed
            )));
        }
        if self.initial_platform_height > MAX_TIER {
            return Err(TuningError::Invalid(format!(
                "initial_platform_height must be at most {MAX_TIER}"
            )));
        }
        if self.avatar_frames_per_row == 0 {
            return Err(TuningError::Invalid(
                "avatar_frames_per_row must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Y of the water line and of tier-0 terrain
    pub fn platform_base(&self) -> f32 {
        self.view_height - self.tile_size
    }

    /// Y of a terrain tile at the given tier
    pub fn tier_y(&self, tier: u32) -> f32 {
        self.platform_base() - tier as f32 * self.tier_spacer
    }
}
