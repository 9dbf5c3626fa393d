//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed sub-step order
//! - Seeded RNG only
//! - Stable iteration order (insertion order is screen order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{below_view, landing_on, touches_hazard};
pub use player::{Animation, Player, Pose};
pub use spawn::{spawn_interval, spawn_step};
pub use state::{
    Background, GameEvent, GameOverCause, GamePhase, GameState, ParallaxLayer, Sprite,
    SpriteKind, Terrain,
};
pub use tick::{TickInput, tick};
