//! Platform abstraction layer
//!
//! The host (browser canvas, native window, test harness) provides:
//! - A 2D drawing surface
//! - Input state for the named actions
//! - Audio output (see [`crate::audio`])

pub mod input;
pub mod surface;

pub use input::{Action, InputState, KeyBindings};
pub use surface::{Clip, DrawCall, ImageId, Rect, RecordingSurface, Surface};
