//! Sprite-sheet frame lookup

use glam::Vec2;

use crate::platform::{Clip, ImageId};

/// A grid of equally sized frames packed row by row into one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    pub image: ImageId,
    pub frame_size: Vec2,
    pub frames_per_row: u32,
}

impl SpriteSheet {
    pub fn new(image: ImageId, frame_size: Vec2, frames_per_row: u32) -> Self {
        Self {
            image,
            frame_size,
            frames_per_row: frames_per_row.max(1),
        }
    }

    /// Source rectangle of frame `index`
    pub fn clip(&self, index: u32) -> Clip {
        let row = index / self.frames_per_row;
        let col = index % self.frames_per_row;
        Clip {
            src: Vec2::new(col as f32, row as f32) * self.frame_size,
            size: self.frame_size,
        }
    }
}
