//! Drawing surface contract

use glam::Vec2;

use crate::sim::SpriteKind;

/// Named image handles the host must have loaded before a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    /// Static backdrop behind every layer
    Bg,
    Sky,
    Backdrop,
    BackdropGround,
    /// Avatar sprite sheet
    Avatar,
    Sprite(SpriteKind),
}

impl ImageId {
    /// Asset name of the image
    pub fn name(&self) -> &'static str {
        match self {
            ImageId::Bg => "bg",
            ImageId::Sky => "sky",
            ImageId::Backdrop => "backdrop",
            ImageId::BackdropGround => "backdrop2",
            ImageId::Avatar => "avatar_normal",
            ImageId::Sprite(kind) => kind.name(),
        }
    }
}

/// Axis-aligned rectangle in view pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Source rectangle inside an image (sprite-sheet frame)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub src: Vec2,
    pub size: Vec2,
}

/// A 2D canvas the simulation draws onto. Calls are synchronous and
/// cannot fail.
pub trait Surface {
    fn clear(&mut self, rect: Rect);
    fn draw_image(&mut self, image: ImageId, pos: Vec2, clip: Option<Clip>);
    fn fill_text(&mut self, text: &str, pos: Vec2);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rect),
    Image {
        image: ImageId,
        pos: Vec2,
        clip: Option<Clip>,
    },
    Text {
        text: String,
        pos: Vec2,
    },
}

/// Surface that keeps the calls of the current frame in memory
///
/// Clearing the whole surface starts a new frame, so the recording never
/// grows past one frame of calls.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Images drawn this frame, in order
    pub fn images(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Image { image, .. } => Some(*image),
            _ => None,
        })
    }

    /// Text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.calls.clear();
        self.frames += 1;
        self.calls.push(DrawCall::Clear(rect));
    }

    fn draw_image(&mut self, image: ImageId, pos: Vec2, clip: Option<Clip>) {
        self.calls.push(DrawCall::Image { image, pos, clip });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            pos,
        });
    }
}
