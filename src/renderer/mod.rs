//! Draw pass
//!
//! Reads a [`GameState`] and issues surface calls back to front: backdrop,
//! parallax layers, water, decorations, avatar, terrain, hazards, HUD.

pub mod sheet;

pub use sheet::SpriteSheet;

use glam::Vec2;

use crate::platform::{ImageId, Rect, Surface};
use crate::sim::{GameState, Sprite};

/// Parallax layer images, back to front
const LAYER_IMAGES: [ImageId; 3] = [ImageId::Sky, ImageId::Backdrop, ImageId::BackdropGround];

/// Offset of the score text from the top-right corner
const HUD_OFFSET: Vec2 = Vec2::new(140.0, 30.0);

/// Draw one frame of the run
pub fn draw<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let view = Vec2::new(state.tuning.view_width, state.tuning.view_height);
    surface.clear(Rect {
        pos: Vec2::ZERO,
        size: view,
    });

    draw_background(state, surface);
    draw_sprites(&state.water, surface);
    draw_sprites(&state.environment, surface);

    let sheet = SpriteSheet::new(
        ImageId::Avatar,
        state.tuning.player_size,
        state.tuning.avatar_frames_per_row,
    );
    let clip = sheet.clip(state.player.animation().frame());
    surface.draw_image(sheet.image, state.player.pos(), Some(clip));

    draw_sprites(&state.platforms, surface);
    draw_sprites(&state.enemies, surface);

    surface.fill_text(
        &format!("Score: {}m", state.score),
        Vec2::new(view.x - HUD_OFFSET.x, HUD_OFFSET.y),
    );
}

/// Static backdrop, then each layer twice side by side so it loops
fn draw_background<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.draw_image(ImageId::Bg, Vec2::ZERO, None);

    let width = state.background.width;
    for (layer, image) in state.background.layers.iter().zip(LAYER_IMAGES) {
        surface.draw_image(image, Vec2::new(layer.x, 0.0), None);
        surface.draw_image(image, Vec2::new(layer.x + width, 0.0), None);
    }
}

fn draw_sprites<S: Surface + ?Sized>(sprites: &[Sprite], surface: &mut S) {
    for sprite in sprites {
        surface.draw_image(ImageId::Sprite(sprite.kind), sprite.body.pos, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Clip, DrawCall, RecordingSurface};
    use crate::sim::SpriteKind;
    use crate::tuning::Tuning;

    #[test]
    fn test_frame_layout() {
        let state = GameState::new(1, Tuning::default());
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);

        assert!(matches!(
            surface.calls[0],
            DrawCall::Clear(r) if r.size == Vec2::new(800.0, 480.0)
        ));
        let images: Vec<_> = surface.images().collect();
        // bg + 3 layers x 2 + 27 water + avatar + 30 terrain
        assert_eq!(images.len(), 1 + 6 + 27 + 1 + 30);
        assert_eq!(images[0], ImageId::Bg);
        assert_eq!(&images[1..3], &[ImageId::Sky, ImageId::Sky]);
        assert_eq!(images[7], ImageId::Sprite(SpriteKind::Water));
        assert_eq!(images[34], ImageId::Avatar);
        assert_eq!(images[35], ImageId::Sprite(SpriteKind::Grass));

        assert_eq!(
            surface.calls.last(),
            Some(&DrawCall::Text {
                text: "Score: 0m".into(),
                pos: Vec2::new(660.0, 30.0),
            })
        );
    }

    #[test]
    fn test_avatar_clip() {
        let state = GameState::new(1, Tuning::default());
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);

        let avatar = surface.calls.iter().find_map(|call| match call {
            DrawCall::Image {
                image: ImageId::Avatar,
                pos,
                clip,
            } => Some((*pos, *clip)),
            _ => None,
        });
        assert_eq!(
            avatar,
            Some((
                Vec2::new(64.0, 250.0),
                Some(Clip {
                    src: Vec2::ZERO,
                    size: Vec2::new(60.0, 96.0),
                })
            ))
        );
    }

    #[test]
    fn test_layers_drawn_twice() {
        let mut state = GameState::new(1, Tuning::default());
        state.background.scroll();
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);

        let sky: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Image {
                    image: ImageId::Sky,
                    pos,
                    ..
                } => Some(pos.x),
                _ => None,
            })
            .collect();
        assert_eq!(sky, vec![-0.2, 799.8]);
    }
}
