//! Collision heuristics between the avatar and scenery
//!
//! Nothing here resolves penetration: the runner only needs to know whether
//! the avatar came down onto a tile, touched a hazard, or dropped out of
//! the view.

use super::body::Body;
use crate::consts::LANDING_SINK;

/// Approach arc (degrees) of the avatar relative to a tile for a landing.
/// Screen y grows downward, so "above" is around -90.
pub const LANDING_ARC: (f32, f32) = (-130.0, -50.0);

/// Where the avatar should rest if it is coming down onto `tile`
///
/// The avatar lands when the swept centre distance is within half its
/// height plus half the tile, and the angle from the tile to the avatar
/// lies inside [`LANDING_ARC`]. Returns the avatar's new top y.
pub fn landing_on(player: &Body, tile: &Body) -> Option<f32> {
    let reach = player.size.y / 2.0 + tile.size.y / 2.0;
    if player.min_distance(tile) > reach {
        return None;
    }

    let offset = player.pos - tile.pos;
    let angle = offset.y.atan2(offset.x).to_degrees();
    if angle > LANDING_ARC.0 && angle < LANDING_ARC.1 {
        Some(tile.pos.y - player.size.y + LANDING_SINK)
    } else {
        None
    }
}

/// True when the avatar is close enough to a hazard to be hurt
pub fn touches_hazard(player: &Body, hazard: &Body) -> bool {
    player.min_distance(hazard) <= player.size.x - hazard.size.x / 2.0
}

/// True once the avatar's feet reach the bottom of the view
#[inline]
pub fn below_view(player: &Body, view_height: f32) -> bool {
    player.bottom() >= view_height
}
