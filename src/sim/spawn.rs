//! Procedural terrain, decoration and hazard spawning
//!
//! The spawner emits at most one terrain tile per invocation at the right
//! edge of the view. Terrain comes in stretches separated by gaps; when both
//! counters run out a new stretch is rolled from the current speed.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Sprite, SpriteKind};
use crate::consts::MAX_TIER;
use crate::roll;

/// Ticks between spawn invocations at the given speed
///
/// One tile scrolls past per interval, so terrain density stays constant as
/// the world speeds up.
pub fn spawn_interval(tile_size: f32, speed: u32) -> u64 {
    ((tile_size / speed.max(1) as f32).floor() as u64).max(1)
}

/// Run one spawn invocation
pub fn spawn_step(state: &mut GameState) {
    state.score += 1;

    if state.terrain.gap_length > 0 {
        state.terrain.gap_length -= 1;
    } else if state.terrain.platform_length > 0 {
        emit_platform(state);
        spawn_decoration(state);
        spawn_hazard(state);
    } else {
        reseed_terrain(state);
    }
}

/// X at which new scenery enters
fn spawn_x(state: &GameState) -> f32 {
    let tile = state.tuning.tile_size;
    state.tuning.view_width + tile % state.player.speed.max(1) as f32
}

/// Y of scenery resting on top of the current terrain
fn surface_y(state: &GameState) -> f32 {
    state.tuning.tier_y(state.terrain.platform_height) - state.tuning.tile_size
}

/// Pick the tile for the current tier
pub fn terrain_kind(state: &mut GameState) -> SpriteKind {
    let height = state.terrain.platform_height;
    let kind = match height {
        0 | 1 => {
            if state.rng.random_bool(0.5) {
                SpriteKind::Grass1
            } else {
                SpriteKind::Grass2
            }
        }
        2 => SpriteKind::Grass,
        3 => SpriteKind::Bridge,
        _ => SpriteKind::Box,
    };

    // Low stretches sometimes end on a cliff edge
    if state.terrain.platform_length == 1 && height < 2 && roll(&mut state.rng, 0, 3) == 0 {
        return SpriteKind::Cliff;
    }
    kind
}

/// Emit one terrain tile at the right edge and consume one segment
pub fn emit_platform(state: &mut GameState) {
    let kind = terrain_kind(state);
    let pos = Vec2::new(
        spawn_x(state),
        state.tuning.tier_y(state.terrain.platform_height),
    );
    state
        .platforms
        .push(Sprite::new(kind, pos, state.tuning.tile_size));
    state.terrain.platform_length = state.terrain.platform_length.saturating_sub(1);
}

fn spawn_decoration(state: &mut GameState) {
    if state.score <= state.tuning.decoration_min_score {
        return;
    }
    if roll(&mut state.rng, 0, 20) != 0 || state.terrain.platform_height >= 3 {
        return;
    }

    let tile = state.tuning.tile_size;
    let x = spawn_x(state);
    let y = surface_y(state);
    if state.rng.random_bool(0.5) {
        state
            .environment
            .push(Sprite::new(SpriteKind::Plant, Vec2::new(x, y), tile));
    } else if state.terrain.platform_length > 2 {
        state
            .environment
            .push(Sprite::new(SpriteKind::Bush1, Vec2::new(x, y), tile));
        state
            .environment
            .push(Sprite::new(SpriteKind::Bush2, Vec2::new(x + tile, y), tile));
    }
}

fn spawn_hazard(state: &mut GameState) {
    if state.score <= state.tuning.hazard_min_score {
        return;
    }
    if state.rng.random::<f32>() <= 0.96 {
        return;
    }
    if state.enemies.len() >= state.tuning.max_hazards || state.terrain.platform_length <= 5 {
        return;
    }

    // Keep hazards either clustered or well spread out
    let tile = state.tuning.tile_size;
    if let Some(last) = state.enemies.last() {
        let inset = state.tuning.view_width - last.body.pos.x;
        if inset < tile * 3.0 && inset >= tile {
            return;
        }
    }

    let kind = if state.rng.random_bool(0.5) {
        SpriteKind::Spikes
    } else {
        SpriteKind::Slime
    };
    let pos = Vec2::new(spawn_x(state), surface_y(state));
    state.enemies.push(Sprite::new(kind, pos, tile));
    log::trace!("Spawned {:?} at {}m", kind, state.score);
}

/// Roll the next gap and terrain stretch from the current speed
fn reseed_terrain(state: &mut GameState) {
    let speed = state.player.speed;
    let height = state.terrain.platform_height;

    state.terrain.gap_length = roll(&mut state.rng, speed.saturating_sub(2), speed);

    // Terrain climbs at most one tier per stretch
    let bump = roll(&mut state.rng, 0, 2);
    let next = roll(&mut state.rng, 0, height + bump);
    state.terrain.platform_height = next.min(height + 1).min(MAX_TIER);

    state.terrain.platform_length = roll(&mut state.rng, speed / 2, speed * 4);

    log::debug!(
        "Terrain reseeded: gap {}, height {}, length {}",
        state.terrain.gap_length,
        state.terrain.platform_height,
        state.terrain.platform_length
    );
}
