//! Fixed timestep simulation tick
//!
//! Core game loop that advances a run by one display frame. Sub-steps run
//! in a fixed order: background, water, environment, player, platforms,
//! enemies, spawning, speed escalation.

use super::collision::{below_view, landing_on, touches_hazard};
use super::spawn::{emit_platform, spawn_interval, spawn_step};
use super::state::{GameEvent, GameOverCause, GameState};
use crate::consts::ESCALATION_FACTOR;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump button held this frame
    pub jump: bool,
}

/// Advance the game state by one frame. Does nothing unless running.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    state.background.scroll();
    update_water(state);
    update_environment(state);

    update_player(state, input);
    if !state.is_running() {
        return;
    }

    update_platforms(state);
    update_enemies(state);
    if !state.is_running() {
        return;
    }

    let interval = spawn_interval(state.tuning.tile_size, state.player.speed);
    if state.ticker % interval == 0 {
        spawn_step(state);
    }
    escalate_speed(state, interval);

    state.ticker += 1;
}

/// Scroll the water strip, moving the front tile behind the last once it
/// has left the view
fn update_water(state: &mut GameState) {
    let speed = state.player.speed;
    for tile in &mut state.water {
        tile.update(speed);
    }

    let width = state.tuning.tile_size;
    while state.water.len() > 1 && state.water[0].body.is_off_left() {
        let mut tile = state.water.remove(0);
        if let Some(last) = state.water.last() {
            tile.body.pos.x = last.body.pos.x + width;
        }
        state.water.push(tile);
    }
}

fn update_environment(state: &mut GameState) {
    let speed = state.player.speed;
    for sprite in &mut state.environment {
        sprite.update(speed);
    }
    state.environment.retain(|s| !s.body.is_off_left());
}

fn update_player(state: &mut GameState, input: &TickInput) {
    if state.player.update(input.jump) {
        state.events.push(GameEvent::Jumped);
    }

    if below_view(&state.player.body, state.tuning.view_height) {
        state.game_over(GameOverCause::Fell);
    }
}

/// Scroll the terrain and let the avatar land on it
fn update_platforms(state: &mut GameState) {
    let speed = state.player.speed;
    state.player.is_falling = true;

    for platform in &mut state.platforms {
        platform.update(speed);
        if let Some(y) = landing_on(&state.player.body, &platform.body) {
            state.player.land(y);
        }
    }
    state.platforms.retain(|s| !s.body.is_off_left());
}

fn update_enemies(state: &mut GameState) {
    let speed = state.player.speed;
    let mut hit = false;
    for enemy in &mut state.enemies {
        enemy.update(speed);
        hit |= touches_hazard(&state.player.body, &enemy.body);
    }
    state.enemies.retain(|s| !s.body.is_off_left());

    if hit {
        state.game_over(GameOverCause::Hazard);
    }
}

/// Speed the world up once enough ticks have passed with the avatar in the air
pub(crate) fn escalate_speed(state: &mut GameState, interval: u64) {
    let speed = state.player.speed;
    let threshold = interval * speed as u64 * ESCALATION_FACTOR;
    if state.ticker <= threshold || state.player.dy() == 0.0 {
        return;
    }

    let faster = (speed + 1).min(state.tuning.max_speed);
    state.player.set_speed(faster, state.tuning.tile_size);
    state.ticker = 0;

    // The new spawn cadence would otherwise open a gap mid-stretch
    if state.terrain.gap_length == 0 {
        emit_platform(state);
    }

    state.events.push(GameEvent::SpeedUp { speed: faster });
    log::debug!("Speed up to {} at {}m", faster, state.score);
}
