//! Game state and core simulation types
//!
//! All state that a run mutates lives in [`GameState`]. Everything random
//! is drawn from the seeded RNG held here, so a seed and an input sequence
//! fully determine a run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::player::Player;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the menu, nothing ticks
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; waits for a restart
    GameOver,
}

/// Every kind of scenery tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    // Terrain
    Grass1,
    Grass2,
    Grass,
    Bridge,
    Box,
    Cliff,
    // Water strip
    Water,
    // Decorations
    Plant,
    Bush1,
    Bush2,
    // Hazards
    Spikes,
    Slime,
}

impl SpriteKind {
    /// Asset name of the tile image
    pub fn name(&self) -> &'static str {
        match self {
            SpriteKind::Grass1 => "grass1",
            SpriteKind::Grass2 => "grass2",
            SpriteKind::Grass => "grass",
            SpriteKind::Bridge => "bridge",
            SpriteKind::Box => "box",
            SpriteKind::Cliff => "cliff",
            SpriteKind::Water => "water",
            SpriteKind::Plant => "plant",
            SpriteKind::Bush1 => "bush1",
            SpriteKind::Bush2 => "bush2",
            SpriteKind::Spikes => "spikes",
            SpriteKind::Slime => "slime",
        }
    }

    pub fn is_hazard(&self) -> bool {
        matches!(self, SpriteKind::Spikes | SpriteKind::Slime)
    }
}

/// A passive tile that scrolls with the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub body: Body,
}

impl Sprite {
    pub fn new(kind: SpriteKind, pos: Vec2, tile_size: f32) -> Self {
        Self {
            kind,
            body: Body::new(pos, Vec2::splat(tile_size)),
        }
    }

    /// Scroll left at the world speed
    pub fn update(&mut self, speed: u32) {
        self.body.vel.x = -(speed as f32);
        self.body.advance();
    }
}

/// One horizontally wrapping background layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    pub x: f32,
    pub speed: f32,
}

/// Sky, backdrop and ground backdrop, each slower than the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub layers: [ParallaxLayer; 3],
    /// Width of one copy of a layer image
    pub width: f32,
}

impl Background {
    pub fn new(speeds: [f32; 3], width: f32) -> Self {
        Self {
            layers: speeds.map(|speed| ParallaxLayer { x: 0.0, speed }),
            width,
        }
    }

    /// Pan every layer, wrapping once a full copy has scrolled past
    pub fn scroll(&mut self) {
        for layer in &mut self.layers {
            layer.x -= layer.speed;
            if layer.x + self.width <= 0.0 {
                layer.x = 0.0;
            }
        }
    }
}

/// Procedural terrain counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    /// Elevation tier of the terrain being emitted (0-4)
    pub platform_height: u32,
    /// Terrain tiles left to emit in this stretch
    pub platform_length: u32,
    /// Empty slots left to emit before the next stretch
    pub gap_length: u32,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// The avatar dropped to the bottom of the view
    Fell,
    /// The avatar ran into a hazard
    Hazard,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    SpeedUp { speed: u32 },
    GameOver { score: u64, cause: GameOverCause },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed; restarts reseed from it
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Spawn invocations so far (distance proxy)
    pub score: u64,
    /// Ticks since the last speed increase
    pub ticker: u64,
    /// Running ticks since the run started
    pub time_ticks: u64,
    pub player: Player,
    pub background: Background,
    pub terrain: Terrain,
    /// Terrain tiles in screen order
    pub platforms: Vec<Sprite>,
    /// Continuous water strip, recycled rather than freed
    pub water: Vec<Sprite>,
    /// Plants and bushes
    pub environment: Vec<Sprite>,
    /// Hazards
    pub enemies: Vec<Sprite>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out a fresh run. The state starts [`GamePhase::Idle`].
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tile = tuning.tile_size;

        let start_y = tuning.tier_y(tuning.initial_platform_height);
        let platforms = (0..tuning.initial_platforms)
            .map(|i| {
                Sprite::new(
                    SpriteKind::Grass,
                    Vec2::new(i as f32 * tuning.initial_platform_step, start_y),
                    tile,
                )
            })
            .collect();

        let water_tiles = (tuning.view_width / tile + 2.0).ceil() as u32;
        let water = (0..water_tiles)
            .map(|i| {
                Sprite::new(
                    SpriteKind::Water,
                    Vec2::new(i as f32 * tile, tuning.platform_base()),
                    tile,
                )
            })
            .collect();

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            background: Background::new(tuning.parallax_speeds, tuning.view_width),
            terrain: Terrain {
                platform_height: tuning.initial_platform_height,
                platform_length: tuning.initial_platform_length,
                gap_length: 0,
            },
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            ticker: 0,
            time_ticks: 0,
            platforms,
            water,
            environment: Vec::new(),
            enemies: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// End the run. Only the first call of a run has any effect.
    pub fn game_over(&mut self, cause: GameOverCause) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.score,
            cause,
        });
        log::info!(
            "Game over ({:?}) at {}m, speed {}",
            cause,
            self.score,
            self.player.speed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.platforms.len(), 30);
        assert_eq!(state.water.len(), 27);
        assert!(state.environment.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.platforms[1].body.pos, Vec2::new(29.0, 320.0));
        assert_eq!(state.water[26].body.pos, Vec2::new(832.0, 448.0));
        assert_eq!(
            state.terrain,
            Terrain {
                platform_height: 2,
                platform_length: 15,
                gap_length: 0
            }
        );
        assert_eq!(state.player.speed, 6);
    }

    #[test]
    fn test_game_over_once() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::Running;
        state.score = 12;
        state.game_over(GameOverCause::Hazard);
        state.game_over(GameOverCause::Fell);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver {
                score: 12,
                cause: GameOverCause::Hazard
            }]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_game_over_ignored_when_idle() {
        let mut state = GameState::new(1, Tuning::default());
        state.game_over(GameOverCause::Fell);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_background_wraps() {
        let mut bg = Background::new([0.5, 1.0, 2.0], 4.0);
        bg.scroll();
        assert_eq!(bg.layers[0].x, -0.5);
        assert_eq!(bg.layers[2].x, -2.0);
        bg.scroll();
        // Fastest layer has scrolled a full width
        assert_eq!(bg.layers[2].x, 0.0);
        assert_eq!(bg.layers[1].x, -2.0);
    }

    #[test]
    fn test_sprite_scrolls() {
        let mut sprite = Sprite::new(SpriteKind::Spikes, Vec2::new(100.0, 50.0), 32.0);
        sprite.update(6);
        assert_eq!(sprite.body.pos, Vec2::new(94.0, 50.0));
        sprite.update(7);
        assert_eq!(sprite.body.pos, Vec2::new(87.0, 50.0));
    }
}
