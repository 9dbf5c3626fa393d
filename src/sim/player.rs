//! The avatar: jump physics and sprite-sheet animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::tuning::Tuning;

/// A looping run of sprite-sheet frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Frame indices in playback order
    sequence: Vec<u32>,
    /// Ticks each frame is held
    frame_speed: u32,
    current: usize,
    counter: u32,
}

impl Animation {
    /// Animation over the inclusive frame range `first..=last`
    pub fn new(frame_speed: u32, first: u32, last: u32) -> Self {
        Self {
            sequence: (first..=last).collect(),
            frame_speed: frame_speed.max(1),
            current: 0,
            counter: 0,
        }
    }

    /// Step the frame counter, moving to the next frame when it is time
    pub fn update(&mut self) {
        if self.counter == self.frame_speed - 1 {
            self.current = (self.current + 1) % self.sequence.len();
        }
        self.counter = (self.counter + 1) % self.frame_speed;
    }

    /// Sprite-sheet index of the frame to draw
    pub fn frame(&self) -> u32 {
        self.sequence[self.current]
    }

    pub fn frame_speed(&self) -> u32 {
        self.frame_speed
    }

    pub fn set_frame_speed(&mut self, frame_speed: u32) {
        self.frame_speed = frame_speed.max(1);
    }
}

/// Which animation the avatar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Running,
    Rising,
    Falling,
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// World scroll speed (pixels per tick)
    pub speed: u32,
    pub is_jumping: bool,
    pub is_falling: bool,
    pub gravity: f32,
    pub jump_impulse: f32,
    jump_hold_frames: u32,
    /// Frames left in which a held jump keeps lifting
    jump_counter: u32,
    pub pose: Pose,
    pub run_anim: Animation,
    rise_anim: Animation,
    fall_anim: Animation,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            body: Body::new(tuning.player_start, tuning.player_size),
            speed: tuning.initial_speed,
            is_jumping: false,
            is_falling: false,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            jump_hold_frames: tuning.jump_hold_frames,
            jump_counter: 0,
            pose: Pose::Running,
            run_anim: Animation::new(4, 0, 15),
            rise_anim: Animation::new(4, 15, 15),
            fall_anim: Animation::new(4, 11, 11),
        }
    }

    #[inline]
    pub fn dy(&self) -> f32 {
        self.body.vel.y
    }

    pub fn jump_counter(&self) -> u32 {
        self.jump_counter
    }

    /// Advance one tick of jump physics. Returns true when a jump starts.
    ///
    /// Gravity is applied before any impulse so the velocity left on the
    /// avatar is the one it moved by this tick.
    pub fn update(&mut self, jump_held: bool) -> bool {
        if self.is_falling || self.is_jumping {
            self.body.vel.y += self.gravity;
        }

        let mut jumped = false;
        if jump_held && self.body.vel.y == 0.0 && !self.is_jumping {
            self.is_jumping = true;
            self.body.vel.y = self.jump_impulse;
            self.jump_counter = self.jump_hold_frames;
            jumped = true;
        }

        // Holding the button keeps lifting until the counter runs out
        if jump_held && self.jump_counter > 0 {
            self.body.vel.y = self.jump_impulse;
        }
        self.jump_counter = self.jump_counter.saturating_sub(1);

        self.body.advance();

        self.pose = if self.body.vel.y > 0.0 {
            Pose::Falling
        } else if self.body.vel.y < 0.0 {
            Pose::Rising
        } else {
            Pose::Running
        };
        self.animation_mut().update();

        jumped
    }

    /// Rest the avatar on a surface whose top is at `y`
    pub fn land(&mut self, y: f32) {
        self.is_jumping = false;
        self.is_falling = false;
        self.body.pos.y = y;
        self.body.vel.y = 0.0;
    }

    /// Retime the running cycle for a new scroll speed
    pub fn set_speed(&mut self, speed: u32, tile_size: f32) {
        self.speed = speed;
        let ticks_per_tile = (tile_size / speed.max(1) as f32).floor() as u32;
        self.run_anim.set_frame_speed(ticks_per_tile.saturating_sub(1));
    }

    pub fn animation(&self) -> &Animation {
        match self.pose {
            Pose::Running => &self.run_anim,
            Pose::Rising => &self.rise_anim,
            Pose::Falling => &self.fall_anim,
        }
    }

    fn animation_mut(&mut self) -> &mut Animation {
        match self.pose {
            Pose::Running => &mut self.run_anim,
            Pose::Rising => &mut self.rise_anim,
            Pose::Falling => &mut self.fall_anim,
        }
    }

    /// Top-left of the avatar
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }
}
