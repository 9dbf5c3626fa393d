//! Moving axis-aligned boxes
//!
//! Every entity in the world is a [`Body`]: a top-left position, a per-tick
//! velocity and a size. Collision checks compare bodies by the distance
//! between their centres while both travel one tick of velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, per-tick velocity and extent of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    /// Change in position per tick
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True once the right edge has scrolled past the left boundary
    #[inline]
    pub fn is_off_left(&self) -> bool {
        self.right() < 0.0
    }

    /// Approximate closest approach of the two centres over one tick
    ///
    /// Both centres are swept along their velocities and sampled at
    /// `1 / max(|dx|, |dy|, |other.dx|, |other.dy|)` steps of the
    /// interpolation parameter in `[0, 1)`, so faster bodies get finer
    /// sampling. With no motion at all the static centre distance is
    /// returned.
    pub fn min_distance(&self, other: &Body) -> f32 {
        let fastest = self
            .vel
            .abs()
            .max_element()
            .max(other.vel.abs().max_element())
            .max(1.0);
        let steps = fastest.ceil() as u32;

        let a = self.center();
        let b = other.center();

        let mut min_sq = f32::INFINITY;
        for i in 0..steps {
            let t = i as f32 / fastest;
            let delta = (a + self.vel * t) - (b + other.vel * t);
            min_sq = min_sq.min(delta.length_squared());
        }
        min_sq.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::splat(32.0))
    }

    #[test]
    fn test_advance() {
        let mut body = tile(10.0, 20.0);
        body.vel = Vec2::new(-6.0, 2.5);
        body.advance();
        assert_eq!(body.pos, Vec2::new(4.0, 22.5));
        body.advance();
        assert_eq!(body.pos, Vec2::new(-2.0, 25.0));
    }

    #[test]
    fn test_static_distance() {
        let a = tile(0.0, 0.0);
        let b = tile(30.0, 40.0);
        assert!((a.min_distance(&b) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_distance_uses_centres() {
        let player = Body::new(Vec2::new(0.0, 0.0), Vec2::new(60.0, 96.0));
        let block = tile(14.0, 32.0);
        // Both centres sit at (30, 48)
        assert!(player.min_distance(&block) < 1e-4);
    }

    #[test]
    fn test_sweep_finds_closer_point() {
        // `b` moves 10 px left per tick, passing over `a`'s centre at t = 0.5
        let a = tile(0.0, 0.0);
        let mut b = tile(5.0, 0.0);
        b.vel = Vec2::new(-10.0, 0.0);
        assert!(a.min_distance(&b) < 1e-4);
    }

    #[test]
    fn test_sweep_excludes_end_of_step() {
        // The end point (t = 1) is not sampled
        let a = tile(0.0, 0.0);
        let mut b = tile(10.0, 0.0);
        b.vel = Vec2::new(-10.0, 0.0);
        assert!((a.min_distance(&b) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_symmetric() {
        let mut a = tile(0.0, 0.0);
        a.vel = Vec2::new(0.0, -9.0);
        let mut b = tile(40.0, -30.0);
        b.vel = Vec2::new(-6.0, 0.0);
        assert!((a.min_distance(&b) - b.min_distance(&a)).abs() < 1e-4);
    }

    #[test]
    fn test_off_left() {
        assert!(!tile(-32.0, 0.0).is_off_left());
        assert!(tile(-32.5, 0.0).is_off_left());
        assert!(!tile(100.0, 0.0).is_off_left());
    }
}
