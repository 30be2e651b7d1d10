//! Atom entity
//!
//! An atom owns its position, velocity, fixed collision radius, and the
//! sphere sprite rendered once at construction.

use glam::Vec2;

use crate::render::{Rgb, SphereSprite};

/// A simulated circular particle.
///
/// `radius` and `sprite` are fixed at construction; position moves only in
/// [`Atom::advance`], velocity is rewritten by `advance` (wall bounce) and
/// by the collision engine.
#[derive(Debug, Clone)]
pub struct Atom {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    sprite: SphereSprite,
}

impl Atom {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgb, shininess: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            sprite: SphereSprite::generate(color, radius, shininess),
        }
    }

    /// Collision radius in pixels.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn sprite(&self) -> &SphereSprite {
        &self.sprite
    }

    /// Euclidean distance between centers.
    pub fn distance(&self, other: &Atom) -> f32 {
        self.pos.distance(other.pos)
    }

    /// Advance one tick (`pos += vel`), then ricochet off the viewport walls.
    ///
    /// Each axis is checked independently after the positional update: a
    /// velocity component is negated when the atom's leading edge has reached
    /// the boundary and the component still points outward. The position is
    /// checked, not clamped, so it can overshoot by up to one tick's velocity.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.pos += self.vel;
        if self.pos.x - self.radius <= 0.0 && self.vel.x <= 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.x + self.radius >= width && self.vel.x >= 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius <= 0.0 && self.vel.y <= 0.0 {
            self.vel.y = -self.vel.y;
        }
        if self.pos.y + self.radius >= height && self.vel.y >= 0.0 {
            self.vel.y = -self.vel.y;
        }
    }
}
