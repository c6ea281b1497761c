//! Particle record and its per-frame integration step

use crate::constants::*;
use crate::error::BehaviorError;
use crate::forces::{repulsion_force, restoring_force};
use crate::pointer::Pointer;
use glam::Vec2;

/// Per-particle force parameters, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Behavior {
    min_distance: f32,
    push_factor: f32,
    pull_factor: f32,
    damp_factor: f32,
}

impl Behavior {
    /// Validate and build a behavior.
    ///
    /// `damp_factor` must lie strictly inside (0, 1); at 1 or above nothing
    /// dissipates energy and the velocity never settles.
    pub fn new(
        min_distance: f32,
        push_factor: f32,
        pull_factor: f32,
        damp_factor: f32,
    ) -> Result<Self, BehaviorError> {
        for (name, value) in [
            ("min distance", min_distance),
            ("push factor", push_factor),
            ("pull factor", pull_factor),
            ("damp factor", damp_factor),
        ] {
            if !value.is_finite() {
                return Err(BehaviorError::NonFinite(name));
            }
            if value < 0.0 {
                return Err(BehaviorError::Negative { name, value });
            }
        }

        if damp_factor <= 0.0 || damp_factor >= 1.0 {
            return Err(BehaviorError::DampFactorOutOfRange(damp_factor));
        }

        Ok(Self {
            min_distance,
            push_factor,
            pull_factor,
            damp_factor,
        })
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn push_factor(&self) -> f32 {
        self.push_factor
    }

    pub fn pull_factor(&self) -> f32 {
        self.pull_factor
    }

    pub fn damp_factor(&self) -> f32 {
        self.damp_factor
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            push_factor: DEFAULT_PUSH_FACTOR,
            pull_factor: DEFAULT_PULL_FACTOR,
            damp_factor: DEFAULT_DAMP_FACTOR,
        }
    }
}

/// Outline drawn for a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Plain filled circle
    Disc,
    /// Irregular outline: one radius multiplier per lobe, evenly spaced
    /// around the particle, plus a soft highlight
    Aril { lobes: [f32; LOBE_COUNT] },
}

/// Rendering-only state. Never fed back into the physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Linear RGBA
    pub color: [f32; 4],
    /// Rotation gained per unit of horizontal velocity
    pub spin: f32,
    pub shape: Shape,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
            spin: 0.0,
            shape: Shape::Disc,
        }
    }
}

/// A point mass tethered to its home position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current location
    pub position: Vec2,
    /// Rest location, fixed at construction
    home: Vec2,
    /// Carried across frames
    pub velocity: Vec2,
    /// Recomputed from scratch every frame
    pub acceleration: Vec2,
    radius: f32,
    behavior: Behavior,
    /// Rendering rotation in radians
    pub rotation: f32,
    pub appearance: Appearance,
}

impl Particle {
    /// Create a particle at rest on its home position
    pub fn new(home: Vec2, radius: f32, behavior: Behavior) -> Self {
        Self {
            position: home,
            home,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            behavior,
            rotation: 0.0,
            appearance: Appearance::default(),
        }
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Offset from the home position
    pub fn displacement(&self) -> Vec2 {
        self.position - self.home
    }

    /// Advance one frame (semi-implicit Euler).
    ///
    /// Acceleration is rebuilt from the current position, folded into the
    /// velocity, damped, and only then applied to the position. Changing
    /// this order changes the numerics.
    pub fn update(&mut self, pointer: Pointer) {
        let behavior = self.behavior;

        self.acceleration = restoring_force(self.position, self.home, behavior.pull_factor);
        self.acceleration += repulsion_force(
            self.position,
            pointer.position(),
            behavior.min_distance,
            behavior.push_factor,
        );

        self.velocity += self.acceleration;
        self.velocity *= behavior.damp_factor;

        self.position += self.velocity;

        self.rotation += self.velocity.x * self.appearance.spin;
    }
}
