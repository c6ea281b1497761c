//! Drawing seam between the field and whatever renders it

use crate::color::Color;
use field_physics::Particle;

/// A surface the field draws onto.
///
/// Implementations only visualize state; nothing flows back into the physics.
pub trait Canvas {
    /// Fill the whole surface, covering whatever was drawn before
    fn fill_background(&mut self, color: Color);

    /// Draw one particle at its current position, rotation and appearance
    fn draw_particle(&mut self, particle: &Particle);
}
