//! The particle field and its frame loop

use crate::canvas::Canvas;
use crate::error::ParamsError;
use crate::params::FieldParams;
use field_physics::{Particle, Pointer};
use glam::Vec2;
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ordered collection of independent particles on a fixed-size surface
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    size: Vec2,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(size: Vec2, particles: Vec<Particle>) -> Self {
        Self { size, particles }
    }

    /// Lay out and build every particle from `params`, drawing all random
    /// choices from `rng`. The same seed always yields the same field.
    pub fn seed<R: Rng + ?Sized>(params: &FieldParams, rng: &mut R) -> Result<Self, ParamsError> {
        params.validate()?;

        let homes = params.layout.positions(params.size, rng);
        let particles = homes
            .into_iter()
            .map(|home| params.particle_at(home, rng))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "✓ Seeded {} particles on a {}x{} field",
            particles.len(),
            params.size.x,
            params.size.y
        );

        Ok(Self::new(params.size, particles))
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Sum of squared speeds over two (unit masses)
    pub fn kinetic_energy(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| 0.5 * p.velocity.length_squared())
            .sum()
    }

    /// Advance every particle one frame without drawing
    pub fn step(&mut self, pointer: Pointer) {
        #[cfg(feature = "parallel")]
        self.particles
            .par_iter_mut()
            .for_each(|particle| particle.update(pointer));

        #[cfg(not(feature = "parallel"))]
        for particle in &mut self.particles {
            particle.update(pointer);
        }
    }

    /// Draw every particle in order. Returns the number drawn.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> usize {
        for particle in &self.particles {
            canvas.draw_particle(particle);
        }
        self.particles.len()
    }

    /// One animation frame: update then draw each particle in turn.
    /// Returns the number drawn.
    pub fn frame<C: Canvas + ?Sized>(&mut self, pointer: Pointer, canvas: &mut C) -> usize {
        for particle in &mut self.particles {
            particle.update(pointer);
            canvas.draw_particle(particle);
        }
        self.particles.len()
    }
}
