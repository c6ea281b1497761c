//! Default constants for the force model
//!
//! Distances are in field units (pixels of the logical drawing surface) and
//! factors are applied once per frame, so there is no time step anywhere.

/// Coordinate used for both pointer axes while no pointer is engaged.
/// Infinitely far from every particle, whatever the field size.
pub const POINTER_SENTINEL: f32 = f32::INFINITY;

/// Below this pointer distance the repulsion direction is undefined and the
/// repulsion term is skipped
pub const REPULSION_SOFTENING: f32 = 1.0e-6;

/// Radius of influence of the pointer
pub const DEFAULT_MIN_DISTANCE: f32 = 80.0;

/// Repulsion strength per unit of penetration into the influence radius
pub const DEFAULT_PUSH_FACTOR: f32 = 0.015;

/// Spring stiffness towards the home position
pub const DEFAULT_PULL_FACTOR: f32 = 0.003;

/// Per-frame velocity retention, must stay inside (0, 1)
pub const DEFAULT_DAMP_FACTOR: f32 = 0.95;

/// Number of outline samples for lobed particles
pub const LOBE_COUNT: usize = 8;
