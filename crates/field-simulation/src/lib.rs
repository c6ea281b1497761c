//! # Field Simulation
//!
//! Owns the particle field: seeded placement, per-frame stepping, drawing
//! through a [`Canvas`], and translation of host pointer input into field
//! coordinates.

pub mod canvas;
pub mod color;
pub mod error;
pub mod field;
pub mod layout;
pub mod params;
pub mod pointer;

pub use canvas::*;
pub use color::*;
pub use error::*;
pub use field::*;
pub use layout::*;
pub use params::*;
pub use pointer::*;
