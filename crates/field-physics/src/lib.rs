//! # Field Physics
//!
//! Per-particle force model for the breathing field: a damped spring pulling
//! each particle back to its home position, plus a short-range linear
//! repulsion away from the pointer.

pub mod constants;
pub mod error;
pub mod forces;
pub mod particle;
pub mod pointer;

pub use constants::*;
pub use error::*;
pub use forces::*;
pub use particle::*;
pub use pointer::*;
