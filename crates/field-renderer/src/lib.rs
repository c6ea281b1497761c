//! # Field Renderer
//!
//! wgpu backend for the breathing field: one instanced quad per particle,
//! shaded into a disc or a lobed aril by the fragment shader.

pub mod background;
pub mod camera;
pub mod error;
pub mod instance;
pub mod renderer;

pub use background::*;
pub use camera::*;
pub use error::*;
pub use instance::*;
pub use renderer::*;
