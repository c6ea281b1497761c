//! GPU instance layout for one particle

use field_physics::{Particle, Shape, LOBE_COUNT};
use std::mem::offset_of;

/// Shape ids understood by the particle shader
pub const SHAPE_DISC: u32 = 0;
pub const SHAPE_ARIL: u32 = 1;

/// Per-particle instance data.
///
/// The fragment shader turns each instance quad into either a circle or an
/// eight-lobed outline with a radial highlight.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// Center in field units
    pub position: [f32; 2],
    pub radius: f32,
    /// Radians, counter-clockwise in field space
    pub rotation: f32,
    /// Linear RGBA, straight alpha
    pub color: [f32; 4],
    /// Lobe radius multipliers 0..4
    pub lobes_a: [f32; 4],
    /// Lobe radius multipliers 4..8
    pub lobes_b: [f32; 4],
    /// SHAPE_DISC or SHAPE_ARIL
    pub shape: u32,
    /// Padding for 16-byte alignment
    pub _padding: [u32; 3],
}

impl ParticleInstance {
    /// Vertex buffer layout for instance attributes (locations 1..=7;
    /// location 0 is the unit quad corner)
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: offset_of!(ParticleInstance, position) as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: offset_of!(ParticleInstance, radius) as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32,
            },
            wgpu::VertexAttribute {
                offset: offset_of!(ParticleInstance, rotation) as wgpu::BufferAddress,
                shader_location: 3,
                format: wgpu::VertexFormat::Float32,
            },
            wgpu::VertexAttribute {
                offset: offset_of!(ParticleInstance, color) as wgpu::BufferAddress,
                shader_location: 4,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: offset_of!(ParticleInstance, lobes_a) as wgpu::BufferAddress,
                shader_location: 5,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: offset_of!(ParticleInstance, lobes_b) as wgpu::BufferAddress,
                shader_location: 6,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: offset_of!(ParticleInstance, shape) as wgpu::BufferAddress,
                shader_location: 7,
                format: wgpu::VertexFormat::Uint32,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

impl From<&Particle> for ParticleInstance {
    fn from(particle: &Particle) -> Self {
        let (shape, lobes) = match particle.appearance.shape {
            Shape::Disc => (SHAPE_DISC, [1.0; LOBE_COUNT]),
            Shape::Aril { lobes } => (SHAPE_ARIL, lobes),
        };

        Self {
            position: particle.position.to_array(),
            radius: particle.radius(),
            rotation: particle.rotation,
            color: particle.appearance.color,
            lobes_a: [lobes[0], lobes[1], lobes[2], lobes[3]],
            lobes_b: [lobes[4], lobes[5], lobes[6], lobes[7]],
            shape,
            _padding: [0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_physics::{Appearance, Behavior};
    use glam::Vec2;

    #[test]
    fn test_instance_is_80_bytes() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 80);
        assert_eq!(offset_of!(ParticleInstance, shape), 64);
    }

    #[test]
    fn test_disc_instance() {
        let mut particle = Particle::new(Vec2::new(3.0, 4.0), 6.0, Behavior::default());
        particle.position = Vec2::new(5.0, 7.0);
        let instance = ParticleInstance::from(&particle);

        assert_eq!(instance.position, [5.0, 7.0]);
        assert_eq!(instance.radius, 6.0);
        assert_eq!(instance.shape, SHAPE_DISC);
        assert_eq!(instance.lobes_a, [1.0; 4]);
    }

    #[test]
    fn test_aril_instance_splits_lobes() {
        let lobes = [0.8, 0.9, 1.0, 1.1, 1.2, 1.15, 1.05, 0.85];
        let particle = Particle::new(Vec2::ZERO, 10.0, Behavior::default())
            .with_rotation(0.5)
            .with_appearance(Appearance {
                color: [0.6, 0.1, 0.1, 1.0],
                spin: 0.1,
                shape: Shape::Aril { lobes },
            });
        let instance = ParticleInstance::from(&particle);

        assert_eq!(instance.shape, SHAPE_ARIL);
        assert_eq!(instance.rotation, 0.5);
        assert_eq!(instance.color, [0.6, 0.1, 0.1, 1.0]);
        assert_eq!(instance.lobes_a, [0.8, 0.9, 1.0, 1.1]);
        assert_eq!(instance.lobes_b, [1.2, 1.15, 1.05, 0.85]);
    }
}
