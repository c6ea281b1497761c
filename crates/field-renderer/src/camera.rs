//! Camera mapping field coordinates onto the window

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Window pixels per field unit on each axis, for edge anti-aliasing
    pub pixels_per_unit: [f32; 2],
    pub _padding: [f32; 2],
}

/// Orthographic 2D camera.
///
/// The whole field is stretched over the window with y pointing down, so a
/// window pixel maps back to field units by the same per-axis scale the
/// pointer tracker uses.
pub struct Camera {
    pub field_size: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(field_size: Vec2, width: u32, height: u32) -> Self {
        Self {
            field_size,
            viewport: Vec2::new(width as f32, height as f32),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
    }

    pub fn pixels_per_unit(&self) -> Vec2 {
        self.viewport.max(Vec2::ONE) / self.field_size
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.field_size.x, self.field_size.y, 0.0, -1.0, 1.0)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
            pixels_per_unit: self.pixels_per_unit().to_array(),
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn clip(camera: &Camera, p: Vec2) -> Vec2 {
        camera
            .build_view_projection_matrix()
            .project_point3(Vec3::new(p.x, p.y, 0.0))
            .truncate()
    }

    #[test]
    fn test_field_corners_map_to_clip_corners() {
        let camera = Camera::new(Vec2::new(1200.0, 400.0), 1920, 1080);
        let top_left = clip(&camera, Vec2::ZERO);
        let bottom_right = clip(&camera, Vec2::new(1200.0, 400.0));

        assert!((top_left - Vec2::new(-1.0, 1.0)).length() < 1e-5);
        assert!((bottom_right - Vec2::new(1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_pixels_per_unit_follows_resize() {
        let mut camera = Camera::new(Vec2::new(1200.0, 400.0), 600, 400);
        assert_eq!(camera.pixels_per_unit(), Vec2::new(0.5, 1.0));
        camera.resize(2400, 800);
        assert_eq!(camera.pixels_per_unit(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_uniform_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
    }
}
