//! Force laws acting on a single particle
//!
//! Both forces assume unit mass, so they are returned directly as
//! accelerations.

use crate::constants::REPULSION_SOFTENING;
use glam::Vec2;

/// Hookean spring towards the home position
/// a = (home - position) * pull_factor
pub fn restoring_force(position: Vec2, home: Vec2, pull_factor: f32) -> Vec2 {
    (home - position) * pull_factor
}

/// Linear repulsion away from the pointer, active inside `min_distance`
/// a = (d / |d|) * (min_distance - |d|) * push_factor,  d = position - pointer
///
/// Zero at and beyond `min_distance`. A particle sitting exactly on the
/// pointer has no defined direction and gets no push.
pub fn repulsion_force(position: Vec2, pointer: Vec2, min_distance: f32, push_factor: f32) -> Vec2 {
    let offset = position - pointer;
    let dist = offset.length();

    // Also rejects NaN distances.
    if !(REPULSION_SOFTENING..min_distance).contains(&dist) {
        return Vec2::ZERO;
    }

    (offset / dist) * (min_distance - dist) * push_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restoring_force_points_home() {
        let force = restoring_force(Vec2::new(200.0, 100.0), Vec2::new(100.0, 100.0), 0.01);
        assert!((force.x + 1.0).abs() < 1e-6);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_restoring_force_zero_at_home() {
        let home = Vec2::new(42.0, -7.0);
        assert_eq!(restoring_force(home, home, 0.5), Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_zero_outside_radius() {
        let pointer = Vec2::ZERO;
        assert_eq!(repulsion_force(Vec2::new(80.0, 0.0), pointer, 80.0, 0.02), Vec2::ZERO);
        assert_eq!(repulsion_force(Vec2::new(0.0, 500.0), pointer, 80.0, 0.02), Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_points_away_from_pointer() {
        let force = repulsion_force(Vec2::new(10.0, 0.0), Vec2::ZERO, 80.0, 0.02);
        assert!(force.x > 0.0);
        assert_eq!(force.y, 0.0);
        // (80 - 10) * 0.02
        assert!((force.x - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_repulsion_vanishes_near_boundary() {
        let near = repulsion_force(Vec2::new(0.0, 79.999), Vec2::ZERO, 80.0, 0.02);
        assert!(near.y > 0.0);
        assert!(near.length() < 1e-4);
    }

    #[test]
    fn test_repulsion_grows_with_penetration() {
        let shallow = repulsion_force(Vec2::new(60.0, 0.0), Vec2::ZERO, 80.0, 0.02);
        let deep = repulsion_force(Vec2::new(20.0, 0.0), Vec2::ZERO, 80.0, 0.02);
        assert!(deep.length() > shallow.length());
    }

    #[test]
    fn test_repulsion_skipped_at_zero_distance() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(repulsion_force(p, p, 80.0, 0.02), Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_zero_from_sentinel() {
        let far = Vec2::splat(1.0e6);
        let force = repulsion_force(far, Vec2::splat(crate::POINTER_SENTINEL), 1.0e5, 0.03);
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_ignores_nan_pointer() {
        let force = repulsion_force(Vec2::ZERO, Vec2::new(f32::NAN, 0.0), 80.0, 0.02);
        assert_eq!(force, Vec2::ZERO);
    }
}
