//! The pointer as seen by the force model

use crate::constants::POINTER_SENTINEL;
use glam::Vec2;

/// Position of the single pointer in field coordinates.
///
/// While nothing is engaged the pointer sits at a sentinel far outside every
/// particle's influence radius, so the repulsion term vanishes on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    position: Vec2,
}

impl Pointer {
    /// Disengaged pointer
    pub const SENTINEL: Self = Self {
        position: Vec2::splat(POINTER_SENTINEL),
    };

    /// Pointer engaged at `position`
    pub const fn at(position: Vec2) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether this pointer is somewhere other than the sentinel
    pub fn is_engaged(&self) -> bool {
        *self != Self::SENTINEL
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sentinel() {
        let pointer = Pointer::default();
        assert_eq!(pointer.position(), Vec2::splat(POINTER_SENTINEL));
        assert!(!pointer.is_engaged());
    }

    #[test]
    fn test_engaged_pointer() {
        let pointer = Pointer::at(Vec2::new(12.0, 34.0));
        assert!(pointer.is_engaged());
        assert_eq!(pointer.position(), Vec2::new(12.0, 34.0));
    }
}
