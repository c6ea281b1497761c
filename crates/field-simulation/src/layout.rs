//! One-time placement of home positions

use crate::error::ParamsError;
use crate::params::Spread;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Strategy for seeding home positions inside the field bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layout {
    /// Evenly spaced rows and columns spanning the field, each point nudged
    /// by up to `jitter` on both axes. `margin` is a fraction of the field
    /// size left empty on each side.
    Grid {
        columns: usize,
        rows: usize,
        margin: Vec2,
        jitter: f32,
    },
    /// `count` points scattered uniformly inside a circle of `radius` around
    /// the field center
    Disc { count: usize, radius: f32 },
}

impl Layout {
    /// Number of home positions this layout produces
    pub fn len(&self) -> usize {
        match *self {
            Layout::Grid { columns, rows, .. } => columns * rows,
            Layout::Disc { count, .. } => count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        match *self {
            Layout::Grid {
                columns,
                rows,
                margin,
                jitter,
            } => {
                if columns == 0 || rows == 0 {
                    return Err(ParamsError::EmptyGrid { columns, rows });
                }
                if !margin.is_finite() || margin.min_element() < 0.0 || margin.max_element() >= 0.5 {
                    return Err(ParamsError::InvalidLayout("grid margin must lie in [0, 0.5)"));
                }
                if !jitter.is_finite() || jitter < 0.0 {
                    return Err(ParamsError::InvalidLayout("grid jitter must not be negative"));
                }
            }
            Layout::Disc { radius, .. } => {
                if !radius.is_finite() || radius < 0.0 {
                    return Err(ParamsError::InvalidLayout("disc radius must not be negative"));
                }
            }
        }
        Ok(())
    }

    /// Generate home positions for a field of the given size.
    ///
    /// Grid points come out row by row, left to right.
    pub fn positions<R: Rng + ?Sized>(&self, size: Vec2, rng: &mut R) -> Vec<Vec2> {
        match *self {
            Layout::Grid {
                columns,
                rows,
                margin,
                jitter,
            } => {
                let nudge = Spread::new(-jitter, jitter);
                let mut positions = Vec::with_capacity(columns * rows);
                for row in 0..rows {
                    for column in 0..columns {
                        let x = grid_axis(column, columns, size.x, margin.x) + nudge.sample(rng);
                        let y = grid_axis(row, rows, size.y, margin.y) + nudge.sample(rng);
                        positions.push(Vec2::new(x, y));
                    }
                }
                positions
            }
            Layout::Disc { count, radius } => {
                let center = size * 0.5;
                (0..count)
                    .map(|_| {
                        let theta = rng.random::<f32>() * TAU;
                        // sqrt keeps the density uniform over the area
                        let r = rng.random::<f32>().sqrt() * radius;
                        center + Vec2::from_angle(theta) * r
                    })
                    .collect()
            }
        }
    }
}

/// Coordinate of grid line `index` out of `count` along an axis of `extent`.
/// A single line sits in the middle.
fn grid_axis(index: usize, count: usize, extent: f32, margin: f32) -> f32 {
    if count <= 1 {
        return extent * 0.5;
    }
    let start = extent * margin;
    let spacing = extent * (1.0 - 2.0 * margin) / (count - 1) as f32;
    start + index as f32 * spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_without_jitter_spans_field() {
        let layout = Layout::Grid {
            columns: 5,
            rows: 3,
            margin: Vec2::ZERO,
            jitter: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let positions = layout.positions(Vec2::new(400.0, 200.0), &mut rng);

        assert_eq!(positions.len(), 15);
        assert_eq!(positions[0], Vec2::new(0.0, 0.0));
        assert_eq!(positions[4], Vec2::new(400.0, 0.0));
        assert_eq!(positions[5], Vec2::new(0.0, 100.0));
        assert_eq!(positions[14], Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_grid_margin_insets_points() {
        let layout = Layout::Grid {
            columns: 3,
            rows: 2,
            margin: Vec2::new(0.1, 0.25),
            jitter: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let positions = layout.positions(Vec2::new(100.0, 100.0), &mut rng);

        assert_eq!(positions[0], Vec2::new(10.0, 25.0));
        assert_eq!(positions[2], Vec2::new(90.0, 25.0));
        assert_eq!(positions[5], Vec2::new(90.0, 75.0));
    }

    #[test]
    fn test_grid_jitter_is_bounded() {
        let layout = Layout::Grid {
            columns: 10,
            rows: 4,
            margin: Vec2::ZERO,
            jitter: 5.0,
        };
        let mut rng = StdRng::seed_from_u64(99);
        let size = Vec2::new(900.0, 300.0);
        let positions = layout.positions(size, &mut rng);

        for (i, p) in positions.iter().enumerate() {
            let exact = Vec2::new(
                grid_axis(i % 10, 10, size.x, 0.0),
                grid_axis(i / 10, 4, size.y, 0.0),
            );
            let offset = *p - exact;
            assert!(offset.x.abs() <= 5.0 + 1e-3 && offset.y.abs() <= 5.0 + 1e-3);
        }
    }

    #[test]
    fn test_single_column_is_centered() {
        assert_eq!(grid_axis(0, 1, 300.0, 0.0), 150.0);
    }

    #[test]
    fn test_disc_stays_inside_radius() {
        let layout = Layout::Disc {
            count: 500,
            radius: 300.0,
        };
        let mut rng = StdRng::seed_from_u64(5);
        let size = Vec2::new(1080.0, 1080.0);
        let positions = layout.positions(size, &mut rng);

        assert_eq!(positions.len(), 500);
        for p in positions {
            assert!(p.distance(size * 0.5) <= 300.0 + 1e-3);
        }
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let layout = Layout::Grid {
            columns: 0,
            rows: 4,
            margin: Vec2::ZERO,
            jitter: 0.0,
        };
        assert_eq!(
            layout.validate(),
            Err(ParamsError::EmptyGrid { columns: 0, rows: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_wide_margin() {
        let layout = Layout::Grid {
            columns: 2,
            rows: 2,
            margin: Vec2::new(0.5, 0.0),
            jitter: 0.0,
        };
        assert!(matches!(layout.validate(), Err(ParamsError::InvalidLayout(_))));
    }
}
