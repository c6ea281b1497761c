//! Field parameters and the built-in presets

use crate::color::{pomegranate, Palette};
use crate::error::ParamsError;
use crate::layout::Layout;
use crate::pointer::EngageOn;
use field_physics::{Appearance, Behavior, Particle, Shape, LOBE_COUNT};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Half-open sampling range `[min, max)`. A range with `min == max` always
/// yields `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spread {
    pub min: f32,
    pub max: f32,
}

impl Spread {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    fn check(&self, name: &'static str) -> Result<(), ParamsError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ParamsError::InvalidSpread {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Outline family for seeded particles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeStyle {
    Disc,
    /// Lobed outline; each lobe radius is scaled by a draw from `irregularity`
    Aril { irregularity: Spread },
}

/// Everything needed to seed a field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Logical drawing surface in field units
    pub size: Vec2,
    pub layout: Layout,
    pub radius: Spread,

    // Behavior ranges, sampled independently per particle
    pub min_distance: Spread,
    pub push_factor: Spread,
    pub pull_factor: Spread,
    pub damp_factor: Spread,

    pub palette: Palette,
    pub shape: ShapeStyle,
    /// Rotation gained per unit of horizontal velocity
    pub spin: f32,
    /// Start each particle at a random rotation instead of zero
    pub random_rotation: bool,
    /// Host signal that starts pointer engagement
    pub engage_on: EngageOn,
}

impl FieldParams {
    /// Wide band of round red dots on a 45x15 grid. The pointer engages as
    /// soon as it enters the window.
    pub fn band() -> Self {
        Self {
            size: Vec2::new(1200.0, 400.0),
            layout: Layout::Grid {
                columns: 45,
                rows: 15,
                margin: Vec2::ZERO,
                jitter: 5.0,
            },
            radius: Spread::fixed(10.0),
            min_distance: Spread::new(100.0, 200.0),
            push_factor: Spread::new(0.015, 0.03),
            pull_factor: Spread::fixed(0.01),
            damp_factor: Spread::new(0.90, 0.92),
            palette: Palette::Pick(pomegranate()),
            shape: ShapeStyle::Disc,
            spin: 0.0,
            random_rotation: false,
            engage_on: EngageOn::Enter,
        }
    }

    /// 250 lobed, slowly spinning arils scattered in a disc. The pointer
    /// engages while a mouse button is held.
    pub fn arils() -> Self {
        Self {
            size: Vec2::new(1080.0, 1080.0),
            layout: Layout::Disc {
                count: 250,
                radius: 300.0,
            },
            radius: Spread::new(8.0, 12.0),
            min_distance: Spread::fixed(80.0),
            push_factor: Spread::fixed(0.015),
            pull_factor: Spread::fixed(0.003),
            damp_factor: Spread::fixed(0.95),
            palette: Palette::Hsl {
                hue: Spread::new(350.0, 355.0),
                saturation: Spread::new(85.0, 95.0),
                lightness: Spread::new(45.0, 55.0),
            },
            shape: ShapeStyle::Aril {
                irregularity: Spread::new(0.8, 1.2),
            },
            spin: 0.1,
            random_rotation: true,
            engage_on: EngageOn::Press,
        }
    }

    /// Same parameters on a differently sized surface. Layouts are relative
    /// to the size, so the field is re-laid out when seeded.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.size.is_finite() || self.size.min_element() <= 0.0 {
            return Err(ParamsError::InvalidSize {
                width: self.size.x,
                height: self.size.y,
            });
        }
        self.layout.validate()?;

        self.radius.check("radius")?;
        if self.radius.min < 0.0 {
            return Err(ParamsError::InvalidSpread {
                name: "radius",
                min: self.radius.min,
                max: self.radius.max,
            });
        }

        self.min_distance.check("min distance")?;
        self.push_factor.check("push factor")?;
        self.pull_factor.check("pull factor")?;
        self.damp_factor.check("damp factor")?;

        // Behavior validity is checked per parameter, so both corners cover
        // the whole box.
        Behavior::new(
            self.min_distance.min,
            self.push_factor.min,
            self.pull_factor.min,
            self.damp_factor.min,
        )?;
        Behavior::new(
            self.min_distance.max,
            self.push_factor.max,
            self.pull_factor.max,
            self.damp_factor.max,
        )?;

        match &self.palette {
            Palette::Pick(colors) if colors.is_empty() => return Err(ParamsError::EmptyPalette),
            Palette::Pick(_) => {}
            Palette::Hsl {
                hue,
                saturation,
                lightness,
            } => {
                hue.check("hue")?;
                saturation.check("saturation")?;
                lightness.check("lightness")?;
            }
        }

        if let ShapeStyle::Aril { irregularity } = self.shape {
            irregularity.check("irregularity")?;
            if irregularity.min < 0.0 {
                return Err(ParamsError::InvalidSpread {
                    name: "irregularity",
                    min: irregularity.min,
                    max: irregularity.max,
                });
            }
        }

        if !self.spin.is_finite() {
            return Err(ParamsError::InvalidLayout("spin must be finite"));
        }

        Ok(())
    }

    /// Build one particle resting at `home`, drawing its radius, behavior and
    /// looks from `rng`
    pub fn particle_at<R: Rng + ?Sized>(
        &self,
        home: Vec2,
        rng: &mut R,
    ) -> Result<Particle, ParamsError> {
        let radius = self.radius.sample(rng);
        let behavior = Behavior::new(
            self.min_distance.sample(rng),
            self.push_factor.sample(rng),
            self.pull_factor.sample(rng),
            self.damp_factor.sample(rng),
        )?;
        let color = self.palette.sample(rng).ok_or(ParamsError::EmptyPalette)?;
        let shape = match self.shape {
            ShapeStyle::Disc => Shape::Disc,
            ShapeStyle::Aril { irregularity } => Shape::Aril {
                lobes: std::array::from_fn::<f32, LOBE_COUNT, _>(|_| irregularity.sample(rng)),
            },
        };
        let rotation = if self.random_rotation {
            rng.random_range(0.0..TAU)
        } else {
            0.0
        };

        Ok(Particle::new(home, radius, behavior)
            .with_rotation(rotation)
            .with_appearance(Appearance {
                color: color.to_array(),
                spin: self.spin,
                shape,
            }))
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::band()
    }
}
