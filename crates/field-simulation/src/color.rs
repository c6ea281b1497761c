//! Colors and the palettes particles draw from

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::params::Spread;

/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Convert an sRGB color (0-255) with straight alpha to linear space
    pub fn from_srgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::new(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
            a,
        )
    }

    /// Convert CSS-style HSL (hue in degrees, saturation and lightness in
    /// percent) to linear space
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, a: f32) -> Self {
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);
        let h = hue.rem_euclid(360.0) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;

        Self::new(
            srgb_to_linear(r + m),
            srgb_to_linear(g + m),
            srgb_to_linear(b + m),
            a,
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Standard sRGB transfer function (IEC 61966-2-1)
fn srgb_to_linear(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Five reds of a pomegranate, all at 0.9 opacity
pub fn pomegranate() -> Vec<Color> {
    vec![
        Color::from_srgba(168, 28, 28, 0.9),
        Color::from_srgba(196, 33, 33, 0.9),
        Color::from_srgba(220, 48, 48, 0.9),
        Color::from_srgba(232, 78, 78, 0.9),
        Color::from_srgba(147, 24, 24, 0.9),
    ]
}

/// Where particle colors come from
#[derive(Clone, Debug, PartialEq)]
pub enum Palette {
    /// Uniform pick from a fixed list
    Pick(Vec<Color>),
    /// Independent draws of hue (degrees), saturation and lightness (percent)
    Hsl {
        hue: Spread,
        saturation: Spread,
        lightness: Spread,
    },
}

impl Palette {
    /// Draw one color. Returns `None` for an empty pick list.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Color> {
        match self {
            Palette::Pick(colors) => colors.choose(rng).copied(),
            Palette::Hsl {
                hue,
                saturation,
                lightness,
            } => Some(Color::from_hsla(
                hue.sample(rng),
                saturation.sample(rng),
                lightness.sample(rng),
                1.0,
            )),
        }
    }
}
