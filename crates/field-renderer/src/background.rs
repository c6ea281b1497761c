//! Background fills

use field_simulation::Color;

/// Color the surface is cleared to before particles are drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    White,
    /// Catppuccin Mocha base (#1e1e2e)
    Mocha,
}

impl Background {
    pub fn color(self) -> Color {
        match self {
            Background::White => Color::WHITE,
            Background::Mocha => {
                let rgb = catppuccin::PALETTE.mocha.colors.base.rgb;
                Color::from_srgba(rgb.r, rgb.g, rgb.b, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_is_dark_and_opaque() {
        let color = Background::Mocha.color();
        assert!(color.r < 0.05 && color.g < 0.05 && color.b < 0.05);
        assert!(color.b > color.r);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_white() {
        assert_eq!(Background::White.color(), Color::WHITE);
    }
}
