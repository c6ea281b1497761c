//! Command line configuration

use clap::{Parser, ValueEnum};
use field_renderer::Background;
use field_simulation::FieldParams;
use glam::Vec2;

#[derive(Parser, Debug)]
#[command(version, about = "A field of particles that breathes away from the pointer", long_about = None)]
pub struct Args {
    /// Particle arrangement and look.
    #[arg(short('p'), long, value_enum, default_value_t = Preset::Band)]
    pub preset: Preset,

    /// Seed for layout, behaviors and colors. Random when omitted.
    #[arg(short('s'), long)]
    pub seed: Option<u64>,

    /// Field width in field units. Defaults to the preset's width.
    #[arg(long)]
    pub width: Option<f32>,

    /// Field height in field units. Defaults to the preset's height.
    #[arg(long)]
    pub height: Option<f32>,

    /// Background fill.
    #[arg(short('b'), long, value_enum, default_value_t = BackgroundArg::White)]
    pub background: BackgroundArg,

    /// Wait for vertical sync instead of presenting as fast as possible.
    #[arg(long)]
    pub vsync: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 45x15 grid of red dots, engaged on hover
    Band,
    /// Disc of spinning pomegranate arils, engaged while pressed
    Arils,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackgroundArg {
    White,
    Mocha,
}

impl Args {
    pub fn field_params(&self) -> FieldParams {
        let params = match self.preset {
            Preset::Band => FieldParams::band(),
            Preset::Arils => FieldParams::arils(),
        };
        let size = Vec2::new(
            self.width.unwrap_or(params.size.x),
            self.height.unwrap_or(params.size.y),
        );
        params.with_size(size)
    }

    pub fn background(&self) -> Background {
        match self.background {
            BackgroundArg::White => Background::White,
            BackgroundArg::Mocha => Background::Mocha,
        }
    }
}
