#![cfg(feature = "parallel")]

use field_physics::{Particle, Pointer};
use field_simulation::{Canvas, Color, FieldParams, ParticleField};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Discard;

impl Canvas for Discard {
    fn fill_background(&mut self, _color: Color) {}
    fn draw_particle(&mut self, _particle: &Particle) {}
}

#[test]
fn parallel_step_matches_serial_frame() {
    let params = FieldParams::arils();
    let mut rng = StdRng::seed_from_u64(21);
    let mut parallel = ParticleField::seed(&params, &mut rng).unwrap();
    let mut serial = parallel.clone();

    for i in 0..200 {
        let pointer = Pointer::at(Vec2::new(300.0 + 2.0 * i as f32, 540.0));
        parallel.step(pointer);
        serial.frame(pointer, &mut Discard);
    }
    assert_eq!(parallel, serial);
}
