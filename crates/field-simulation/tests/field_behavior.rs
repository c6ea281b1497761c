use field_physics::{Behavior, Particle, Pointer};
use field_simulation::{
    Canvas, Color, FieldParams, Layout, ParticleField, PointerSignal, PointerTracker,
    ViewportMapping,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Canvas that keeps a copy of everything drawn in the current frame
#[derive(Default)]
struct Recorder {
    background: Option<Color>,
    drawn: Vec<Particle>,
}

impl Canvas for Recorder {
    fn fill_background(&mut self, color: Color) {
        self.background = Some(color);
        self.drawn.clear();
    }

    fn draw_particle(&mut self, particle: &Particle) {
        self.drawn.push(*particle);
    }
}

fn seeded(params: &FieldParams, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::seed(params, &mut rng).unwrap()
}

#[test]
fn band_preset_seeds_full_grid() {
    let field = seeded(&FieldParams::band(), 1);
    assert_eq!(field.len(), 45 * 15);
    assert_eq!(field.size(), Vec2::new(1200.0, 400.0));
}

#[test]
fn arils_preset_seeds_disc() {
    let params = FieldParams::arils();
    let field = seeded(&params, 1);
    assert_eq!(field.len(), 250);
    for p in field.particles() {
        assert!(p.home().distance(params.size * 0.5) <= 300.0 + 1e-3);
    }
}

#[test]
fn same_seed_same_field() {
    let params = FieldParams::arils();
    assert_eq!(seeded(&params, 42), seeded(&params, 42));
    assert_ne!(seeded(&params, 42), seeded(&params, 43));
}

#[test]
fn every_frame_draws_every_particle() {
    let params = FieldParams {
        layout: Layout::Grid {
            columns: 8,
            rows: 5,
            margin: Vec2::splat(0.1),
            jitter: 2.0,
        },
        ..FieldParams::band()
    };
    let mut field = seeded(&params, 7);
    let mut canvas = Recorder::default();
    let pointer = Pointer::at(params.size * 0.5);

    for _ in 0..60 {
        canvas.fill_background(Color::WHITE);
        assert_eq!(field.frame(pointer, &mut canvas), 40);
        assert_eq!(canvas.drawn.len(), 40);
    }
    assert_eq!(field.len(), 40);
    assert_eq!(canvas.background, Some(Color::WHITE));
}

#[test]
fn drawn_state_is_post_update_state() {
    let mut field = seeded(&FieldParams::arils(), 3);
    let mut canvas = Recorder::default();
    let pointer = Pointer::at(Vec2::new(540.0, 540.0));

    field.frame(pointer, &mut canvas);
    assert_eq!(canvas.drawn.as_slice(), field.particles());
}

#[test]
fn field_settles_after_pointer_leaves() {
    let params = FieldParams::band();
    let mut field = seeded(&params, 9);
    let mapping = ViewportMapping::new(params.size, params.size);
    let mut tracker = PointerTracker::new(mapping, params.engage_on);

    tracker.handle(PointerSignal::Entered);
    for i in 0..120 {
        let x = 200.0 + 6.0 * i as f32;
        tracker.handle(PointerSignal::Moved(Vec2::new(x, 200.0)));
        field.step(tracker.pointer());
    }
    assert!(field.kinetic_energy() > 0.0);
    let max_offset = field
        .particles()
        .iter()
        .map(|p| p.displacement().length())
        .fold(0.0, f32::max);
    assert!(max_offset > 1.0);

    tracker.handle(PointerSignal::Left);
    for _ in 0..3000 {
        field.step(tracker.pointer());
    }
    for p in field.particles() {
        assert!(p.displacement().length() < 1e-2);
    }
}

#[test]
fn particle_under_pointer_stays_finite() {
    let behavior = Behavior::new(80.0, 0.02, 0.01, 0.9).unwrap();
    let home = Vec2::new(100.0, 100.0);
    let mut field = ParticleField::new(Vec2::splat(200.0), vec![Particle::new(home, 5.0, behavior)]);

    for _ in 0..50 {
        field.step(Pointer::at(home));
    }
    let p = field.particles()[0];
    assert!(p.position.is_finite());
    assert!(p.velocity.is_finite());
}

#[test]
fn at_rest_field_is_fixed_point() {
    let mut field = seeded(&FieldParams::band(), 5);
    let before = field.clone();
    for _ in 0..100 {
        field.step(Pointer::SENTINEL);
    }
    assert_eq!(field, before);
}

#[test]
fn sentinel_never_reaches_a_huge_field() {
    let params = FieldParams::band().with_size(Vec2::splat(10000.0));
    let mut field = seeded(&params, 2);
    let before = field.clone();

    for _ in 0..10 {
        field.step(Pointer::SENTINEL);
    }
    assert_eq!(field, before);
}
