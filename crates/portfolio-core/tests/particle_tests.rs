// Host-side tests for the particle field: motion, reflection, and connection
// lines. Randomness is seeded so every run sees the same field.

use glam::Vec2;
use portfolio_core::constants::{PARTICLE_COUNT, PARTICLE_MAX_RADIUS, PARTICLE_MAX_SPEED};
use portfolio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    circles: Vec<(Vec2, f32)>,
    lines: Vec<(Vec2, Vec2, f32)>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
        self.circles.clear();
        self.lines.clear();
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.circles.push((center, radius));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        self.lines.push((from, to, opacity));
    }
}

fn seeded_field(width: f32, height: f32, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::spawn(ParticleConfig::default(), width, height, &mut rng)
}

fn still(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0)
}

fn in_bounds(p: &Particle, width: f32, height: f32) -> bool {
    let tol_x = p.velocity.x.abs() + 1e-4;
    let tol_y = p.velocity.y.abs() + 1e-4;
    p.position.x >= -tol_x
        && p.position.x <= width + tol_x
        && p.position.y >= -tol_y
        && p.position.y <= height + tol_y
}

#[test]
fn spawn_respects_initial_ranges() {
    let field = seeded_field(800.0, 600.0, 7);
    assert_eq!(field.len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!((0.0..=800.0).contains(&p.position.x));
        assert!((0.0..=600.0).contains(&p.position.y));
        assert!(p.velocity.x.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.velocity.y.abs() <= PARTICLE_MAX_SPEED);
        assert!((0.0..=PARTICLE_MAX_RADIUS).contains(&p.radius));
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = seeded_field(800.0, 600.0, 42);
    let b = seeded_field(800.0, 600.0, 42);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn thousand_steps_stay_in_bounds_with_unchanged_speeds() {
    let mut field = seeded_field(800.0, 600.0, 3);
    let initial: Vec<Vec2> = field.particles().iter().map(|p| p.velocity.abs()).collect();
    let radii: Vec<f32> = field.particles().iter().map(|p| p.radius).collect();
    for _ in 0..1000 {
        field.step();
        assert_eq!(field.len(), 80);
        for p in field.particles() {
            assert!(in_bounds(p, 800.0, 600.0), "escaped: {:?}", p);
        }
    }
    for (i, p) in field.particles().iter().enumerate() {
        assert_eq!(p.velocity.abs(), initial[i]);
        assert!(p.velocity.x.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.velocity.y.abs() <= PARTICLE_MAX_SPEED);
        assert_eq!(p.radius, radii[i]);
    }
}

#[test]
fn particle_near_wall_flips_exactly_once() {
    let mut field = ParticleField::from_particles(
        ParticleConfig::default(),
        100.0,
        100.0,
        vec![
            Particle::new(Vec2::new(0.1, 50.0), Vec2::new(-0.25, 0.0), 1.0),
            Particle::new(Vec2::new(99.9, 50.0), Vec2::new(0.25, 0.0), 1.0),
            Particle::new(Vec2::new(50.0, 0.1), Vec2::new(0.0, -0.25), 1.0),
        ],
    );
    field.step();
    let ps = field.particles();
    assert_eq!(ps[0].velocity.x, 0.25);
    assert_eq!(ps[1].velocity.x, -0.25);
    assert_eq!(ps[2].velocity.y, 0.25);

    // overshoot is allowed for one frame only
    assert!(ps[0].position.x < 0.0);
    field.step();
    let ps = field.particles();
    assert!(ps[0].position.x >= 0.0);
    assert_eq!(ps[0].velocity.x, 0.25);
    assert!(ps[1].position.x <= 100.0);
    assert_eq!(ps[1].velocity.x, -0.25);
}

#[test]
fn particle_in_the_middle_never_flips() {
    let mut field = ParticleField::from_particles(
        ParticleConfig::default(),
        100.0,
        100.0,
        vec![Particle::new(Vec2::new(50.0, 50.0), Vec2::new(0.2, -0.1), 1.0)],
    );
    for _ in 0..10 {
        field.step();
    }
    let p = field.particles()[0];
    assert_eq!(p.velocity, Vec2::new(0.2, -0.1));
    assert!((p.position.x - 52.0).abs() < 1e-4);
    assert!((p.position.y - 49.0).abs() < 1e-4);
}

#[test]
fn close_pair_gets_faded_line() {
    let field = ParticleField::from_particles(
        ParticleConfig::default(),
        800.0,
        600.0,
        vec![still(0.0, 0.0), still(100.0, 0.0)],
    );
    let lines: Vec<Connection> = field.connections().collect();
    assert_eq!(lines.len(), 1);
    assert!((lines[0].distance - 100.0).abs() < 1e-4);
    let expected = 0.2 * (1.0 - 100.0 / 150.0);
    assert!((lines[0].opacity - expected).abs() < 1e-4);
    assert!((lines[0].opacity - 0.0667).abs() < 1e-3);
}

#[test]
fn far_pair_gets_no_line() {
    let field = ParticleField::from_particles(
        ParticleConfig::default(),
        800.0,
        600.0,
        vec![still(0.0, 0.0), still(200.0, 0.0)],
    );
    assert_eq!(field.connections().count(), 0);
}

#[test]
fn pair_at_exact_threshold_gets_no_line() {
    assert_eq!(connection_opacity(150.0, 150.0, 0.2), None);
    assert_eq!(connection_opacity(0.0, 150.0, 0.2), Some(0.2));
}

#[test]
fn connection_is_symmetric_and_drawn_once() {
    let a = still(10.0, 20.0);
    let b = still(70.0, 100.0);
    let forward =
        ParticleField::from_particles(ParticleConfig::default(), 800.0, 600.0, vec![a, b]);
    let reverse =
        ParticleField::from_particles(ParticleConfig::default(), 800.0, 600.0, vec![b, a]);
    let f: Vec<Connection> = forward.connections().collect();
    let r: Vec<Connection> = reverse.connections().collect();
    assert_eq!(f.len(), 1);
    assert_eq!(r.len(), 1);
    assert_eq!(f[0].distance, r[0].distance);
    assert_eq!(f[0].opacity, r[0].opacity);
    assert!(f[0].a < f[0].b);
}

#[test]
fn every_close_pair_is_reported_once() {
    let field = seeded_field(300.0, 300.0, 11);
    let mut seen = std::collections::HashSet::new();
    for c in field.connections() {
        assert!(c.a < c.b);
        assert!(seen.insert((c.a, c.b)), "pair {:?} reported twice", (c.a, c.b));
        assert!(c.distance < 150.0);
        assert!(c.opacity > 0.0 && c.opacity <= 0.2);
    }
    let ps = field.particles();
    let brute = (0..ps.len())
        .flat_map(|i| ((i + 1)..ps.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| ps[i].position.distance(ps[j].position) < 150.0)
        .count();
    assert_eq!(seen.len(), brute);
}

#[test]
fn frame_clears_then_draws_particles_and_lines() {
    let mut field = ParticleField::from_particles(
        ParticleConfig::default(),
        800.0,
        600.0,
        vec![still(0.0, 0.0), still(100.0, 0.0), still(500.0, 500.0)],
    );
    let mut surface = RecordingSurface::default();
    field.frame(&mut surface);
    field.frame(&mut surface);
    assert_eq!(surface.clears, 2);
    assert_eq!(surface.circles.len(), 3);
    assert_eq!(surface.lines.len(), 1);
    assert_eq!(surface.lines[0].0, Vec2::new(0.0, 0.0));
    assert_eq!(surface.lines[0].1, Vec2::new(100.0, 0.0));
}

#[test]
fn shrinking_keeps_positions_and_particles_return() {
    let mut field = ParticleField::from_particles(
        ParticleConfig::default(),
        800.0,
        600.0,
        vec![
            Particle::new(Vec2::new(700.0, 500.0), Vec2::new(0.25, 0.25), 1.0),
            Particle::new(Vec2::new(700.0, 500.0), Vec2::new(-0.25, -0.25), 1.0),
            Particle::new(Vec2::new(100.0, 100.0), Vec2::new(0.1, 0.1), 1.0),
        ],
    );
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    field.resize(400.0, 300.0);
    assert_eq!(field.width(), 400.0);
    assert_eq!(field.height(), 300.0);
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert!(field.particles()[0].position.x > 400.0);

    // first step turns the outbound particle around; it then drifts home
    field.step();
    assert!(field.particles()[0].velocity.x < 0.0);
    assert!(field.particles()[0].velocity.y < 0.0);
    for _ in 0..1400 {
        field.step();
    }
    for p in field.particles() {
        assert!(in_bounds(p, 400.0, 300.0), "still outside: {:?}", p);
    }
    assert_eq!(field.len(), 3);
}
