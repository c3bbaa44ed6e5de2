//! Decorative particle field drawn behind the hero section.
//!
//! The field owns a fixed set of particles that drift at constant speed and
//! bounce off the surface edges. Every frame the particles are advanced,
//! drawn as small circles, and every unordered pair closer than the
//! connection distance is joined by a line that fades out with distance.
//!
//! Drawing goes through the [`Surface`] trait so the same frame logic runs
//! against a canvas on the web and against a recording surface in tests.

use crate::constants::{
    CONNECTION_DISTANCE, LINE_BASE_OPACITY, PARTICLE_COUNT, PARTICLE_MAX_RADIUS,
    PARTICLE_MAX_SPEED,
};
use glam::Vec2;
use rand::Rng;

/// Tunables for a particle field. `Default` gives the values used on the site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub connection_distance: f32,
    pub max_speed: f32,
    pub max_radius: f32,
    pub line_base_opacity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            max_speed: PARTICLE_MAX_SPEED,
            max_radius: PARTICLE_MAX_RADIUS,
            line_base_opacity: LINE_BASE_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Draw a particle uniformly inside `[0, width] × [0, height]`.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        config: &ParticleConfig,
        width: f32,
        height: f32,
    ) -> Self {
        let speed = config.max_speed;
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                (rng.gen::<f32>() - 0.5) * 2.0 * speed,
            ),
            radius: rng.gen::<f32>() * config.max_radius,
        }
    }

    /// Move by one velocity step, then reflect off any wall the particle has
    /// crossed. The position is not clamped, so it may sit up to one step
    /// outside the surface until the next update carries it back.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.position += self.velocity;
        reflect_axis(self.position.x, &mut self.velocity.x, width);
        reflect_axis(self.position.y, &mut self.velocity.y, height);
    }
}

// Only flips when travelling outward, so a particle stranded beyond a wall
// after a shrink keeps heading home instead of jittering in place.
#[inline]
fn reflect_axis(pos: f32, vel: &mut f32, extent: f32) {
    if (pos < 0.0 && *vel < 0.0) || (pos > extent && *vel > 0.0) {
        *vel = -*vel;
    }
}

/// Opacity of the line joining two particles `distance` apart, or `None`
/// when they are too far apart to be connected.
#[inline]
pub fn connection_opacity(distance: f32, threshold: f32, base_opacity: f32) -> Option<f32> {
    (distance < threshold).then(|| base_opacity * (1.0 - distance / threshold))
}

/// A line to draw between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
    pub opacity: f32,
}

/// Anything the field can paint itself onto.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32);
}

pub struct ParticleField {
    particles: Vec<Particle>,
    size: Vec2,
    config: ParticleConfig,
}

impl ParticleField {
    /// Create `config.count` randomized particles on a `width × height` surface.
    pub fn spawn<R: Rng + ?Sized>(
        config: ParticleConfig,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::random(&mut *rng, &config, width, height))
            .collect();
        log::debug!(
            "[particles] spawned {} on {}x{}",
            config.count,
            width,
            height
        );
        Self {
            particles,
            size: Vec2::new(width, height),
            config,
        }
    }

    /// Build a field from explicit particles. `config.count` is ignored in
    /// favour of `particles.len()`.
    pub fn from_particles(
        config: ParticleConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        let config = ParticleConfig {
            count: particles.len(),
            ..config
        };
        Self {
            particles,
            size: Vec2::new(width, height),
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Track a new surface size. Existing particles keep their positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn step(&mut self) {
        let (w, h) = (self.size.x, self.size.y);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// Every unordered pair closer than the connection distance, each pair
    /// reported once with `a < b`.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.config.connection_distance;
        let base = self.config.line_base_opacity;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let (from, to) = (ps[a].position, ps[b].position);
                let distance = from.distance(to);
                connection_opacity(distance, threshold, base).map(|opacity| Connection {
                    a,
                    b,
                    from,
                    to,
                    distance,
                    opacity,
                })
            })
        })
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius);
        }
        for c in self.connections() {
            surface.stroke_line(c.from, c.to, c.opacity);
        }
    }

    /// One animation frame: advance, then redraw.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_axis_ignores_inward_motion() {
        let mut v = 0.2;
        reflect_axis(-0.1, &mut v, 10.0);
        assert_eq!(v, 0.2);
        let mut v = -0.2;
        reflect_axis(10.1, &mut v, 10.0);
        assert_eq!(v, -0.2);
    }

    #[test]
    fn reflect_axis_flips_outward_motion() {
        let mut v = -0.2;
        reflect_axis(-0.1, &mut v, 10.0);
        assert_eq!(v, 0.2);
        let mut v = 0.2;
        reflect_axis(10.1, &mut v, 10.0);
        assert_eq!(v, -0.2);
    }
}
