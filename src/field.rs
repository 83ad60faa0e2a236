//! The particle population and its seeding policy.
//!
//! The field owns every particle, derives the population size from the
//! surface area, and advances the whole set one tick at a time. The count is
//! fixed between seeds: ticks never add, remove, or relocate particles beyond
//! the reflect rule.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::Particle;
use crate::pointer::Pointer;

/// Surface area, in square pixels, that buys one particle.
pub const AREA_PER_PARTICLE: f32 = 12_000.0;

/// Population floor, regardless of how small the surface is.
pub const MIN_PARTICLES: usize = 20;

/// Spawn velocity magnitude per axis, pixels per tick.
const SPAWN_SPEED: f32 = 0.6;

/// Spawn radius range.
const SPAWN_SIZE_MIN: f32 = 1.0;
const SPAWN_SIZE_MAX: f32 = 4.0;

/// Owns the particles and rebuilds them whenever the surface changes size.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Create an empty field. Call [`seed`](Self::seed) before ticking.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// How many particles a surface of the given size gets:
    /// `max(20, floor(width * height / 12000))`.
    ///
    /// Degenerate dimensions (zero, negative, or non-finite area) clamp to
    /// the floor rather than producing a zero or garbage count.
    pub fn particle_count(width: f32, height: f32) -> usize {
        let by_area = (width * height / AREA_PER_PARTICLE).floor();
        if by_area.is_finite() && by_area > MIN_PARTICLES as f32 {
            by_area as usize
        } else {
            MIN_PARTICLES
        }
    }

    /// Rebuild the whole population for a surface of the given size.
    ///
    /// Every existing particle is discarded. Seeded from the clock like the
    /// rest of the spawn machinery; use [`seed_with`](Self::seed_with) when a
    /// deterministic population is needed.
    pub fn seed(&mut self, width: f32, height: f32) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        self.seed_with(width, height, &mut SmallRng::seed_from_u64(seed));
    }

    /// [`seed`](Self::seed) with an explicit RNG.
    pub fn seed_with<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width;
        self.height = height;

        let count = Self::particle_count(width, height);
        self.particles.clear();
        self.particles.reserve(count);

        for _ in 0..count {
            let size = rng.gen_range(SPAWN_SIZE_MIN..SPAWN_SIZE_MAX);
            let position = Vec2::new(
                spawn_coord(rng, width, size),
                spawn_coord(rng, height, size),
            );
            let velocity = Vec2::new(
                rng.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
                rng.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
            );
            self.particles.push(Particle::new(position, velocity, size));
        }

        log::debug!(
            "seeded {} particles for {:.0}x{:.0} surface",
            count,
            width,
            height
        );
    }

    /// Advance every particle exactly one tick. Never changes the count.
    pub fn tick(&mut self, pointer: Option<Pointer>) {
        for particle in &mut self.particles {
            particle.update(self.width, self.height, pointer);
        }
    }

    /// The live particle set, in stable iteration order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Surface size the field was last seeded for.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick a spawn coordinate that keeps the particle's full circle inside
/// `[0, extent]`. Falls back to the centre when the surface is too small to
/// fit one.
fn spawn_coord<R: Rng>(rng: &mut R, extent: f32, size: f32) -> f32 {
    let span = extent - size * 2.0;
    if span > 0.0 {
        size + rng.gen_range(0.0..span)
    } else {
        extent.max(0.0) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_count_formula() {
        // 1200 * 800 / 12000 = 80
        assert_eq!(ParticleField::particle_count(1200.0, 800.0), 80);
        // Area under 240000 hits the floor of 20.
        assert_eq!(ParticleField::particle_count(100.0, 100.0), 20);
        assert_eq!(ParticleField::particle_count(599.0, 400.0), 20);
        // floor() of the division, not rounding.
        assert_eq!(ParticleField::particle_count(500.0, 500.0), 20);
        assert_eq!(ParticleField::particle_count(1000.0, 361.0), 30);
    }

    #[test]
    fn test_count_clamps_degenerate_dimensions() {
        assert_eq!(ParticleField::particle_count(0.0, 600.0), 20);
        assert_eq!(ParticleField::particle_count(-800.0, 600.0), 20);
        assert_eq!(ParticleField::particle_count(f32::NAN, 600.0), 20);
    }

    #[test]
    fn test_seed_spawns_fully_inside_bounds() {
        let mut field = ParticleField::new();
        field.seed_with(1200.0, 800.0, &mut rng());
        assert_eq!(field.particles().len(), 80);

        for p in field.particles() {
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!((p.size - p.base_size()).abs() < 1e-6);
            assert!(p.position.x >= p.size && p.position.x <= 1200.0 - p.size);
            assert!(p.position.y >= p.size && p.position.y <= 800.0 - p.size);
            assert!(p.velocity.x.abs() <= 0.6);
            assert!(p.velocity.y.abs() <= 0.6);
        }
    }

    #[test]
    fn test_tick_preserves_count() {
        let mut field = ParticleField::new();
        field.seed_with(1200.0, 800.0, &mut rng());
        for _ in 0..100 {
            field.tick(None);
        }
        assert_eq!(field.particles().len(), 80);
    }

    #[test]
    fn test_reseed_replaces_population() {
        let mut field = ParticleField::new();
        field.seed_with(1200.0, 800.0, &mut rng());
        assert_eq!(field.particles().len(), 80);

        field.seed_with(600.0, 400.0, &mut rng());
        assert_eq!(field.particles().len(), 20);
        assert_eq!(field.dimensions(), (600.0, 400.0));
        for p in field.particles() {
            assert!(p.position.x <= 600.0 && p.position.y <= 400.0);
        }
    }

    #[test]
    fn test_seed_survives_tiny_surface() {
        let mut field = ParticleField::new();
        // Too small to fit a particle's full circle; spawn falls back to the
        // centre instead of panicking.
        field.seed_with(4.0, 4.0, &mut rng());
        assert_eq!(field.particles().len(), 20);
        field.tick(None);
    }
}
