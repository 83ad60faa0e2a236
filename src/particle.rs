//! A single point-mass in the network.
//!
//! Particles drift with a constant per-tick velocity, bounce off the surface
//! edges, and inflate while the pointer hovers nearby. Everything here is
//! plain CPU math; drawing goes through the [`Surface`] trait.

use glam::Vec2;

use crate::pointer::Pointer;
use crate::surface::Surface;

/// Radius gained per tick while the pointer is within its interaction radius.
pub const GROWTH_PER_TICK: f32 = 1.0;

/// Radius lost per tick once the pointer is gone or out of range.
pub const DECAY_PER_TICK: f32 = 0.3;

/// Upper bound on `size`, as a multiple of the spawn size.
pub const MAX_GROWTH_FACTOR: f32 = 4.0;

/// Fill opacity for the particle dot.
pub const FILL_ALPHA: f32 = 0.8;

/// One simulated point: position, velocity, and a radius that reacts to the
/// pointer.
///
/// `size` always stays within `[base_size, 4 * base_size]`.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
    /// Current radius.
    pub size: f32,
    /// Radius at spawn. Never changes; bounds `size` from below.
    base_size: f32,
}

impl Particle {
    /// Create a particle. The spawn size doubles as the lower size bound.
    pub fn new(position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            base_size: size,
        }
    }

    /// Radius the particle spawned with.
    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    /// Largest radius the pointer can inflate this particle to.
    pub fn max_size(&self) -> f32 {
        self.base_size * MAX_GROWTH_FACTOR
    }

    /// Advance one tick: integrate, reflect at the edges, react to the pointer.
    ///
    /// Bounds are checked after the move, so a particle may sit slightly past
    /// an edge for one tick before the flipped velocity carries it back in.
    /// The overshoot is bounded by one tick's velocity and is intentional.
    pub fn update(&mut self, width: f32, height: f32, pointer: Option<Pointer>) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }

        let near_pointer = pointer
            .map(|p| self.position.distance(p.position) < p.radius)
            .unwrap_or(false);

        if near_pointer {
            self.size = (self.size + GROWTH_PER_TICK).min(self.max_size());
        } else if self.size > self.base_size {
            self.size = (self.size - DECAY_PER_TICK).max(self.base_size);
        }
    }

    /// Draw the particle as a filled circle at its current size.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.size, FILL_ALPHA);
    }
}
