//! Proximity links between particles.
//!
//! Every unordered pair closer than a threshold gets a line segment whose
//! opacity fades linearly with distance. The pass is O(n²) over the particle
//! snapshot, which is fine because the seeding formula caps the population in
//! the low hundreds; a spatial grid would only pay off far beyond that.

use crate::particle::Particle;
use crate::surface::Surface;

/// Default distance below which two particles are linked, in pixels.
pub const LINK_DISTANCE: f32 = 100.0;

/// Opacity of a link between particles `distance` apart, or `None` when the
/// pair is at or beyond the threshold.
///
/// Closer pairs draw more opaque lines; the value reaches 0 exactly at the
/// threshold.
pub fn link_alpha(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

/// Stroke a line for every pair of particles closer than `threshold`.
///
/// Pure function of the particle snapshot: no state, no side effects beyond
/// the draw calls.
pub fn render<S: Surface>(surface: &mut S, particles: &[Particle], threshold: f32) {
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let a = &particles[i];
            let b = &particles[j];
            let distance = a.position.distance(b.position);
            if let Some(alpha) = link_alpha(distance, threshold) {
                surface.stroke_line(a.position, b.position, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;
    use glam::Vec2;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0)
    }

    #[test]
    fn test_alpha_at_half_distance() {
        let alpha = link_alpha(50.0, 100.0).unwrap();
        assert!((alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_alpha_cutoff_at_threshold() {
        assert!(link_alpha(100.0, 100.0).is_none());
        assert!(link_alpha(150.0, 100.0).is_none());
        // Just inside still draws, barely visible.
        let alpha = link_alpha(99.9, 100.0).unwrap();
        assert!(alpha > 0.0 && alpha < 0.002);
    }

    #[test]
    fn test_alpha_decreases_with_distance() {
        let mut last = f32::INFINITY;
        for d in [0.0, 10.0, 25.0, 50.0, 75.0, 99.0] {
            let alpha = link_alpha(d, 100.0).unwrap();
            assert!(alpha < last);
            last = alpha;
        }
        assert!((link_alpha(0.0, 100.0).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_render_links_only_close_pairs() {
        let particles = [
            particle_at(0.0, 0.0),
            particle_at(50.0, 0.0),
            particle_at(500.0, 500.0),
        ];
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&mut surface, &particles, LINK_DISTANCE);

        // Only the first pair is within 100 pixels.
        assert_eq!(surface.lines.len(), 1);
        let (from, to, alpha) = surface.lines[0];
        assert_eq!(from, Vec2::new(0.0, 0.0));
        assert_eq!(to, Vec2::new(50.0, 0.0));
        assert!((alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_render_covers_every_unordered_pair() {
        // Four mutually-close particles: 4 choose 2 = 6 segments.
        let particles = [
            particle_at(0.0, 0.0),
            particle_at(10.0, 0.0),
            particle_at(0.0, 10.0),
            particle_at(10.0, 10.0),
        ];
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&mut surface, &particles, LINK_DISTANCE);
        assert_eq!(surface.lines.len(), 6);
    }
}
