//! The per-frame driver.
//!
//! [`Engine`] is the whole simulation behind two lifecycle calls: `start`
//! seeds the field and arms ticking, `stop` disarms it. One `tick` clears the
//! surface, advances every particle against the current pointer state, draws
//! the dots, and strokes the proximity links. The engine is written against
//! the [`Surface`] trait so all of this runs headless in tests.

use winit::event::WindowEvent;

use crate::field::ParticleField;
use crate::links;
use crate::particle::Particle;
use crate::pointer::PointerTracker;
use crate::surface::Surface;

/// Lifecycle states. There is no pause: a stopped engine holds no schedule
/// and ignores events until started again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stopped,
    Running,
}

/// The particle-network simulation loop.
pub struct Engine {
    field: ParticleField,
    tracker: PointerTracker,
    link_distance: f32,
    state: State,
}

impl Engine {
    /// Create a stopped engine with the default link threshold.
    pub fn new() -> Self {
        Self::with_link_distance(links::LINK_DISTANCE)
    }

    /// Create a stopped engine linking particles closer than `link_distance`.
    pub fn with_link_distance(link_distance: f32) -> Self {
        Self {
            field: ParticleField::new(),
            tracker: PointerTracker::new(),
            link_distance,
            state: State::Stopped,
        }
    }

    /// Whether ticks currently do anything.
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// The live particle set.
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    /// Seed the field for a surface of the given pixel size and begin
    /// ticking. No-op when already running.
    pub fn start(&mut self, width: f32, height: f32) {
        if self.state == State::Running {
            return;
        }
        self.field.seed(width, height);
        self.state = State::Running;
        log::info!(
            "engine started: {} particles on {:.0}x{:.0}",
            self.field.particles().len(),
            width,
            height
        );
    }

    /// Stop ticking and forget the pointer. Idempotent: stopping a stopped
    /// engine does nothing.
    pub fn stop(&mut self) {
        if self.state == State::Stopped {
            return;
        }
        self.state = State::Stopped;
        self.tracker.cleared();
        log::info!("engine stopped");
    }

    /// The surface changed size: re-seed the whole population for the new
    /// dimensions. This is the only path that changes the particle count
    /// after `start`.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state == State::Running {
            self.field.seed(width, height);
        }
    }

    /// Feed a window event to the pointer tracker. Ignored while stopped.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if self.state == State::Running {
            self.tracker.handle_event(event);
        }
    }

    /// Direct access to the pointer tracker, for hosts that do not speak
    /// winit events.
    pub fn pointer_tracker(&mut self) -> &mut PointerTracker {
        &mut self.tracker
    }

    /// Run one simulation tick against the given surface.
    ///
    /// Does nothing while stopped, so a `stop` between two scheduled frames
    /// cancels the pending one at the scheduling boundary.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        if self.state != State::Running {
            return;
        }

        surface.clear();
        self.field.tick(self.tracker.pointer());
        for particle in self.field.particles() {
            particle.draw(surface);
        }
        links::render(surface, self.field.particles(), self.link_distance);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;
    use glam::Vec2;

    #[test]
    fn test_start_seeds_and_tick_draws() {
        let mut engine = Engine::new();
        let mut surface = RecordingSurface::new(1200.0, 800.0);

        engine.start(1200.0, 800.0);
        assert!(engine.is_running());
        assert_eq!(engine.particles().len(), 80);

        engine.tick(&mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), 80);

        // Count stays stable across ticks.
        engine.tick(&mut surface);
        assert_eq!(surface.circles.len(), 80);
    }

    #[test]
    fn test_tick_is_noop_while_stopped() {
        let mut engine = Engine::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        engine.tick(&mut surface);
        assert_eq!(surface.clears, 0);
        assert!(surface.circles.is_empty());
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut engine = Engine::new();
        engine.start(800.0, 600.0);

        engine.stop();
        engine.stop();
        assert!(!engine.is_running());

        let mut surface = RecordingSurface::new(800.0, 600.0);
        engine.tick(&mut surface);
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_stop_clears_pointer_state() {
        let mut engine = Engine::new();
        engine.start(800.0, 600.0);
        engine.pointer_tracker().moved(Vec2::new(10.0, 10.0));
        assert!(engine.pointer_tracker().pointer().is_some());

        engine.stop();
        assert!(engine.pointer_tracker().pointer().is_none());
    }

    #[test]
    fn test_second_start_does_not_reseed() {
        let mut engine = Engine::new();
        engine.start(1200.0, 800.0);
        assert_eq!(engine.particles().len(), 80);

        // Already running: the call is ignored, the population stays.
        engine.start(100.0, 100.0);
        assert_eq!(engine.particles().len(), 80);
    }

    #[test]
    fn test_resize_reseeds_population() {
        let mut engine = Engine::new();
        engine.start(600.0, 400.0);
        assert_eq!(engine.particles().len(), 20);

        engine.resize(1200.0, 800.0);
        assert_eq!(engine.particles().len(), 80);
    }

    #[test]
    fn test_resize_ignored_while_stopped() {
        let mut engine = Engine::new();
        engine.resize(1200.0, 800.0);
        assert!(engine.particles().is_empty());
    }

    #[test]
    fn test_restart_after_stop() {
        let mut engine = Engine::new();
        engine.start(600.0, 400.0);
        engine.stop();
        engine.start(1200.0, 800.0);
        assert!(engine.is_running());
        assert_eq!(engine.particles().len(), 80);
    }

    #[test]
    fn test_size_invariant_holds_across_ticks() {
        let mut engine = Engine::new();
        let mut surface = RecordingSurface::new(1200.0, 800.0);
        engine.start(1200.0, 800.0);
        engine.pointer_tracker().moved(Vec2::new(600.0, 400.0));

        for _ in 0..50 {
            engine.tick(&mut surface);
            for p in engine.particles() {
                assert!(p.size >= p.base_size());
                assert!(p.size <= p.max_size());
            }
        }
    }
}
