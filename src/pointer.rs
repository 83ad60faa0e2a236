//! Pointer and touch tracking.
//!
//! Translates raw window events into an explicit interaction state: either a
//! concrete surface-space position with a fixed interaction radius, or
//! nothing at all. The simulation only ever sees the [`Pointer`] snapshot,
//! never the event stream.

use glam::Vec2;
use winit::event::{Touch, TouchPhase, WindowEvent};

/// Distance within which the pointer inflates nearby particles, in pixels.
pub const POINTER_RADIUS: f32 = 120.0;

/// A live interaction point in surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Position relative to the surface's top-left corner.
    pub position: Vec2,
    /// Fixed interaction radius.
    pub radius: f32,
}

/// Tracks the last known pointer/touch position relative to the surface.
///
/// Single writer (the event handler), single reader (the tick step). Absence
/// is represented as `None`, never as a sentinel coordinate.
#[derive(Debug)]
pub struct PointerTracker {
    position: Option<Vec2>,
    radius: f32,
    /// Top-left of the surface in client coordinates, subtracted from
    /// incoming positions. Zero when the surface fills the window.
    origin: Vec2,
}

impl PointerTracker {
    /// Create a tracker with the default interaction radius and a zero origin.
    pub fn new() -> Self {
        Self {
            position: None,
            radius: POINTER_RADIUS,
            origin: Vec2::ZERO,
        }
    }

    /// Set the surface's top-left offset in client coordinates.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Current interaction state, if any.
    pub fn pointer(&self) -> Option<Pointer> {
        self.position.map(|position| Pointer {
            position,
            radius: self.radius,
        })
    }

    /// Record a move at the given client-space position.
    pub fn moved(&mut self, client: Vec2) {
        self.position = Some(client - self.origin);
    }

    /// Forget the pointer entirely (left the surface, or touch ended).
    pub fn cleared(&mut self) {
        self.position = None;
    }

    /// Process a winit window event, keeping the tracked state current.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => self.cleared(),
            WindowEvent::Touch(Touch {
                phase, location, ..
            }) => match phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    self.moved(Vec2::new(location.x as f32, location.y as f32));
                }
                TouchPhase::Ended | TouchPhase::Cancelled => self.cleared(),
            },
            _ => {}
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent() {
        let tracker = PointerTracker::new();
        assert!(tracker.pointer().is_none());
    }

    #[test]
    fn test_move_then_clear() {
        let mut tracker = PointerTracker::new();

        tracker.moved(Vec2::new(40.0, 30.0));
        let pointer = tracker.pointer().unwrap();
        assert_eq!(pointer.position, Vec2::new(40.0, 30.0));
        assert_eq!(pointer.radius, POINTER_RADIUS);

        tracker.cleared();
        assert!(tracker.pointer().is_none());
    }

    #[test]
    fn test_origin_offset_is_subtracted() {
        let mut tracker = PointerTracker::new();
        tracker.set_origin(Vec2::new(10.0, 50.0));

        tracker.moved(Vec2::new(40.0, 60.0));
        let pointer = tracker.pointer().unwrap();
        assert_eq!(pointer.position, Vec2::new(30.0, 10.0));
    }

    #[test]
    fn test_zero_position_is_still_present() {
        let mut tracker = PointerTracker::new();
        tracker.moved(Vec2::ZERO);
        assert!(tracker.pointer().is_some());
    }
}
