//! The drawing-surface abstraction.
//!
//! The engine only ever issues three immediate-mode calls: clear the frame,
//! fill a circle, stroke a line. Anything that can do those can host the
//! background; [`GpuSurface`](crate::gpu::GpuSurface) batches them into
//! instanced GPU draws, and tests use a recording double.

use glam::Vec2;

/// Minimal immediate-mode 2D drawing target.
///
/// Coordinates are in surface pixels with the origin at the top-left and Y
/// pointing down. `alpha` is an opacity in `[0, 1]`.
pub trait Surface {
    /// Current drawable size in pixels as `(width, height)`.
    fn size(&self) -> (f32, f32);

    /// Erase everything drawn for the previous frame.
    fn clear(&mut self);

    /// Fill a circle of `radius` pixels centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);

    /// Stroke a thin line from `from` to `to`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

/// Recording surface for draw-call assertions in tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: f32,
        pub height: f32,
        pub clears: usize,
        pub circles: Vec<(Vec2, f32, f32)>,
        pub lines: Vec<(Vec2, Vec2, f32)>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                ..Default::default()
            }
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn clear(&mut self) {
            self.clears += 1;
            self.circles.clear();
            self.lines.clear();
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
            self.circles.push((center, radius, alpha));
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
            self.lines.push((from, to, alpha));
        }
    }
}
