//! # Plexus - Interactive Particle-Network Backgrounds
//!
//! A decorative real-time particle field: point-mass particles drift inside
//! the surface, bounce off its edges, inflate when the pointer comes near,
//! and are joined by proximity-faded line segments.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexus::Simulation;
//!
//! fn main() {
//!     Simulation::new()
//!         .with_title("My Background")
//!         .with_link_distance(100.0)
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! The population is derived from the surface area
//! (`max(20, floor(width * height / 12000))`) and rebuilt from scratch on
//! every resize. Between seeds the count never changes: each tick only moves
//! particles, reflects them at the edges, and adjusts their size toward or
//! away from the pointer.
//!
//! ### Links
//!
//! Every pair of particles closer than the link distance is joined by a line
//! whose opacity fades linearly to zero at the threshold. The pass is O(n²),
//! which the seeding formula keeps affordable.
//!
//! ### Lifecycle
//!
//! [`Engine`] is a two-state machine: `start()` seeds and arms ticking,
//! `stop()` disarms it (idempotently). [`Simulation`] hosts an engine in a
//! winit window and drives one tick per frame callback. Embedders with their
//! own window can instead hold an [`Engine`] and a [`Surface`] implementation
//! and call `tick` themselves.
//!
//! ### Degradation
//!
//! The background is cosmetic. When no GPU adapter or device can be acquired
//! the windowed runner logs a warning and shows a blank panel; nothing
//! panics, and `run()` still returns `Ok`.

pub mod engine;
pub mod error;
pub mod field;
pub mod gpu;
pub mod links;
pub mod particle;
pub mod pointer;
mod shader;
mod simulation;
pub mod surface;

pub use engine::Engine;
pub use error::{GpuError, SimulationError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use gpu::GpuSurface;
pub use particle::Particle;
pub use pointer::{Pointer, PointerTracker};
pub use simulation::Simulation;
pub use surface::Surface;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use plexus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::Engine;
    pub use crate::error::{GpuError, SimulationError};
    pub use crate::field::ParticleField;
    pub use crate::particle::Particle;
    pub use crate::pointer::{Pointer, PointerTracker};
    pub use crate::simulation::Simulation;
    pub use crate::surface::Surface;
    pub use crate::Vec2;
}
