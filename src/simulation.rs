//! Simulation builder and windowed runner.
//!
//! [`Simulation`] wires the engine into a winit window: it creates the
//! drawing surface, forwards pointer/touch events, re-seeds on resize, and
//! drives one tick per `RedrawRequested`, re-arming the next frame with
//! `request_redraw`. If no GPU can be acquired the window simply stays blank;
//! the background is decorative and never worth failing the host over.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::engine::Engine;
use crate::error::SimulationError;
use crate::gpu::GpuSurface;
use crate::links;

/// A particle-network background builder.
///
/// Use method chaining to configure, then call `.run()` to open the window.
pub struct Simulation {
    title: String,
    window_size: (u32, u32),
    link_distance: f32,
    clear_color: wgpu::Color,
}

impl Simulation {
    /// Create a simulation with default settings.
    pub fn new() -> Self {
        Self {
            title: "Plexus".to_string(),
            window_size: (1280, 720),
            link_distance: links::LINK_DISTANCE,
            clear_color: wgpu::Color {
                r: 0.02,
                g: 0.02,
                b: 0.05,
                a: 1.0,
            },
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set the distance below which particles are linked.
    pub fn with_link_distance(mut self, distance: f32) -> Self {
        self.link_distance = distance;
        self
    }

    /// Set the background clear color.
    pub fn with_clear_color(mut self, r: f64, g: f64, b: f64) -> Self {
        self.clear_color = wgpu::Color { r, g, b, a: 1.0 };
        self
    }

    /// Open the window and run. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: Simulation,
    window: Option<Arc<Window>>,
    gpu: Option<GpuSurface>,
    engine: Engine,
    error: Option<SimulationError>,
}

impl App {
    fn new(config: Simulation) -> Self {
        let engine = Engine::with_link_distance(config.link_distance);
        Self {
            config,
            window: None,
            gpu: None,
            engine,
            error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_size.0,
                self.config.window_size.1,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.error = Some(err.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuSurface::new(window.clone(), self.config.clear_color)) {
            Ok(gpu) => {
                let size = gpu.pixel_size();
                self.engine.start(size.width as f32, size.height as f32);
                self.gpu = Some(gpu);
                window.request_redraw();
            }
            Err(err) => {
                // Unsupported environment: leave the panel blank, keep going.
                log::warn!("no drawing surface available, background disabled: {}", err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.engine.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                    let size = gpu.pixel_size();
                    self.engine.resize(size.width as f32, size.height as f32);
                }
            }
            WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::Touch(_) => {
                self.engine.handle_event(&event);
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu) = &mut self.gpu {
                    self.engine.tick(gpu);
                    match gpu.present() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = gpu.pixel_size();
                            gpu.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("out of GPU memory, shutting down");
                            self.engine.stop();
                            event_loop.exit();
                        }
                        Err(err) => log::error!("present failed: {:?}", err),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
