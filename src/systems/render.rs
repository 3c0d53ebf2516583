//! GPU rendering system
//!
//! Owns the GPU backend and the camera. The camera is only ever read while
//! drawing; resizes are the one place its projection changes.

use std::sync::Arc;
use winit::window::Window;
use hyperview_core::{Camera, CoreError};
use hyperview_render::{ContextError, GpuBackend, RenderContext};

use crate::config::{CameraConfig, RenderingConfig};
use crate::scene::SolidSet;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// No GPU context could be created
    Context(ContextError),
    /// A solid could not be bound or drawn
    Core(CoreError),
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Context(e) => write!(f, "GPU context error: {}", e),
            RenderError::Core(e) => write!(f, "{}", e),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            RenderError::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<CoreError> for RenderError {
    fn from(e: CoreError) -> Self {
        RenderError::Core(e)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    backend: GpuBackend,
    camera: Camera,
    background: [f32; 4],
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        camera_config: &CameraConfig,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let camera = Camera::new(camera_config.to_settings(context.aspect_ratio()));

        Ok(Self {
            backend: GpuBackend::new(context),
            camera,
            background: render_config.background_color,
        })
    }

    /// Backend for binding solids
    pub fn backend_mut(&mut self) -> &mut GpuBackend {
        &mut self.backend
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.backend.resize(width, height);
        self.camera.set_viewport(width, height);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, solids: &SolidSet) -> Result<(), RenderError> {
        solids.render(&mut self.backend, &self.camera)?;
        self.backend.present(self.background)?;
        Ok(())
    }

    /// Recover after [`RenderError::SurfaceLost`]
    pub fn recover_surface(&mut self) {
        self.backend.reconfigure();
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        self.backend.size()
    }
}
