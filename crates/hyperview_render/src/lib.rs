//! wgpu rendering for hyperview
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ProgramPipeline`] - one render pipeline per shader program
//! - [`GpuBackend`] - implements the core `RenderBackend` trait on top of both
//!
//! The 4D wireframe shader evaluates the double perspective projection per
//! vertex; the CPU reference lives in `hyperview_core::projection`.

pub mod context;
mod gpu_backend;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use gpu_backend::{to_wgpu_color, GpuBackend};

// Re-export core types for convenience
pub use hyperview_core::{BackendError, FrameUniforms, ProgramKind, RenderBackend};
