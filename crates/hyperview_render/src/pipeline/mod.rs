//! Rendering pipeline components
//!
//! One render pipeline per shader program, plus the depth buffer they share.

mod depth;
mod program;

pub use depth::{DepthTarget, DEPTH_FORMAT};
pub use program::{
    primitive_topology, shader_source, vertex_buffer_layout, ProgramPipeline, DEPTH_COMPARE,
};
