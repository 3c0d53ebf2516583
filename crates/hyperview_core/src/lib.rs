//! Core types for hyperview
//!
//! This crate holds everything between the math layer and a graphics API:
//!
//! - [`Camera`] - 3D look-at camera plus a 4D look-at frame
//! - [`Cube`], [`Hypercube`] - the two [`RotatingSolid`]s
//! - [`FrameUniforms`] - per-frame matrices handed to a backend
//! - [`projection`] - CPU evaluation of the double perspective projection
//! - [`RenderBackend`] - the seam a graphics backend implements
//! - [`CoreError`] - construction failures

mod backend;
mod camera;
mod cube;
mod error;
mod frame;
mod hypercube;
mod mesh;
pub mod projection;
mod solid;

pub use backend::{
    DrawCall, MeshId, ProgramId, ProgramKind, RecordedDraw, RecordingBackend, RenderBackend,
    SolidRenderer,
};
pub use camera::{Camera, CameraSettings};
pub use cube::{Cube, FACE_COLORS};
pub use error::{BackendError, CoreError};
pub use frame::FrameUniforms;
pub use hypercube::{
    Hypercube, DEFAULT_ROTATION_SPEED, INNER_COLOR, MAX_ROTATION_SPEED, MIN_ROTATION_SPEED,
    OUTER_COLOR,
};
pub use mesh::{Mesh, Topology, Vertex};
pub use projection::{ProjectedScene, ProjectedVertex};
pub use solid::{RotatingSolid, SolidKind, Tumble};

// Re-export commonly used math types for convenience
pub use hyperview_math::{Mat4, RotationPlane, Vec3, Vec4};
