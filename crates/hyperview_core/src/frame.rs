//! Per-frame uniform block
//!
//! Everything a backend needs to draw one solid for one frame. The layout is
//! `#[repr(C)]` and 16-byte aligned so it can be copied straight into a GPU
//! uniform buffer.

use bytemuck::{Pod, Zeroable};
use hyperview_math::mat4::Mat4;

use crate::camera::Camera;
use crate::solid::RotatingSolid;

/// Matrices and scalars consumed by both shader programs
///
/// Must match the WGSL `FrameUniforms` struct in the render crate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// 3D model matrix
    pub model: Mat4,
    /// 4D model rotation
    pub model4d: Mat4,
    /// 3D view matrix
    pub view: Mat4,
    /// 4D view matrix, columns wa, wb, wc, wd
    pub view4d: Mat4,
    /// 3D projection
    pub projection: Mat4,
    /// 4D camera position
    pub camera_position_4d: [f32; 4],
    /// 4D projection angle in radians
    pub angle_4d: f32,
    pub _padding: [f32; 3],
}

impl FrameUniforms {
    /// Snapshot the camera and a solid's current matrices
    pub fn new(camera: &Camera, solid: &dyn RotatingSolid) -> Self {
        Self {
            model: solid.model(),
            model4d: solid.model4d(),
            view: camera.view(),
            view4d: camera.view4d(),
            projection: camera.projection(),
            camera_position_4d: camera.position_4d().to_array(),
            angle_4d: camera.fov_4d(),
            _padding: [0.0; 3],
        }
    }
}
