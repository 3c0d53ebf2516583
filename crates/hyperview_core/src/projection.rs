//! CPU evaluation of the double perspective projection
//!
//! 4D model space -> 4D camera space -> 3D (4D perspective divide) -> clip
//! space (ordinary 3D model/view/projection). The WGSL line shader in the
//! render crate evaluates the same steps per vertex on the GPU; this module
//! is the reference path used by the recording backend and the tests.
//!
//! A point whose depth along `wd` is zero has no finite projection. The
//! divide is not guarded, so such points come out as NaN or infinity.

use hyperview_math::mat4;
use hyperview_math::{Vec3, Vec4};

use crate::backend::ProgramKind;
use crate::frame::FrameUniforms;
use crate::mesh::{Mesh, Topology};

/// Collapse a 4D model-space point to a 3D point
///
/// 1. `p = model4d * point`
/// 2. `v = p - camera_position_4d`
/// 3. `s = (1 / tan(angle_4d / 2)) / dot(v, wd)`
/// 4. `(s * dot(v, wa), s * dot(v, wb), s * dot(v, wc))`
pub fn project_to_3d(point: Vec4, uniforms: &FrameUniforms) -> Vec3 {
    let rotated = mat4::transform(uniforms.model4d, point);
    let v = rotated - Vec4::from_array(uniforms.camera_position_4d);

    let wa = mat4::get_column(uniforms.view4d, 0);
    let wb = mat4::get_column(uniforms.view4d, 1);
    let wc = mat4::get_column(uniforms.view4d, 2);
    let wd = mat4::get_column(uniforms.view4d, 3);

    let t = 1.0 / (uniforms.angle_4d * 0.5).tan();
    let s = t / v.dot(wd);

    Vec3::new(s * v.dot(wa), s * v.dot(wb), s * v.dot(wc))
}

/// `projection * view * model * point`
pub fn model_view_projection(point: Vec4, uniforms: &FrameUniforms) -> Vec4 {
    let mvp = mat4::mul(uniforms.projection, mat4::mul(uniforms.view, uniforms.model));
    mat4::transform(mvp, point)
}

/// Clip-space position of a mesh vertex for the given program
///
/// `Solid3D` treats the stored position as a homogeneous 3D point;
/// `Projected4D` first collapses it from 4D.
pub fn project_vertex(position: [f32; 4], program: ProgramKind, uniforms: &FrameUniforms) -> Vec4 {
    let position = Vec4::from_array(position);
    match program {
        ProgramKind::Solid3D => model_view_projection(position, uniforms),
        ProgramKind::Projected4D => {
            let p3 = project_to_3d(position, uniforms);
            model_view_projection(p3.extend(1.0), uniforms)
        }
    }
}

/// Homogeneous divide
pub fn to_ndc(clip: Vec4) -> Vec3 {
    Vec3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
}

/// Map a clip-space position to pixel coordinates, y pointing down
pub fn to_screen(clip: Vec4, width: u32, height: u32) -> [f32; 2] {
    let ndc = to_ndc(clip);
    [
        (ndc.x + 1.0) * 0.5 * width as f32,
        (1.0 - ndc.y) * 0.5 * height as f32,
    ]
}

/// A vertex after projection; color passes through untouched
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedVertex {
    pub clip: Vec4,
    pub color: [f32; 4],
}

impl ProjectedVertex {
    pub fn ndc(&self) -> Vec3 {
        to_ndc(self.clip)
    }

    /// Inside the clip volume (-w <= x, y, z <= w)
    pub fn is_visible(&self) -> bool {
        let c = self.clip;
        c.w > 0.0
            && c.x.abs() <= c.w
            && c.y.abs() <= c.w
            && c.z.abs() <= c.w
    }
}

/// A whole mesh projected once for one frame
#[derive(Clone, Debug)]
pub struct ProjectedScene {
    pub vertices: Vec<ProjectedVertex>,
    pub indices: Vec<u16>,
    pub topology: Topology,
}

impl ProjectedScene {
    pub fn project(mesh: &Mesh, program: ProgramKind, uniforms: &FrameUniforms) -> Self {
        let vertices = mesh
            .vertices()
            .iter()
            .map(|v| ProjectedVertex {
                clip: project_vertex(v.position, program, uniforms),
                color: v.color,
            })
            .collect();

        Self {
            vertices,
            indices: mesh.indices().to_vec(),
            topology: mesh.topology(),
        }
    }

    /// Screen-space endpoints of every primitive
    pub fn screen_primitives(&self, width: u32, height: u32) -> Vec<Vec<[f32; 2]>> {
        self.indices
            .chunks(self.topology.indices_per_primitive())
            .map(|prim| {
                prim.iter()
                    .map(|&i| to_screen(self.vertices[i as usize].clip, width, height))
                    .collect()
            })
            .collect()
    }

    pub fn visible_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_visible()).count()
    }
}
