//! Rendering backend seam
//!
//! The core never talks to a graphics API directly. A [`RenderBackend`]
//! receives immutable geometry once and per-frame [`FrameUniforms`]; the
//! wgpu implementation lives in the render crate, and [`RecordingBackend`]
//! evaluates the projection on the CPU for headless runs and tests.

use crate::camera::Camera;
use crate::error::{BackendError, CoreError};
use crate::frame::FrameUniforms;
use crate::mesh::{Mesh, Topology};
use crate::projection::ProjectedScene;
use crate::solid::RotatingSolid;

/// The two shader programs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// Plain model/view/projection, triangles
    Solid3D,
    /// Double perspective projection, lines
    Projected4D,
}

impl ProgramKind {
    pub fn topology(self) -> Topology {
        match self {
            ProgramKind::Solid3D => Topology::Triangles,
            ProgramKind::Projected4D => Topology::Lines,
        }
    }
}

/// Handle to geometry uploaded to a backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Handle to a linked shader program
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramId(pub usize);

/// One indexed draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub mesh: MeshId,
    pub program: ProgramId,
    pub topology: Topology,
    pub index_count: u32,
}

/// Something that can hold geometry and draw it with per-frame uniforms
pub trait RenderBackend {
    /// Whether the device/context exists
    fn is_ready(&self) -> bool;

    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<MeshId, BackendError>;

    fn link_program(&mut self, kind: ProgramKind) -> Result<ProgramId, BackendError>;

    fn draw(&mut self, call: &DrawCall, uniforms: &FrameUniforms) -> Result<(), BackendError>;
}

/// A solid bound to the geometry and program it was uploaded with
pub struct SolidRenderer<S: RotatingSolid> {
    solid: S,
    call: DrawCall,
}

impl<S: RotatingSolid> SolidRenderer<S> {
    /// Upload the solid's mesh and link its program
    ///
    /// Fails if the backend has no context, or if the upload or link is
    /// rejected. A solid that cannot be drawn is never constructed.
    pub fn new(backend: &mut dyn RenderBackend, solid: S) -> Result<Self, CoreError> {
        if !backend.is_ready() {
            return Err(CoreError::MissingContext("render backend has no device"));
        }

        let kind = solid.kind();
        let mesh = backend.upload_mesh(solid.mesh())?;
        let program = backend.link_program(kind.program())?;

        log::debug!(
            "Bound {:?}: {} vertices, {} indices",
            kind,
            solid.mesh().vertex_count(),
            solid.mesh().index_count()
        );

        let call = DrawCall {
            mesh,
            program,
            topology: solid.mesh().topology(),
            index_count: solid.mesh().index_count() as u32,
        };

        Ok(Self { solid, call })
    }

    pub fn solid(&self) -> &S {
        &self.solid
    }

    pub fn solid_mut(&mut self) -> &mut S {
        &mut self.solid
    }

    pub fn draw_call(&self) -> &DrawCall {
        &self.call
    }

    pub fn update(&mut self, delta_seconds: f32) {
        self.solid.update(delta_seconds);
    }

    /// Submit one draw; the camera is only read
    pub fn render(&self, backend: &mut dyn RenderBackend, camera: &Camera) -> Result<(), CoreError> {
        let uniforms = FrameUniforms::new(camera, &self.solid);
        backend.draw(&self.call, &uniforms)?;
        Ok(())
    }
}

/// Last draw seen by a [`RecordingBackend`]
#[derive(Clone, Debug)]
pub struct RecordedDraw {
    pub call: DrawCall,
    pub uniforms: FrameUniforms,
    pub scene: ProjectedScene,
}

/// CPU backend that projects every draw and keeps the latest result
#[derive(Debug, Default)]
pub struct RecordingBackend {
    detached: bool,
    reject_program: Option<ProgramKind>,
    meshes: Vec<Mesh>,
    programs: Vec<ProgramKind>,
    draw_count: usize,
    last: Option<RecordedDraw>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with no context, as if device creation had failed
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    /// Make linking the given program fail
    pub fn rejecting(program: ProgramKind) -> Self {
        Self {
            reject_program: Some(program),
            ..Self::default()
        }
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn last_draw(&self) -> Option<&RecordedDraw> {
        self.last.as_ref()
    }
}

impl RenderBackend for RecordingBackend {
    fn is_ready(&self) -> bool {
        !self.detached
    }

    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<MeshId, BackendError> {
        if mesh.vertex_count() > u16::MAX as usize + 1 {
            return Err(BackendError::Upload(format!(
                "{} vertices do not fit 16-bit indices",
                mesh.vertex_count()
            )));
        }
        self.meshes.push(mesh.clone());
        Ok(MeshId(self.meshes.len() - 1))
    }

    fn link_program(&mut self, kind: ProgramKind) -> Result<ProgramId, BackendError> {
        if self.reject_program == Some(kind) {
            return Err(BackendError::ShaderLink {
                program: kind,
                log: "program rejected by recording backend".to_string(),
            });
        }
        self.programs.push(kind);
        Ok(ProgramId(self.programs.len() - 1))
    }

    fn draw(&mut self, call: &DrawCall, uniforms: &FrameUniforms) -> Result<(), BackendError> {
        let mesh = self
            .meshes
            .get(call.mesh.0)
            .ok_or_else(|| BackendError::InvalidHandle(format!("{:?}", call.mesh)))?;
        let program = *self
            .programs
            .get(call.program.0)
            .ok_or_else(|| BackendError::InvalidHandle(format!("{:?}", call.program)))?;

        if program.topology() != call.topology {
            return Err(BackendError::InvalidHandle(format!(
                "{:?} cannot draw {:?}",
                program, call.topology
            )));
        }

        let scene = ProjectedScene::project(mesh, program, uniforms);
        self.draw_count += 1;
        self.last = Some(RecordedDraw {
            call: *call,
            uniforms: *uniforms,
            scene,
        });
        Ok(())
    }
}
