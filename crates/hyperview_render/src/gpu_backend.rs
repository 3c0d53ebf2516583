//! wgpu implementation of the core [`RenderBackend`] seam
//!
//! Draws are queued during the frame and replayed in a single render pass by
//! [`GpuBackend::present`]. Each program owns one uniform buffer, so one
//! draw per program per frame is supported.

use hyperview_core::{BackendError, DrawCall, FrameUniforms, Mesh, MeshId, ProgramId, ProgramKind, RenderBackend};
use wgpu::util::DeviceExt;

use crate::context::RenderContext;
use crate::pipeline::{DepthTarget, ProgramPipeline};

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

/// Backend that draws to the window surface
pub struct GpuBackend {
    context: RenderContext,
    programs: Vec<ProgramPipeline>,
    meshes: Vec<GpuMesh>,
    depth: DepthTarget,
    pending: Vec<DrawCall>,
}

impl GpuBackend {
    pub fn new(context: RenderContext) -> Self {
        Self {
            context,
            programs: Vec::new(),
            meshes: Vec::new(),
            depth: DepthTarget::default(),
            pending: Vec::new(),
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after it was lost or went out of date
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }

    /// Render all queued draws and present the frame
    pub fn present(&mut self, clear_color: [f32; 4]) -> Result<(), wgpu::SurfaceError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(e) => {
                self.pending.clear();
                return Err(e);
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = self.size();
        let depth_view = self.depth.ensure(&self.context.device, width, height);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(to_wgpu_color(clear_color)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for call in &self.pending {
                let (Some(program), Some(mesh)) =
                    (self.programs.get(call.program.0), self.meshes.get(call.mesh.0))
                else {
                    continue;
                };
                program.bind(&mut pass);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..call.index_count, 0, 0..1);
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.pending.clear();

        Ok(())
    }
}

impl RenderBackend for GpuBackend {
    fn is_ready(&self) -> bool {
        true
    }

    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<MeshId, BackendError> {
        if mesh.index_count() == 0 {
            return Err(BackendError::Upload("mesh has no indices".to_string()));
        }

        let device = &self.context.device;
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "Uploaded {} vertices and {} indices",
            mesh.vertex_count(),
            mesh.index_count()
        );

        self.meshes.push(GpuMesh {
            vertex_buffer,
            index_buffer,
        });
        Ok(MeshId(self.meshes.len() - 1))
    }

    fn link_program(&mut self, kind: ProgramKind) -> Result<ProgramId, BackendError> {
        let device = &self.context.device;

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let program = ProgramPipeline::new(device, self.context.config.format, kind);
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(BackendError::ShaderLink {
                program: kind,
                log: err.to_string(),
            });
        }

        log::debug!("Linked {:?} program", program.kind());
        self.programs.push(program);
        Ok(ProgramId(self.programs.len() - 1))
    }

    fn draw(&mut self, call: &DrawCall, uniforms: &FrameUniforms) -> Result<(), BackendError> {
        if self.meshes.get(call.mesh.0).is_none() {
            return Err(BackendError::InvalidHandle(format!("{:?}", call.mesh)));
        }
        let program = self
            .programs
            .get(call.program.0)
            .ok_or_else(|| BackendError::InvalidHandle(format!("{:?}", call.program)))?;

        program.update_uniforms(&self.context.queue, uniforms);
        self.pending.push(*call);
        Ok(())
    }
}

/// Convert an RGBA color to a wgpu clear color
pub fn to_wgpu_color(color: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: color[0] as f64,
        g: color[1] as f64,
        b: color[2] as f64,
        a: color[3] as f64,
    }
}
