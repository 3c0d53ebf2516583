//! Render pipelines for the two shader programs
//!
//! Both programs share one vertex layout (position vec4 + color vec4) and
//! one uniform block ([`FrameUniforms`]). They differ in shader and
//! primitive topology: triangles for the 3D solid, lines for the 4D
//! wireframe. Neither culls faces, and depth passes on less-or-equal.

use bytemuck::Zeroable;
use hyperview_core::{FrameUniforms, ProgramKind, Vertex};
use wgpu::util::DeviceExt;

use super::depth::DEPTH_FORMAT;

/// Shader source for a program
pub fn shader_source(kind: ProgramKind) -> &'static str {
    match kind {
        ProgramKind::Solid3D => include_str!("../shaders/solid.wgsl"),
        ProgramKind::Projected4D => include_str!("../shaders/wireframe.wgsl"),
    }
}

/// wgpu topology for a program
pub fn primitive_topology(kind: ProgramKind) -> wgpu::PrimitiveTopology {
    match kind {
        ProgramKind::Solid3D => wgpu::PrimitiveTopology::TriangleList,
        ProgramKind::Projected4D => wgpu::PrimitiveTopology::LineList,
    }
}

/// Depth test shared by both programs
pub const DEPTH_COMPARE: wgpu::CompareFunction = wgpu::CompareFunction::LessEqual;

/// Vertex buffer layout for [`Vertex`]
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec4<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 0,
                shader_location: 0,
            },
            // color: vec4<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 1,
            },
        ],
    }
}

/// A linked program: pipeline, uniform buffer and bind group
pub struct ProgramPipeline {
    kind: ProgramKind,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ProgramPipeline {
    /// Create the pipeline for `kind`
    ///
    /// Shader and pipeline validation errors are reported through the
    /// device's error scopes, not returned here.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, kind: ProgramKind) -> Self {
        let label = format!("{:?}", kind);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&label),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&label),
            source: wgpu::ShaderSource::Wgsl(shader_source(kind).into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: primitive_topology(kind),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: DEPTH_COMPARE,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::bytes_of(&FrameUniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            kind,
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    pub fn kind(&self) -> ProgramKind {
        self.kind
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Bind pipeline and uniforms on a render pass
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<Vertex>() as u64);
        assert_eq!(layout.attributes[1].offset, 16);
    }

    #[test]
    fn test_topology_matches_program() {
        assert_eq!(
            primitive_topology(ProgramKind::Solid3D),
            wgpu::PrimitiveTopology::TriangleList
        );
        assert_eq!(
            primitive_topology(ProgramKind::Projected4D),
            wgpu::PrimitiveTopology::LineList
        );
    }

    #[test]
    fn test_depth_accepts_equal_depth() {
        assert_eq!(DEPTH_COMPARE, wgpu::CompareFunction::LessEqual);
    }

    #[test]
    fn test_shaders_declare_frame_uniforms_in_order() {
        let fields = [
            "model:",
            "model4d:",
            "view:",
            "view4d:",
            "projection:",
            "camera_position_4d:",
            "angle_4d:",
        ];
        for kind in [ProgramKind::Solid3D, ProgramKind::Projected4D] {
            let source = shader_source(kind);
            let mut cursor = 0;
            for field in fields {
                let found = source[cursor..]
                    .find(&format!("    {}", field))
                    .unwrap_or_else(|| panic!("{:?} shader is missing {}", kind, field));
                cursor += found + field.len();
            }
        }
    }
}
