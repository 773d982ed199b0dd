//! Ground-plane grid renderer.
//!
//! Draws the white line grid on the y = 0 plane: a fixed lattice of
//! crossing lines, uploaded once, transformed per frame by the
//! combined view-projection matrix.

use glam::Mat4;
use wgpu::util::DeviceExt;

use super::context::RenderContext;
use super::{FrameParams, RenderBackend};

/// Number of grid lines along each axis.
const GRID_LINES: u32 = 50;
/// Spacing between adjacent lines in world units.
const GRID_GAP: f32 = 0.5;

const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

const GRID_SHADER: &str = r"
struct FrameUniform {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0) var<uniform> frame: FrameUniform;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return frame.view_proj * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 1.0);
}
";

/// Vertex for the grid line list.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GridVertex {
    position: [f32; 3],
}

/// Per-frame uniform holding the combined view-projection matrix.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniform {
    view_proj: [[f32; 4]; 4],
}

/// wgpu-backed implementation of the rendering collaborator.
pub struct GridRenderer {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GridRenderer {
    /// Build the grid pipeline and upload the line lattice.
    #[must_use]
    pub fn new(context: RenderContext) -> Self {
        let vertices = grid_vertices();

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Grid Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let uniform = FrameUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };
        let uniform_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Frame Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
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
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Frame Bind Group"),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });

        let pipeline = create_pipeline(&context, &bind_group_layout);

        Self {
            context,
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }
}

impl RenderBackend for GridRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    fn render(&mut self, frame: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let uniform = FrameUniform {
            view_proj: (frame.projection * frame.view).to_cols_array_2d(),
        };
        self.context.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[uniform]),
        );

        let surface_texture = self.context.get_next_frame()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Grid Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

            if frame.draw_plane {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.context.submit(encoder);
        surface_texture.present();
        Ok(())
    }
}

fn create_pipeline(
    context: &RenderContext,
    bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = context.device.create_shader_module(
        wgpu::ShaderModuleDescriptor {
            label: Some("Grid Shader"),
            source: wgpu::ShaderSource::Wgsl(GRID_SHADER.into()),
        },
    );

    let layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some("Grid Pipeline Layout"),
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        },
    );

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Grid Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<GridVertex>()
                        as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

/// Line-list vertices for the ground lattice: for each step along one
/// axis, one line spanning the other.
fn grid_vertices() -> Vec<GridVertex> {
    let half = GRID_LINES as f32 * GRID_GAP * 0.5;
    let mut vertices =
        Vec::with_capacity(((GRID_LINES + 1) * 4) as usize);
    for n in 0..=GRID_LINES {
        let offset = -half + n as f32 * GRID_GAP;
        vertices.push(GridVertex { position: [offset, 0.0, half] });
        vertices.push(GridVertex { position: [offset, 0.0, -half] });
        vertices.push(GridVertex { position: [half, 0.0, offset] });
        vertices.push(GridVertex { position: [-half, 0.0, offset] });
    }
    vertices
}
