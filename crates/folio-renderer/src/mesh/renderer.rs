use std::collections::HashMap;
use std::ops::Range;

use folio_scene::matrix::Mat4;
use folio_scene::{MeshKey, SceneFrame};
use wgpu::util::DeviceExt;

use super::pipeline::{create_bind_group_layout, create_pipeline, SHADER_SOURCE};
use super::types::{MeshPass, MeshUniforms, INITIAL_DRAWS};
use crate::gpu::aligned_stride;

struct GpuMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

struct QueuedDraw {
    key: MeshKey,
    pass: MeshPass,
    offset: u32,
}

/// Draws the lit primitives of every visible 3D surface.
///
/// Uniforms for all surfaces of a frame are staged into one buffer and
/// selected per draw with a dynamic offset. Geometry is uploaded once per
/// distinct [`MeshKey`].
pub struct MeshRenderer {
    opaque: wgpu::RenderPipeline,
    transparent: wgpu::RenderPipeline,
    wireframe: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    stride: u64,
    capacity: u64,
    meshes: HashMap<MeshKey, GpuMesh>,
    staging: Vec<u8>,
    draws: Vec<QueuedDraw>,
}

impl MeshRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let bind_group_layout = create_bind_group_layout(device);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let stride = aligned_stride(
            std::mem::size_of::<MeshUniforms>() as u64,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let uniform_buffer = create_uniform_buffer(device, stride * INITIAL_DRAWS);
        let bind_group = create_bind_group(device, &bind_group_layout, &uniform_buffer);

        Self {
            opaque: create_pipeline(device, &pipeline_layout, &shader, format, MeshPass::Opaque),
            transparent: create_pipeline(
                device,
                &pipeline_layout,
                &shader,
                format,
                MeshPass::Transparent,
            ),
            wireframe: create_pipeline(
                device,
                &pipeline_layout,
                &shader,
                format,
                MeshPass::Wireframe,
            ),
            bind_group_layout,
            bind_group,
            uniform_buffer,
            stride,
            capacity: INITIAL_DRAWS,
            meshes: HashMap::new(),
            staging: Vec::new(),
            draws: Vec::new(),
        }
    }

    /// Forget the previous frame's draws.
    pub fn begin_frame(&mut self) {
        self.staging.clear();
        self.draws.clear();
    }

    /// Stage every mesh of `frame`. Returns the draw range to pass to
    /// [`MeshRenderer::render`].
    ///
    /// `view_proj` is `remap × projection × view` for the surface's rect.
    pub fn queue_scene(
        &mut self,
        device: &wgpu::Device,
        frame: &SceneFrame,
        view_proj: &Mat4,
    ) -> Range<usize> {
        let start = self.draws.len();
        for draw in frame.sorted_meshes() {
            self.meshes.entry(draw.key).or_insert_with(|| {
                let vertices = draw.key.build();
                tracing::debug!(?draw.key, vertices = vertices.len(), "uploading mesh");
                GpuMesh {
                    buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("mesh vertices"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    vertex_count: vertices.len() as u32,
                }
            });

            let offset = self.staging.len();
            let uniforms = MeshUniforms::new(view_proj, draw, &frame.lighting);
            self.staging.extend_from_slice(bytemuck::bytes_of(&uniforms));
            self.staging.resize(offset + self.stride as usize, 0);

            self.draws.push(QueuedDraw {
                key: draw.key,
                pass: MeshPass::for_draw(draw),
                offset: offset as u32,
            });
        }
        start..self.draws.len()
    }

    /// Upload the staged uniforms, growing the buffer if needed.
    pub fn finish(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        let needed = self.draws.len() as u64;
        if needed > self.capacity {
            let capacity = needed.next_power_of_two();
            tracing::debug!("growing mesh uniform buffer to {capacity} draws");
            self.uniform_buffer = create_uniform_buffer(device, self.stride * capacity);
            self.bind_group = create_bind_group(device, &self.bind_group_layout, &self.uniform_buffer);
            self.capacity = capacity;
        }
        if !self.staging.is_empty() {
            queue.write_buffer(&self.uniform_buffer, 0, &self.staging);
        }
    }

    /// Record a range of draws returned by [`MeshRenderer::queue_scene`].
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>, range: Range<usize>) {
        let Some(draws) = self.draws.get(range) else {
            return;
        };
        for draw in draws {
            let Some(mesh) = self.meshes.get(&draw.key) else {
                continue;
            };
            let pipeline = match draw.pass {
                MeshPass::Opaque => &self.opaque,
                MeshPass::Transparent => &self.transparent,
                MeshPass::Wireframe => &self.wireframe,
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(0, &self.bind_group, &[draw.offset]);
            pass.set_vertex_buffer(0, mesh.buffer.slice(..));
            pass.draw(0..mesh.vertex_count, 0..1);
        }
    }
}

fn create_uniform_buffer(device: &wgpu::Device, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("mesh uniforms"),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("mesh bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer,
                offset: 0,
                size: std::num::NonZeroU64::new(std::mem::size_of::<MeshUniforms>() as u64),
            }),
        }],
    })
}
