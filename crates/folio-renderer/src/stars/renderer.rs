use std::collections::HashMap;

use folio_common::SurfaceId;
use folio_scene::matrix::Mat4;
use folio_scene::{SceneFrame, Star, StarfieldParams};
use wgpu::util::DeviceExt;

use super::pipeline::{create_bind_group_layout, create_pipeline};
use super::types::StarUniforms;

/// Generated stars and uniforms of one surface.
struct StarSet {
    params: StarfieldParams,
    instances: wgpu::Buffer,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Billboarded starfields behind the 3D surfaces.
///
/// Each surface keeps its own instance buffer, regenerated only when its
/// [`StarfieldParams`] change.
pub struct StarRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sets: HashMap<SurfaceId, StarSet>,
}

impl StarRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = create_bind_group_layout(device);
        let pipeline = create_pipeline(device, &bind_group_layout, format);
        Self {
            pipeline,
            bind_group_layout,
            sets: HashMap::new(),
        }
    }

    /// Upload this frame's uniforms for `frame.surface`, generating its
    /// stars first if needed.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &SceneFrame,
        proj: &Mat4,
        resolution: [f32; 2],
        pixel_ratio: f32,
    ) {
        let stale = self
            .sets
            .get(&frame.surface)
            .map_or(true, |set| set.params != frame.stars);
        if stale {
            let set = self.create_set(device, &frame.stars);
            self.sets.insert(frame.surface, set);
        }
        if let Some(set) = self.sets.get(&frame.surface) {
            let uniforms = StarUniforms::new(frame, proj, resolution, pixel_ratio);
            queue.write_buffer(&set.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }
    }

    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>, surface: SurfaceId) {
        let Some(set) = self.sets.get(&surface) else {
            return;
        };
        if set.count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &set.bind_group, &[]);
        pass.set_vertex_buffer(0, set.instances.slice(..));
        pass.draw(0..6, 0..set.count);
    }

    fn create_set(&self, device: &wgpu::Device, params: &StarfieldParams) -> StarSet {
        let mut stars = params.generate();
        tracing::info!(count = stars.len(), "generated starfield");
        let count = stars.len() as u32;
        if stars.is_empty() {
            stars.push(bytemuck::Zeroable::zeroed());
        }
        let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star instances"),
            contents: bytemuck::cast_slice::<Star, u8>(&stars),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("star uniforms"),
            size: std::mem::size_of::<StarUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("star bind group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        StarSet {
            params: *params,
            instances,
            count,
            uniform_buffer,
            bind_group,
        }
    }
}
