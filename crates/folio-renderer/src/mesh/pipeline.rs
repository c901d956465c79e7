//! Mesh shader and pipeline construction.

use super::types::{MeshPass, MeshUniforms, VERTEX_LAYOUT};
use crate::gpu::DEPTH_FORMAT;

pub(crate) const SHADER_SOURCE: &str = r#"
struct MeshUniforms {
    mvp: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec4<f32>,
    params: vec4<f32>,
    light_position: array<vec4<f32>, 2>,
    light_color: array<vec4<f32>, 2>,
};

@group(0) @binding(0)
var<uniform> u: MeshUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) barycentric: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) barycentric: vec3<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let local = vec4<f32>(in.position, 1.0);
    out.clip_position = u.mvp * local;
    out.world = (u.model * local).xyz;
    out.normal = (u.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.barycentric = in.barycentric;
    return out;
}

// Ambient plus Lambert diffuse from each point light.
fn shade(world: vec3<f32>, normal: vec3<f32>, two_sided: bool) -> vec3<f32> {
    let n = normalize(normal);
    var light = vec3<f32>(u.params.y, u.params.y, u.params.y);
    let count = u32(u.params.z);
    for (var i = 0u; i < count; i = i + 1u) {
        let dir = normalize(u.light_position[i].xyz - world);
        var lambert = dot(n, dir);
        if (two_sided) {
            lambert = abs(lambert);
        }
        light = light + u.light_color[i].rgb * max(lambert, 0.0);
    }
    return u.color.rgb * light;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(shade(in.world, in.normal, false), u.params.x);
}

@fragment
fn fs_wire(in: VertexOutput) -> @location(0) vec4<f32> {
    let width = fwidth(in.barycentric);
    let edge = smoothstep(vec3<f32>(0.0, 0.0, 0.0), width * 1.5, in.barycentric);
    let line = 1.0 - min(min(edge.x, edge.y), edge.z);
    let alpha = line * u.params.x;
    if (alpha < 0.01) {
        discard;
    }
    return vec4<f32>(shade(in.world, in.normal, true), alpha);
}
"#;

pub(crate) fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("mesh uniforms layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: std::num::NonZeroU64::new(
                    std::mem::size_of::<MeshUniforms>() as u64
                ),
            },
            count: None,
        }],
    })
}

pub(crate) fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    pass: MeshPass,
) -> wgpu::RenderPipeline {
    let (label, fragment, cull_mode, depth_write) = match pass {
        MeshPass::Opaque => ("mesh opaque pipeline", "fs_main", Some(wgpu::Face::Back), true),
        MeshPass::Transparent => ("mesh transparent pipeline", "fs_main", Some(wgpu::Face::Back), false),
        MeshPass::Wireframe => ("mesh wireframe pipeline", "fs_wire", None, true),
    };

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[VERTEX_LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fragment),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
