pub(crate) const SHADER_SOURCE: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec2<f32>,
};

struct InstanceInput {
    @location(1) rect: vec4<f32>,
    @location(2) color: vec4<f32>,
    @location(3) color_end: vec4<f32>,
    @location(4) params: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) size: vec2<f32>,
    @location(2) color: vec4<f32>,
    @location(3) color_end: vec4<f32>,
    @location(4) params: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    var out: VertexOutput;

    let size = instance.rect.zw;
    let local = vertex.position * size;
    let pixel = instance.rect.xy + local;

    let ndc_x = (pixel.x / uniforms.resolution.x) * 2.0 - 1.0;
    let ndc_y = 1.0 - (pixel.y / uniforms.resolution.y) * 2.0;

    out.clip_position = vec4<f32>(ndc_x, ndc_y, 0.0, 1.0);
    out.local = local;
    out.size = size;
    out.color = instance.color;
    out.color_end = instance.color_end;
    out.params = instance.params;
    return out;
}

// Signed distance to a rounded box centred on the origin.
fn rounded_box(p: vec2<f32>, half: vec2<f32>, radius: f32) -> f32 {
    let q = abs(p) - half + vec2<f32>(radius, radius);
    return length(max(q, vec2<f32>(0.0, 0.0))) + min(max(q.x, q.y), 0.0) - radius;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let radius = in.params.x;
    let border = in.params.y;
    let half = in.size * 0.5;

    let d = rounded_box(in.local - half, half, radius);
    var coverage = clamp(0.5 - d, 0.0, 1.0);
    if (border > 0.0) {
        coverage = coverage * clamp(d + border + 0.5, 0.0, 1.0);
    }

    let t = clamp(in.local.x / max(in.size.x, 1.0), 0.0, 1.0);
    let color = mix(in.color, in.color_end, t);
    let alpha = color.a * coverage;
    if (alpha <= 0.0) {
        discard;
    }
    return vec4<f32>(color.rgb, alpha);
}
"#;
