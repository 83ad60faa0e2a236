//! GPU-side data layouts and the render shader.
//!
//! Circles are drawn as instanced quads that the fragment stage cuts down to
//! discs; links are a plain line list. Both share one uniform carrying the
//! surface resolution, used to map pixel coordinates (origin top-left, Y
//! down) into clip space.

use bytemuck::{Pod, Zeroable};

/// One particle dot, expanded to a quad in the vertex stage.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct CircleInstance {
    /// Centre in surface pixels.
    pub center: [f32; 2],
    /// Radius in pixels.
    pub radius: f32,
    /// Fill opacity.
    pub alpha: f32,
}

/// One endpoint of a link segment.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in surface pixels.
    pub position: [f32; 2],
    /// Stroke opacity.
    pub alpha: f32,
}

/// Shared uniforms for both pipelines.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Globals {
    /// Surface size in pixels.
    pub resolution: [f32; 2],
    pub _padding: [f32; 2],
}

pub const SHADER_SOURCE: &str = r#"
struct Globals {
    resolution: vec2<f32>,
    _padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

fn to_clip(p: vec2<f32>) -> vec4<f32> {
    let ndc = vec2<f32>(
        p.x / globals.resolution.x * 2.0 - 1.0,
        1.0 - p.y / globals.resolution.y * 2.0,
    );
    return vec4<f32>(ndc, 0.0, 1.0);
}

struct CircleOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) alpha: f32,
};

@vertex
fn vs_circle(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) alpha: f32,
) -> CircleOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let quad_pos = quad_vertices[vertex_index];

    var out: CircleOutput;
    out.clip_position = to_clip(center + quad_pos * radius);
    out.uv = quad_pos;
    out.alpha = alpha;
    return out;
}

@fragment
fn fs_circle(in: CircleOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }
    let edge = 1.0 - smoothstep(0.9, 1.0, dist);
    return vec4<f32>(1.0, 1.0, 1.0, in.alpha * edge);
}

struct LineOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) alpha: f32,
};

@vertex
fn vs_line(
    @location(0) position: vec2<f32>,
    @location(1) alpha: f32,
) -> LineOutput {
    var out: LineOutput;
    out.clip_position = to_clip(position);
    out.alpha = alpha;
    return out;
}

@fragment
fn fs_line(in: LineOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, in.alpha);
}
"#;
