/// WGSL shader for the lit pass: Phong shading with a shadow-map lookup.
///
/// The shadow factor transforms the fragment's world position by the light
/// view-projection, remaps NDC to texture UV (Y flipped), and runs one
/// hardware depth comparison. Fragments outside the light frustum are lit.
pub const SCENE_SHADER: &str = r#"
struct SceneUniforms {
    view_proj: mat4x4<f32>,
    light_view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    // w carries the light brightness.
    light_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: SceneUniforms;
@group(0) @binding(1)
var shadow_map: texture_depth_2d;
@group(0) @binding(2)
var shadow_sampler: sampler_comparison;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct ObjectInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) ambient: vec4<f32>,
    @location(7) diffuse: vec4<f32>,
    @location(8) specular: vec4<f32>,
    @location(9) params: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) ambient: vec4<f32>,
    @location(3) diffuse: vec4<f32>,
    @location(4) specular: vec4<f32>,
    @location(5) params: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, object: ObjectInput) -> VertexOutput {
    let model = mat4x4<f32>(
        object.model_0,
        object.model_1,
        object.model_2,
        object.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = world_normal;
    out.ambient = object.ambient;
    out.diffuse = object.diffuse;
    out.specular = object.specular;
    out.params = object.params;
    return out;
}

fn shadow_factor(world_pos: vec3<f32>) -> f32 {
    let light_clip = uniforms.light_view_proj * vec4<f32>(world_pos, 1.0);
    let ndc = light_clip.xyz / light_clip.w;
    let uv = vec2<f32>(ndc.x * 0.5 + 0.5, -ndc.y * 0.5 + 0.5);
    let in_bounds = uv.x >= 0.0 && uv.x <= 1.0
        && uv.y >= 0.0 && uv.y <= 1.0
        && ndc.z <= 1.0;
    let lit = textureSampleCompareLevel(shadow_map, shadow_sampler, uv, ndc.z);
    return select(1.0, lit, in_bounds);
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let to_light = uniforms.light_pos.xyz - in.world_pos;
    let l = normalize(to_light);
    let v = normalize(uniforms.camera_pos.xyz - in.world_pos);
    let r = reflect(-l, n);

    let brightness = uniforms.light_pos.w;
    let illuminance = max(dot(n, l), 0.0) * brightness * 40.0 / dot(to_light, to_light);

    var luminance = in.ambient.rgb;
    if illuminance > 0.0 {
        let gloss = max(in.params.x, 0.0);
        let specular_intensity = pow(max(dot(r, v), 0.0), gloss);
        let brdf = in.diffuse.rgb + in.specular.rgb * specular_intensity;
        // Shadow scales the direct term only; ambient survives in shadow.
        luminance += brdf * illuminance * shadow_factor(in.world_pos);
    }

    return vec4<f32>(luminance, 1.0);
}
"#;

/// WGSL shader for the shadow pass: depth only, rendered from the light.
pub const SHADOW_SHADER: &str = r#"
struct ShadowUniforms {
    light_view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: ShadowUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
};

struct ObjectInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
};

@vertex
fn vs_shadow(vertex: VertexInput, object: ObjectInput) -> @builtin(position) vec4<f32> {
    let model = mat4x4<f32>(
        object.model_0,
        object.model_1,
        object.model_2,
        object.model_3,
    );
    return uniforms.light_view_proj * model * vec4<f32>(vertex.position, 1.0);
}
"#;

/// WGSL shader for the shadow-map overlay: the unit quad is remapped to
/// clip space and the stored depth is shown as grayscale.
pub const OVERLAY_SHADER: &str = r#"
@group(0) @binding(0)
var shadow_map: texture_depth_2d;
@group(0) @binding(1)
var overlay_sampler: sampler;

struct OverlayInput {
    @location(0) position: vec2<f32>,
};

struct OverlayOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_overlay(vertex: OverlayInput) -> OverlayOutput {
    var out: OverlayOutput;
    let ndc = vertex.position * 2.0 - vec2<f32>(1.0, 1.0);
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.uv = vec2<f32>(vertex.position.x, 1.0 - vertex.position.y);
    return out;
}

@fragment
fn fs_overlay(in: OverlayOutput) -> @location(0) vec4<f32> {
    let depth = textureSample(shadow_map, overlay_sampler, in.uv);
    return vec4<f32>(vec3<f32>(depth), 1.0);
}
"#;
