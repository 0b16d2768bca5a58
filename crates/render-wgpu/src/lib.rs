//! wgpu render backend for the shadowbox demo.
//!
//! Renders the scene twice per frame: a depth-only pass from the light's
//! point of view into the shadow map, then the lit pass from the camera,
//! sampling that shadow map per fragment. An optional third pass replaces
//! the image with a grayscale view of the shadow map.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - All GPU resources are created once at construction; per-frame work is
//!   buffer writes and pass encoding only.
//! - The shadow pass is encoded before the lit pass in every frame.

mod gpu;
mod mesh;
mod shaders;

pub use gpu::WgpuRenderer;
pub use mesh::{OverlayVertex, Vertex, cube_mesh, ground_plane_mesh, screen_quad_mesh};
