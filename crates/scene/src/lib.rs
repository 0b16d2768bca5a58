//! The shadowbox demo scene: one cube, one ground plane, one animated
//! directional light, and the camera watching them.
//!
//! # Invariants
//! - `Scene::advance` is the only mutation path; renderers read, never write.
//! - The light is re-aimed at the cube after every advance.
//! - Oscillating coordinates always move back toward their band once outside it.

pub mod camera;
pub mod light;
pub mod material;
pub mod scene;

pub use camera::Camera;
pub use light::DirectionalLight;
pub use material::PhongMaterial;
pub use scene::{Scene, SceneObject};

pub fn crate_info() -> &'static str {
    "shadowbox-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
