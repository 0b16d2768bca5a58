use shadowbox_scene::{DirectionalLight, Scene};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene state and produces output. It never mutates the
/// scene; animation is owned by [`Scene::advance`].
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state.
    fn render(&self, scene: &Scene) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable description of the scene. Useful for CLI
/// output, logging, and testing the render interface without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Scene (frame={}, t={:.2}s) ===\n",
            scene.frame(),
            scene.time()
        ));

        let cam = &scene.camera;
        out.push_str(&format!(
            "Camera: pos=({:.2}, {:.2}, {:.2}) pitch={:.1}deg fov={:.0}deg\n",
            cam.position.x,
            cam.position.y,
            cam.position.z,
            cam.pitch.to_degrees(),
            cam.fov.to_degrees()
        ));

        let light = &scene.light;
        out.push_str(&format!(
            "Light: pos=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) brightness={:.1} shadow={}x{}\n",
            light.position.x,
            light.position.y,
            light.position.z,
            light.target.x,
            light.target.y,
            light.target.z,
            light.brightness,
            DirectionalLight::SHADOW_MAP_SIZE,
            DirectionalLight::SHADOW_MAP_SIZE
        ));

        for (name, object) in [("cube", &scene.cube), ("ground", &scene.ground)] {
            let p = object.transform.position;
            let s = object.transform.scale;
            out.push_str(&format!(
                "  {name:<6} pos=({:.2}, {:.2}, {:.2}) scale=({:.1}, {:.1}, {:.1})\n",
                p.x, p.y, p.z, s.x, s.y, s.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_fresh_scene() {
        let scene = Scene::new();
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&scene);

        assert!(output.contains("frame=0"));
        assert!(output.contains("cube"));
        assert!(output.contains("ground"));
        assert!(output.contains("1024x1024"));
    }

    #[test]
    fn debug_renderer_tracks_advance() {
        let mut scene = Scene::new();
        scene.advance(1.0 / 60.0);
        scene.advance(1.0 / 60.0);

        let output = DebugTextRenderer::new().render(&scene);
        assert!(output.contains("frame=2"));
    }

    #[test]
    fn debug_renderer_reports_moved_light() {
        let mut scene = Scene::new();
        // One full second of sweep pulls the light well away from x = -5.
        for _ in 0..60 {
            scene.advance(1.0 / 60.0);
        }
        let output = DebugTextRenderer::new().render(&scene);
        assert!(!output.contains("pos=(-5.00, 10.00, 5.00)"));
    }
}
