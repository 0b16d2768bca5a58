use serde::Serialize;
use shadowbox_scene::{DirectionalLight, Scene, SceneObject};

/// Scene inspector for developer tooling.
///
/// Provides read-only queries against the scene state for debugging and the
/// on-screen HUD.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the scene state.
    pub fn summary(scene: &Scene) -> SceneSummary {
        SceneSummary {
            frame: scene.frame(),
            time_seconds: scene.time(),
            camera_position: scene.camera.position.to_array(),
            light_position: scene.light.position.to_array(),
            light_brightness: scene.light.brightness,
            object_count: 2,
            shadow_map_size: DirectionalLight::SHADOW_MAP_SIZE,
        }
    }

    /// Per-object records for the demo's two objects.
    pub fn objects(scene: &Scene) -> Vec<ObjectInfo> {
        [("cube", &scene.cube), ("ground", &scene.ground)]
            .into_iter()
            .map(|(name, object)| Self::describe(name, object))
            .collect()
    }

    fn describe(name: &'static str, object: &SceneObject) -> ObjectInfo {
        ObjectInfo {
            name,
            position: object.transform.position.to_array(),
            scale: object.transform.scale.to_array(),
            diffuse: object.material.diffuse,
        }
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub frame: u64,
    pub time_seconds: f32,
    pub camera_position: [f32; 3],
    pub light_position: [f32; 3],
    pub light_brightness: f32,
    pub object_count: usize,
    pub shadow_map_size: u32,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene: frame={} t={:.2}s camera=({:.2}, {:.2}, {:.2}) light=({:.2}, {:.2}, {:.2}) shadow_map={}x{}",
            self.frame,
            self.time_seconds,
            self.camera_position[0],
            self.camera_position[1],
            self.camera_position[2],
            self.light_position[0],
            self.light_position[1],
            self.light_position[2],
            self.shadow_map_size,
            self.shadow_map_size
        )
    }
}

/// Detailed info about a single scene object.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectInfo {
    pub name: &'static str,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub diffuse: [f32; 4],
}

impl std::fmt::Display for ObjectInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<6} pos=({:.2}, {:.2}, {:.2}) scale=({:.1}, {:.1}, {:.1})",
            self.name,
            self.position[0],
            self.position[1],
            self.position[2],
            self.scale[0],
            self.scale[1],
            self.scale[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_fresh_scene() {
        let scene = Scene::new();
        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.frame, 0);
        assert_eq!(summary.object_count, 2);
        assert_eq!(summary.shadow_map_size, 1024);
        assert_eq!(summary.light_position, [-5.0, 10.0, 5.0]);
    }

    #[test]
    fn summary_tracks_advance() {
        let mut scene = Scene::new();
        for _ in 0..30 {
            scene.advance(1.0 / 60.0);
        }
        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.frame, 30);
        assert!(summary.time_seconds > 0.4);
        assert_ne!(summary.light_position, [-5.0, 10.0, 5.0]);
    }

    #[test]
    fn objects_lists_cube_and_ground() {
        let scene = Scene::new();
        let objects = SceneInspector::objects(&scene);
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].name, "cube");
        assert_eq!(objects[0].position, [0.0, 3.0, 0.0]);
        assert_eq!(objects[1].name, "ground");
        assert_eq!(objects[1].scale, [5.0, 5.0, 5.0]);
    }

    #[test]
    fn summary_display() {
        let scene = Scene::new();
        let summary = SceneInspector::summary(&scene);
        let s = format!("{summary}");
        assert!(s.contains("frame=0"));
        assert!(s.contains("1024x1024"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let scene = Scene::new();
        let summary = SceneInspector::summary(&scene);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"frame\":0"));
        assert!(json.contains("\"shadow_map_size\":1024"));
    }
}
