use glam::Vec3;
use shadowbox_common::Transform;

use crate::camera::Camera;
use crate::light::DirectionalLight;
use crate::material::PhongMaterial;

const CAMERA_MIN_X: f32 = -3.0;
const CAMERA_MAX_X: f32 = 3.0;
const CAMERA_SPEED: f32 = 1.0;

const LIGHT_MIN_X: f32 = 0.0;
const LIGHT_MAX_X: f32 = 10.0;
const LIGHT_SPEED: f32 = 10.0;

/// One renderable object: where it sits and how it reflects light.
pub struct SceneObject {
    pub transform: Transform,
    pub material: PhongMaterial,
}

/// The hard-coded demo scene.
///
/// A red cube floats above a gray ground plane; the light sweeps along X
/// while staying aimed at the cube, and the camera sways side to side.
/// All mutation happens in [`Scene::advance`].
pub struct Scene {
    pub camera: Camera,
    pub cube: SceneObject,
    pub ground: SceneObject,
    pub light: DirectionalLight,
    camera_rising: bool,
    light_rising: bool,
    frame: u64,
    time: f32,
}

impl Scene {
    pub fn new() -> Self {
        let cube = SceneObject {
            transform: Transform::from_position(Vec3::new(0.0, 3.0, 0.0)),
            material: PhongMaterial::red(),
        };
        let ground = SceneObject {
            transform: Transform {
                scale: Vec3::splat(5.0),
                ..Transform::default()
            },
            material: PhongMaterial::ground_gray(),
        };
        let mut light = DirectionalLight::default();
        light.aim_at(cube.transform.position);

        Self {
            camera: Camera::default(),
            cube,
            ground,
            light,
            camera_rising: false,
            light_rising: false,
            frame: 0,
            time: 0.0,
        }
    }

    /// Frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Accumulated animation time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance the animation by `dt` seconds (`dt >= 0`; callers clamp).
    ///
    /// The camera sways over `[-3, 3]` at 1 unit/s and the light sweeps
    /// `[0, 10]` at 10 units/s, each reversing at its band edge. The light
    /// stays aimed at the cube.
    pub fn advance(&mut self, dt: f32) {
        let (x, rising) = oscillate(
            self.camera.position.x,
            CAMERA_MIN_X,
            CAMERA_MAX_X,
            CAMERA_SPEED,
            dt,
            self.camera_rising,
        );
        self.camera.position.x = x;
        self.camera_rising = rising;

        let (x, rising) = oscillate(
            self.light.position.x,
            LIGHT_MIN_X,
            LIGHT_MAX_X,
            LIGHT_SPEED,
            dt,
            self.light_rising,
        );
        self.light.position.x = x;
        self.light_rising = rising;

        self.light.aim_at(self.cube.transform.position);

        self.frame += 1;
        self.time += dt;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Move `value` along one axis, reversing at the band edges.
///
/// The direction check happens before the move, so a value may overshoot the
/// band by up to one step and turns back on the following call. A value that
/// starts outside the band heads back toward it immediately.
fn oscillate(value: f32, min: f32, max: f32, speed: f32, dt: f32, rising: bool) -> (f32, bool) {
    let rising = if value < min {
        true
    } else if value > max {
        false
    } else {
        rising
    };
    let step = speed * dt * if rising { 1.0 } else { -1.0 };
    (value + step, rising)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_matches_demo_layout() {
        let scene = Scene::new();
        assert_eq!(scene.cube.transform.position, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(scene.ground.transform.scale, Vec3::splat(5.0));
        assert_eq!(scene.light.target, scene.cube.transform.position);
        assert_eq!(scene.frame(), 0);
    }

    #[test]
    fn advance_counts_frames_even_with_zero_dt() {
        let mut scene = Scene::new();
        let cam_x = scene.camera.position.x;
        scene.advance(0.0);
        assert_eq!(scene.frame(), 1);
        assert_eq!(scene.time(), 0.0);
        assert_eq!(scene.camera.position.x, cam_x);
    }

    #[test]
    fn camera_starts_moving_left() {
        let mut scene = Scene::new();
        scene.advance(0.1);
        assert!(scene.camera.position.x < 0.0);
    }

    #[test]
    fn light_starts_below_band_and_heads_back_in() {
        // The light spawns at x = -5, outside its [0, 10] band.
        let mut scene = Scene::new();
        let x0 = scene.light.position.x;
        scene.advance(0.1);
        assert!(scene.light.position.x > x0);
    }

    #[test]
    fn light_stays_aimed_at_cube() {
        let mut scene = Scene::new();
        for _ in 0..100 {
            scene.advance(1.0 / 60.0);
            assert_eq!(scene.light.target, scene.cube.transform.position);
        }
    }

    #[test]
    fn camera_sway_stays_near_band() {
        let mut scene = Scene::new();
        let dt = 1.0 / 60.0;
        for _ in 0..2000 {
            scene.advance(dt);
            let x = scene.camera.position.x;
            // Overshoot is bounded by one step per frame.
            assert!(x >= CAMERA_MIN_X - CAMERA_SPEED * dt);
            assert!(x <= CAMERA_MAX_X + CAMERA_SPEED * dt);
        }
    }

    #[test]
    fn light_sweep_reverses_at_both_edges() {
        let mut scene = Scene::new();
        let dt = 1.0 / 60.0;
        let mut saw_high = false;
        let mut saw_low = false;
        for _ in 0..400 {
            scene.advance(dt);
            let x = scene.light.position.x;
            if x > 9.0 {
                saw_high = true;
            }
            if saw_high && x < 1.0 {
                saw_low = true;
            }
        }
        assert!(saw_high, "light never reached the top of its sweep");
        assert!(saw_low, "light never swept back down");
    }

    #[test]
    fn oscillate_flips_direction_at_edges() {
        // Past max, rising: flips to falling.
        let (_, rising) = oscillate(3.5, -3.0, 3.0, 1.0, 0.1, true);
        assert!(!rising);
        // Below min, falling: flips to rising.
        let (_, rising) = oscillate(-3.5, -3.0, 3.0, 1.0, 0.1, false);
        assert!(rising);
        // Inside the band the direction is kept.
        let (_, rising) = oscillate(0.0, -3.0, 3.0, 1.0, 0.1, false);
        assert!(!rising);
    }
}
