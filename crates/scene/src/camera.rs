use glam::{Mat4, Vec3};

/// Perspective camera with position, yaw, pitch, and projection parameters.
/// Angles are in radians. The demo animates `position.x`; orientation is fixed.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            yaw: -90.0_f32.to_radians(),
            pitch: -15.0_f32.to_radians(),
            fov: 45.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}

impl Camera {
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera() {
        let cam = Camera::default();
        assert!(cam.position.y > 0.0);
        let vp = cam.view_projection();
        // Should produce a valid matrix (no NaN)
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn default_camera_faces_negative_z() {
        let fwd = Camera::default().forward();
        assert!(fwd.z < -0.9);
        // Tilted down toward the ground
        assert!(fwd.y < 0.0);
    }

    #[test]
    fn scene_center_is_in_front_of_camera() {
        let cam = Camera::default();
        let view = cam.view_matrix();
        let cube_in_view = view.transform_point3(Vec3::new(0.0, 3.0, 0.0));
        // Right-handed view space looks down -Z
        assert!(cube_in_view.z < 0.0);
    }
}
