use glam::{Mat4, Vec3};

/// The scene's single shadow-casting directional light.
///
/// The light sits at a position and aims at a target; the shadow pass renders
/// scene depth through an orthographic volume oriented along that aim
/// direction. Position and target must never coincide, and their offset must
/// not be parallel to +Y (the look-at up vector).
pub struct DirectionalLight {
    pub position: Vec3,
    pub target: Vec3,
    /// Brightness in the lit shader's intensity units.
    pub brightness: f32,
    /// Far plane of the shadow volume; depth beyond it never shadows.
    pub max_falloff_distance: f32,
    /// Half-width of the orthographic shadow volume.
    pub shadow_extent: f32,
}

impl DirectionalLight {
    /// Shadow map resolution, in texels per side.
    pub const SHADOW_MAP_SIZE: u32 = 1024;

    const SHADOW_NEAR: f32 = 0.1;

    /// Re-aim the light without moving it.
    pub fn aim_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit vector from the light toward its target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let e = self.shadow_extent;
        Mat4::orthographic_rh(-e, e, -e, e, Self::SHADOW_NEAR, self.max_falloff_distance)
    }

    /// The matrix the shadow pass renders through and the lit pass samples by.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(-5.0, 10.0, 5.0),
            target: Vec3::new(0.0, 3.0, 0.0),
            brightness: 1.0,
            max_falloff_distance: 50.0,
            shadow_extent: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light() {
        let light = DirectionalLight::default();
        let vp = light.view_projection();
        assert!(!vp.col(0).x.is_nan());
        assert_eq!(light.brightness, 1.0);
    }

    #[test]
    fn aim_at_changes_direction() {
        let mut light = DirectionalLight::default();
        let before = light.direction();
        light.aim_at(Vec3::new(10.0, 0.0, -10.0));
        assert_ne!(before, light.direction());
    }

    #[test]
    fn target_projects_inside_shadow_volume() {
        let light = DirectionalLight::default();
        let clip = light.view_projection() * light.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() <= 1.0);
        assert!(ndc.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn ground_corners_project_inside_shadow_volume() {
        // The 5x5 ground must be covered from every animated light position.
        for light_x in [0.0_f32, 5.0, 10.0] {
            let light = DirectionalLight {
                position: Vec3::new(light_x, 10.0, 5.0),
                ..DirectionalLight::default()
            };
            for (x, z) in [(-2.5, -2.5), (-2.5, 2.5), (2.5, -2.5), (2.5, 2.5)] {
                let clip = light.view_projection() * glam::Vec4::new(x, 0.0, z, 1.0);
                let ndc = clip.truncate() / clip.w;
                assert!(ndc.x.abs() <= 1.0, "x corner escapes at light_x={light_x}");
                assert!(ndc.y.abs() <= 1.0, "y corner escapes at light_x={light_x}");
                assert!((0.0..=1.0).contains(&ndc.z));
            }
        }
    }
}
