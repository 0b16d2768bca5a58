use serde::{Deserialize, Serialize};

/// Phong reflection parameters for one scene object.
///
/// Colors are RGBA; alpha is carried but the lit pass renders opaque.
/// Glossiness is the specular exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhongMaterial {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub glossiness: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient: [0.5, 0.5, 0.5, 1.0],
            diffuse: [0.5, 0.5, 0.5, 1.0],
            specular: [1.0, 1.0, 1.0, 1.0],
            glossiness: 0.3,
        }
    }
}

impl PhongMaterial {
    /// The cube's glossy red material.
    pub fn red() -> Self {
        Self {
            ambient: [0.1, 0.0, 0.0, 1.0],
            diffuse: [0.5, 0.0, 0.0, 1.0],
            specular: [0.5, 0.5, 0.5, 1.0],
            glossiness: 3.0,
        }
    }

    /// The ground's matte gray material. Ambient is kept low so the cast
    /// shadow stays clearly darker than lit ground.
    pub fn ground_gray() -> Self {
        Self {
            ambient: [0.1, 0.1, 0.1, 1.0],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_is_red() {
        let m = PhongMaterial::red();
        assert!(m.diffuse[0] > 0.0);
        assert_eq!(m.diffuse[1], 0.0);
        assert_eq!(m.diffuse[2], 0.0);
    }

    #[test]
    fn ground_ambient_darker_than_diffuse() {
        let m = PhongMaterial::ground_gray();
        assert!(m.ambient[0] < m.diffuse[0]);
    }

    #[test]
    fn serde_round_trip() {
        let m = PhongMaterial::red();
        let json = serde_json::to_string(&m).unwrap();
        let back: PhongMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
