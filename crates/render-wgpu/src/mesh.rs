use bytemuck::{Pod, Zeroable};

/// Vertex format shared by the shadow and lit passes.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Vertex format for the fullscreen shadow-map overlay quad.
/// Positions span the unit square; the shader remaps them to clip space.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 2],
}

/// Generate unit cube vertices and indices (4 vertices per face).
pub fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// Generate the unit ground plane: a quad in the XZ plane with +Y normals.
///
/// The index list covers both windings so the plane stays visible from
/// below with back-face culling enabled.
pub fn ground_plane_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        Vertex { position: [-p, 0.0,  p], normal: [0.0, 1.0, 0.0] }, // front left
        Vertex { position: [ p, 0.0,  p], normal: [0.0, 1.0, 0.0] }, // front right
        Vertex { position: [-p, 0.0, -p], normal: [0.0, 1.0, 0.0] }, // back left
        Vertex { position: [ p, 0.0, -p], normal: [0.0, 1.0, 0.0] }, // back right
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 0,2,1,
        2,1,3, 2,3,1,
    ];
    (vertices, indices)
}

/// Generate the fullscreen overlay quad on the unit square.
pub fn screen_quad_mesh() -> (Vec<OverlayVertex>, Vec<u16>) {
    let vertices = vec![
        OverlayVertex { position: [0.0, 0.0] },
        OverlayVertex { position: [1.0, 0.0] },
        OverlayVertex { position: [1.0, 1.0] },
        OverlayVertex { position: [0.0, 1.0] },
    ];
    let indices: Vec<u16> = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_four_vertices_per_face() {
        let (vertices, indices) = cube_mesh();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        for v in &vertices {
            for c in v.position {
                assert_eq!(c.abs(), 0.5);
            }
            let n = v.normal;
            let len2 = n[0] * n[0] + n[1] * n[1] + n[2] * n[2];
            assert!((len2 - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_indices_in_range() {
        let (vertices, indices) = cube_mesh();
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn ground_plane_is_flat_and_double_sided() {
        let (vertices, indices) = ground_plane_mesh();
        assert_eq!(vertices.len(), 4);
        // Two triangles per side
        assert_eq!(indices.len(), 12);
        for v in &vertices {
            assert_eq!(v.position[1], 0.0);
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn screen_quad_spans_unit_square() {
        let (vertices, indices) = screen_quad_mesh();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        for v in &vertices {
            assert!((0.0..=1.0).contains(&v.position[0]));
            assert!((0.0..=1.0).contains(&v.position[1]));
        }
    }
}
