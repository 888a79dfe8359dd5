//! Cube geometry: 24 vertices (4 per face), 36 indices, one atlas cell per
//! face. Built once and uploaded to GPU buffers at startup.

/// Number of vertices produced by [`create_cube_geometry`].
pub const CUBE_VERTEX_COUNT: usize = 24;
/// Number of indices produced by [`create_cube_geometry`].
pub const CUBE_INDEX_COUNT: usize = 36;

/// Base color multiplied into the ambient term. The diffuse term samples the
/// texture instead, so this only tints the ambient contribution.
pub const BASE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// One cube face: outward normal, the four corners in bottom-left,
/// bottom-right, top-right, top-left order (counter-clockwise seen from
/// outside the cube), and the atlas cell holding its texture.
struct Face {
    normal: [f32; 3],
    corners: [[f32; 3]; 4],
    /// (column, row) on the 3x3 atlas lattice, rows counted downward from
    /// the top of the image.
    atlas_cell: (u32, u32),
}

// Face order: front, right, top, left, bottom, back. The atlas uses six of
// the nine 1/3-sized cells; their assignment matches the atlas image in
// assets/textures/.
const FACES: [Face; 6] = [
    // front (+z) - red cell
    Face {
        normal: [0.0, 0.0, 1.0],
        corners: [
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
        atlas_cell: (0, 2),
    },
    // right (+x) - orange cell
    Face {
        normal: [1.0, 0.0, 0.0],
        corners: [
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
        ],
        atlas_cell: (1, 1),
    },
    // top (+y) - blue cell
    Face {
        normal: [0.0, 1.0, 0.0],
        corners: [
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
        ],
        atlas_cell: (0, 0),
    },
    // left (-x) - green cell
    Face {
        normal: [-1.0, 0.0, 0.0],
        corners: [
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
        atlas_cell: (0, 1),
    },
    // bottom (-y) - yellow cell
    Face {
        normal: [0.0, -1.0, 0.0],
        corners: [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
        atlas_cell: (2, 2),
    },
    // back (-z) - white cell
    Face {
        normal: [0.0, 0.0, -1.0],
        corners: [
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
        ],
        atlas_cell: (1, 2),
    },
];

/// Builds the unit cube, 4 unique vertices per face so each face carries a
/// flat normal and its own atlas region. Each face is two triangles split
/// as (0,1,2),(0,2,3) over its quad.
pub fn create_cube_geometry() -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);
    let mut indices = Vec::with_capacity(CUBE_INDEX_COUNT);

    for face in &FACES {
        let base = vertices.len() as u16;
        let (col, row) = face.atlas_cell;
        let u0 = col as f32 / 3.0;
        let v0 = row as f32 / 3.0;
        let u1 = u0 + 1.0 / 3.0;
        let v1 = v0 + 1.0 / 3.0;

        // uv per corner, same order as Face::corners; v grows downward so
        // the bottom edge of the face samples the bottom of the cell.
        let uvs = [[u0, v1], [u1, v1], [u1, v0], [u0, v0]];

        for (corner, uv) in face.corners.iter().zip(uvs) {
            vertices.push(Vertex {
                position: *corner,
                tex_coords: uv,
                normal: face.normal,
                color: BASE_COLOR,
            });
        }
        for i in [0u16, 1, 2, 0, 2, 3] {
            indices.push(base + i);
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn cube_has_expected_counts() {
        let (vertices, indices) = create_cube_geometry();
        assert_eq!(vertices.len(), CUBE_VERTEX_COUNT);
        assert_eq!(indices.len(), CUBE_INDEX_COUNT);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn face_normals_are_flat_and_unit_length() {
        let (vertices, _) = create_cube_geometry();
        for face in vertices.chunks(4) {
            let n = face[0].normal;
            for v in face {
                assert_eq!(v.normal, n);
            }
            let len = dot(n, n).sqrt();
            assert!((len - 1.0).abs() < 1e-6, "normal length {len}");
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise() {
        // The cross product of each triangle's edges must point along the
        // outward face normal, otherwise back-face culling would drop it.
        let (vertices, indices) = create_cube_geometry();
        for tri in indices.chunks(3) {
            let a = vertices[tri[0] as usize];
            let b = vertices[tri[1] as usize];
            let c = vertices[tri[2] as usize];
            let face_dir = cross(sub(b.position, a.position), sub(c.position, a.position));
            assert!(
                dot(face_dir, a.normal) > 0.0,
                "triangle {tri:?} winds against its normal"
            );
        }
    }

    #[test]
    fn tex_coords_stay_inside_unit_square() {
        let (vertices, _) = create_cube_geometry();
        for v in &vertices {
            assert!((0.0..=1.0).contains(&v.tex_coords[0]));
            assert!((0.0..=1.0).contains(&v.tex_coords[1]));
        }
    }

    #[test]
    fn atlas_cells_are_distinct_and_disjoint() {
        let (vertices, _) = create_cube_geometry();
        // Bounding box of each face's uv region.
        let mut cells = Vec::new();
        for face in vertices.chunks(4) {
            let us: Vec<f32> = face.iter().map(|v| v.tex_coords[0]).collect();
            let vs: Vec<f32> = face.iter().map(|v| v.tex_coords[1]).collect();
            let min_u = us.iter().copied().fold(f32::INFINITY, f32::min);
            let max_u = us.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let min_v = vs.iter().copied().fold(f32::INFINITY, f32::min);
            let max_v = vs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            assert!((max_u - min_u - 1.0 / 3.0).abs() < 1e-6);
            assert!((max_v - min_v - 1.0 / 3.0).abs() < 1e-6);
            cells.push((min_u, min_v));
        }
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                let overlap_u = (a.0 - b.0).abs() < 1e-6;
                let overlap_v = (a.1 - b.1).abs() < 1e-6;
                assert!(!(overlap_u && overlap_v), "two faces share an atlas cell");
            }
        }
    }

    #[test]
    fn base_color_is_uniform_white() {
        let (vertices, _) = create_cube_geometry();
        assert!(vertices.iter().all(|v| v.color == BASE_COLOR));
    }
}
