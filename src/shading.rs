//! The CPU side of the shading contract: the uniform block shared with
//! `shader.wgsl`, the session light constants, and a reference copy of the
//! fragment lighting law used by the tests.

use glam::{Mat4, Vec3};

use crate::transform::{cube_transform, normal_matrix};

/// Directional light color (white).
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Light position in world coordinates.
pub const LIGHT_POSITION: [f32; 3] = [2.3, 4.0, 3.5];
/// Ambient light color.
pub const AMBIENT_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
/// Non-physical brightening factor applied to the diffuse term.
pub const DIFFUSE_BOOST: f32 = 1.2;

/// Vertical field of view of the fixed perspective frustum, in degrees.
pub const FOV_Y_DEGREES: f32 = 30.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 100.0;

/// Uniform block uploaded once per frame. Layout mirrors `SceneUniforms` in
/// `shader.wgsl`: three mat4x4 columns, then three vec3s padded to vec4.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_color: [f32; 4],
    pub light_position: [f32; 4],
    pub ambient_color: [f32; 4],
}

impl SceneUniforms {
    /// Uniform values for one frame: the cube's model matrix at `angle_deg`,
    /// its inverse-transpose, the fixed frustum at the surface's aspect
    /// ratio, and the session light constants.
    pub fn for_frame(angle_deg: f32, aspect: f32) -> Self {
        let model = cube_transform(angle_deg);
        Self {
            model: model.to_cols_array_2d(),
            normal: normal_matrix(model).to_cols_array_2d(),
            projection: projection_matrix(aspect).to_cols_array_2d(),
            light_color: pad(LIGHT_COLOR),
            light_position: pad(LIGHT_POSITION),
            ambient_color: pad(AMBIENT_COLOR),
        }
    }
}

/// The fixed perspective frustum. Set from the surface size; only changes on
/// resize.
pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

fn pad(v: [f32; 3]) -> [f32; 4] {
    [v[0], v[1], v[2], 0.0]
}

/// Reference implementation of the fragment stage's lighting law:
///
/// ```text
/// diffuse = light_color * tex_color.rgb * max(dot(light_dir, normal), 0) * 1.2
/// ambient = ambient_color * vertex_color.rgb
/// ```
///
/// Diffuse samples the texture, ambient the per-vertex base color; the two
/// deliberately read different color sources. Alpha passes through from the
/// vertex color. This mirrors `fs_main` in `shader.wgsl` so the law is
/// testable without a GPU.
pub fn shade_fragment(
    normal: Vec3,
    world_position: Vec3,
    tex_color: [f32; 4],
    vertex_color: [f32; 4],
) -> [f32; 4] {
    let light_dir = (Vec3::from(LIGHT_POSITION) - world_position).normalize();
    let n_dot_l = light_dir.dot(normal.normalize()).max(0.0);
    let diffuse = Vec3::from(LIGHT_COLOR)
        * Vec3::new(tex_color[0], tex_color[1], tex_color[2])
        * n_dot_l
        * DIFFUSE_BOOST;
    let ambient = Vec3::from(AMBIENT_COLOR) * Vec3::new(vertex_color[0], vertex_color[1], vertex_color[2]);
    let rgb = diffuse + ambient;
    [rgb.x, rgb.y, rgb.z, vertex_color[3]]
}
