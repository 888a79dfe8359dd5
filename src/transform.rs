//! Transform composition for the cube: the per-frame model matrix, the
//! normal matrix derived from it, and a save/restore matrix stack for
//! hierarchical composition.
//!
//! The frame renderer itself passes composed transforms by value (`Mat4` is
//! `Copy`), so no shared working matrix exists; [`MatrixStack`] provides the
//! save/restore discipline for callers composing deeper hierarchies.

use glam::{Mat4, Vec3};

/// Axis the cube spins around (normalized before use).
pub const ROTATION_AXIS: Vec3 = Vec3::new(1.0, 1.0, 0.0);
/// Fixed offset pushing the cube in front of the camera.
pub const CUBE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -5.0);
/// Degrees added per frame invocation. Rotation speed is tied to the display
/// refresh rate, not wall-clock time.
pub const DEGREES_PER_FRAME: f32 = 1.0;

/// Advances the rotation angle by one frame step, wrapping at 360 degrees.
pub fn advance_angle(angle_deg: f32) -> f32 {
    (angle_deg + DEGREES_PER_FRAME) % 360.0
}

/// Model matrix for the cube at the given rotation angle:
/// translate, then rotate about [`ROTATION_AXIS`], then unit scale.
pub fn cube_transform(angle_deg: f32) -> Mat4 {
    Mat4::from_translation(CUBE_OFFSET)
        * Mat4::from_axis_angle(ROTATION_AXIS.normalize(), angle_deg.to_radians())
        * Mat4::from_scale(Vec3::ONE)
}

/// Inverse-transpose of the model matrix. Required so normals stay
/// perpendicular to surfaces under non-uniform scale; under pure rotation it
/// reduces to the rotation itself.
pub fn normal_matrix(model: Mat4) -> Mat4 {
    model.inverse().transpose()
}

/// LIFO stack of saved transforms. `push` stores a copy of the argument, so
/// mutating the caller's working matrix afterwards never changes the saved
/// entry; `pop` restores the most recent save.
#[derive(Debug, Default)]
pub struct MatrixStack {
    entries: Vec<Mat4>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, matrix: Mat4) {
        self.entries.push(matrix);
    }

    /// Removes and returns the most recently pushed matrix.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty. An unbalanced pop corrupts every
    /// transform drawn afterwards, so it must fail loudly rather than hand
    /// back a degraded matrix.
    pub fn pop(&mut self) -> Mat4 {
        match self.entries.pop() {
            Some(matrix) => matrix,
            None => panic!("popped an empty matrix stack"),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn mat_approx_eq(a: Mat4, b: Mat4) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < EPS, "matrices differ: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn pop_returns_the_matrix_as_pushed() {
        let mut stack = MatrixStack::new();
        let mut working = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let saved = working;
        stack.push(working);

        // Mutating the working matrix after the push must not leak into the
        // stored entry.
        working *= Mat4::from_scale(Vec3::splat(7.0));
        mat_approx_eq(stack.pop(), saved);
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = MatrixStack::new();
        let a = Mat4::from_translation(Vec3::X);
        let b = Mat4::from_translation(Vec3::Y);
        stack.push(a);
        stack.push(b);
        mat_approx_eq(stack.pop(), b);
        mat_approx_eq(stack.pop(), a);
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty matrix stack")]
    fn popping_empty_stack_panics() {
        MatrixStack::new().pop();
    }

    #[test]
    fn normal_matrix_of_rigid_transform_keeps_rotation() {
        // With translation + rotation only, the inverse-transpose's upper 3x3
        // equals the rotation itself (translation column is discarded).
        let rotation = Mat4::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.7);
        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)) * rotation;
        let normal = normal_matrix(model);
        let na = normal.to_cols_array_2d();
        let ra = rotation.to_cols_array_2d();
        for col in 0..3 {
            for row in 0..3 {
                assert!((na[col][row] - ra[col][row]).abs() < EPS);
            }
        }
    }

    #[test]
    fn angle_is_invocation_counted() {
        let mut angle = 0.0f32;
        for n in 1..=720u32 {
            angle = advance_angle(angle);
            assert!((angle - (n % 360) as f32).abs() < EPS, "after {n} frames");
        }
    }

    #[test]
    fn cube_transform_composes_translate_rotate_scale() {
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0))
            * Mat4::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 1.0f32.to_radians())
            * Mat4::from_scale(Vec3::ONE);
        mat_approx_eq(cube_transform(1.0), expected);
    }

    #[test]
    fn cube_transform_at_zero_is_pure_translation() {
        mat_approx_eq(cube_transform(0.0), Mat4::from_translation(CUBE_OFFSET));
    }
}
