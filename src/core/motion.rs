use crate::constants::*;
use glam::{Vec2, Vec3};

/// Latest pointer position and the rotation it asks the spiral to lean toward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in [-1, 1], +y up.
    pub normalized: Vec2,
    /// `x` eases rotation about X; `y` eases rotation about Z.
    pub target_rotation: Vec2,
}

impl PointerState {
    /// Record a pointer at client coordinates inside a `width` x `height` viewport.
    /// Degenerate viewports leave the state untouched.
    pub fn update(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return;
        }
        let nx = (client_x / width) * 2.0 - 1.0;
        let ny = -(client_y / height) * 2.0 + 1.0;
        self.normalized = Vec2::new(nx, ny);
        self.target_rotation = Vec2::new(ny, nx) * POINTER_ROTATION_SCALE;
    }
}

/// One frame of motion: constant spin about Y and eased lean toward the target.
///
/// Horizontal pointer movement feeds the Z axis, not Y.
#[inline]
pub fn step_rotation(rotation: &mut Vec3, target: Vec2) {
    rotation.y += AUTO_SPIN_PER_FRAME;
    rotation.x += (target.x - rotation.x) * ROTATION_LERP;
    rotation.z += (target.y - rotation.z) * ROTATION_LERP;
}
