//! Direction vectors from Euler angles.

use glam::{Mat4, Vec3};

/// Unit direction obtained by rotating the inverted `up_axis`.
///
/// Angles are in degrees and applied as `Rz * Ry * Rx`, so the X rotation
/// acts first. A zero `up_axis` yields `Vec3::ZERO`.
pub fn direction_vector(up_axis: Vec3, rot_x: f32, rot_y: f32, rot_z: f32) -> Vec3 {
    let rotation = Mat4::from_rotation_z(rot_z.to_radians())
        * Mat4::from_rotation_y(rot_y.to_radians())
        * Mat4::from_rotation_x(rot_x.to_radians());

    rotation.transform_vector3(-up_axis).normalize_or_zero()
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod tests;
