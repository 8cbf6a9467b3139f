/// Projection — typed configuration for the camera's projection matrix.
///
/// All matrices follow the OpenGL ES clip-space convention (depth -w..w),
/// which is what frustum plane extraction expects.

use glam::Mat4;
use crate::error::{Error, Result};

/// Projection parameters.
///
/// `Default` is the standard scene camera: 60° vertical FOV, square
/// aspect, near 0.1, far 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Symmetric perspective projection
    Perspective {
        fov_y_radians: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    },
    /// Orthographic box
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    },
    /// Screen-space orthographic projection, depth range -1..1
    Orthographic2d {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            fov_y_radians: std::f32::consts::FRAC_PI_3,
            aspect_ratio: 1.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl Projection {
    /// Perspective projection with the vertical FOV in degrees.
    pub fn perspective_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Projection::Perspective {
            fov_y_radians: fov_y_degrees.to_radians(),
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Screen-space projection centered on the origin for a `width` x `height` viewport.
    pub fn screen_2d(width: f32, height: f32) -> Self {
        Projection::Orthographic2d {
            left: -width * 0.5,
            right: width * 0.5,
            bottom: -height * 0.5,
            top: height * 0.5,
        }
    }

    /// Check that the parameters describe a non-degenerate clip volume.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Projection::Perspective { fov_y_radians, aspect_ratio, z_near, z_far } => {
                require_finite(&[fov_y_radians, aspect_ratio, z_near, z_far])?;
                if !(fov_y_radians > 0.0 && fov_y_radians < std::f32::consts::PI) {
                    return Err(Error::InvalidProjection(format!(
                        "vertical FOV must be in (0, pi), got {}", fov_y_radians
                    )));
                }
                if aspect_ratio <= 0.0 {
                    return Err(Error::InvalidProjection(format!(
                        "aspect ratio must be positive, got {}", aspect_ratio
                    )));
                }
                if z_near <= 0.0 {
                    return Err(Error::InvalidProjection(format!(
                        "perspective near plane must be positive, got {}", z_near
                    )));
                }
                require_depth_range(z_near, z_far)
            }
            Projection::Orthographic { left, right, bottom, top, z_near, z_far } => {
                require_finite(&[left, right, bottom, top, z_near, z_far])?;
                require_extent(left, right, bottom, top)?;
                require_depth_range(z_near, z_far)
            }
            Projection::Orthographic2d { left, right, bottom, top } => {
                require_finite(&[left, right, bottom, top])?;
                require_extent(left, right, bottom, top)
            }
        }
    }

    /// Validated projection matrix.
    pub fn matrix(&self) -> Result<Mat4> {
        self.validate()?;

        let matrix = match *self {
            Projection::Perspective { fov_y_radians, aspect_ratio, z_near, z_far } => {
                Mat4::perspective_rh_gl(fov_y_radians, aspect_ratio, z_near, z_far)
            }
            Projection::Orthographic { left, right, bottom, top, z_near, z_far } => {
                Mat4::orthographic_rh_gl(left, right, bottom, top, z_near, z_far)
            }
            Projection::Orthographic2d { left, right, bottom, top } => {
                Mat4::orthographic_rh_gl(left, right, bottom, top, -1.0, 1.0)
            }
        };

        Ok(matrix)
    }
}

fn require_finite(values: &[f32]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::InvalidProjection(format!("parameters must be finite, got {:?}", values)))
    }
}

fn require_extent(left: f32, right: f32, bottom: f32, top: f32) -> Result<()> {
    if right == left {
        return Err(Error::InvalidProjection(format!("zero width volume (left = right = {})", left)));
    }
    if top == bottom {
        return Err(Error::InvalidProjection(format!("zero height volume (bottom = top = {})", bottom)));
    }
    Ok(())
}

fn require_depth_range(z_near: f32, z_far: f32) -> Result<()> {
    if z_far <= z_near {
        return Err(Error::InvalidProjection(format!(
            "far plane ({}) must be beyond near plane ({})", z_far, z_near
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
