/// Camera — model-view and projection matrices plus the frustum built from them.
///
/// The frustum is a derived value: every setter that changes a matrix
/// rebuilds it, so `frustum()` always matches the current matrices.
/// Cameras are plain values owned by the caller.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use super::frustum::Frustum;
use super::projection::Projection;

/// Camera matrices and their clipping planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    modelview_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
}

impl Camera {
    /// Log configuration errors before returning them
    fn log_and_return_error(error: Error) -> Error {
        crate::gfx_error!("gfx::Camera", "{}", error);
        error
    }

    /// Create a camera from raw matrices and build its frustum.
    pub fn new(modelview: Mat4, projection: Mat4) -> Self {
        Self {
            modelview_matrix: modelview,
            projection_matrix: projection,
            frustum: Frustum::build(&modelview, &projection),
        }
    }

    /// Create a camera at `eye` looking at `target`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` if the projection parameters are
    /// rejected, or `Error::InvalidParameter` if `eye == target` or `up` is
    /// parallel to the view direction.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, projection: &Projection) -> Result<Self> {
        let projection_matrix = projection.matrix().map_err(Self::log_and_return_error)?;

        let forward = target - eye;
        if forward.length_squared() == 0.0 {
            return Err(Self::log_and_return_error(Error::InvalidParameter(
                format!("eye and target are the same point {:?}", eye)
            )));
        }
        if forward.cross(up).length_squared() == 0.0 {
            return Err(Self::log_and_return_error(Error::InvalidParameter(
                format!("up vector {:?} is parallel to the view direction", up)
            )));
        }

        let modelview = Mat4::look_at_rh(eye, target, up);
        crate::gfx_debug!("gfx::Camera", "Camera at {:?} looking at {:?}", eye, target);

        Ok(Self::new(modelview, projection_matrix))
    }

    // ===== GETTERS =====

    /// Model-view matrix.
    pub fn modelview_matrix(&self) -> &Mat4 {
        &self.modelview_matrix
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined matrix (projection * modelview).
    pub fn modelview_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.modelview_matrix
    }

    /// Clipping planes for the current matrices.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    // ===== SETTERS — rebuild the frustum =====

    /// Set the model-view matrix.
    pub fn set_modelview(&mut self, matrix: Mat4) {
        self.modelview_matrix = matrix;
        self.rebuild_frustum();
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
        self.rebuild_frustum();
    }

    /// Replace the projection from typed parameters.
    ///
    /// On error the camera is left unchanged.
    pub fn apply_projection(&mut self, projection: &Projection) -> Result<()> {
        let matrix = projection.matrix().map_err(Self::log_and_return_error)?;
        self.set_projection(matrix);
        Ok(())
    }

    fn rebuild_frustum(&mut self) {
        self.frustum = Frustum::build(&self.modelview_matrix, &self.projection_matrix);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
