//! Camera module — projection setup, frustum construction and culling.
//!
//! Cameras and frustums are plain values: the caller owns them, rebuilds
//! the frustum when the matrices change (typically once per frame) and
//! passes it by reference to every query.

mod camera;
mod culler;
mod frustum;
mod projection;

pub use camera::Camera;
pub use culler::{BruteForceCuller, CullResult, CullVolume, Culler, FrustumCuller};
pub use frustum::{
    BoundingBox, BoundingSphere, Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR, PLANE_COUNT,
    build_frustum, point_in_frustum, sphere_distance_in_frustum, sphere_intersect_frustum,
    box_in_frustum, box_intersect_frustum,
};
pub use projection::Projection;
