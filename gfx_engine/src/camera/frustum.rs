/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the unit-length normal
/// - D is the signed distance term
/// - A point P is on the positive side of a plane if dot(plane, P_homogeneous) >= 0
///
/// Planes are extracted from the combined model-view-projection matrix
/// (OpenGL ES clip space, depth range -w..w). Because every normal is
/// unit length, evaluating a plane at a point yields a signed distance
/// in world units.

use glam::{Mat4, Vec3, Vec4};

/// Result of a 3-way frustum classification.
///
/// The discriminants are the historical integer codes returned by the
/// engine (0 = outside, 1 = intersecting, 2 = inside):
/// - `Outside` → skip the object
/// - `Intersecting` → test children / subdivide
/// - `Inside` → draw without further testing
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumTest {
    /// Volume is entirely on the negative side of at least one plane
    Outside = 0,
    /// Volume straddles at least one plane
    Intersecting = 1,
    /// Volume is entirely on the positive side of all six planes
    Inside = 2,
}

impl FrustumTest {
    /// Integer code of this classification (0, 1 or 2).
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Number of planes in a frustum.
pub const PLANE_COUNT: usize = 6;

/// Sphere bounding volume (center + radius).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Pivot point in world coordinates
    pub center: Vec3,
    /// Radius, expected to be >= 0
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned box bounding volume (center + half-extents).
///
/// The eight corners are `center ± half_extent` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Pivot point in world coordinates
    pub center: Vec3,
    /// Half of the box size on each axis, expected to be >= 0
    pub half_extent: Vec3,
}

impl BoundingBox {
    pub fn new(center: Vec3, half_extent: Vec3) -> Self {
        Self { center, half_extent }
    }

    /// Build a box from its min/max corners.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extent: (max - min) * 0.5,
        }
    }

    /// The eight corners, x varying fastest, then y, then z.
    pub fn corners(&self) -> [Vec3; 8] {
        let c = self.center;
        let h = self.half_extent;
        [
            Vec3::new(c.x - h.x, c.y - h.y, c.z - h.z),
            Vec3::new(c.x + h.x, c.y - h.y, c.z - h.z),
            Vec3::new(c.x - h.x, c.y + h.y, c.z - h.z),
            Vec3::new(c.x + h.x, c.y + h.y, c.z - h.z),
            Vec3::new(c.x - h.x, c.y - h.y, c.z + h.z),
            Vec3::new(c.x + h.x, c.y - h.y, c.z + h.z),
            Vec3::new(c.x - h.x, c.y + h.y, c.z + h.z),
            Vec3::new(c.x + h.x, c.y + h.y, c.z + h.z),
        ]
    }
}

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0, stored in the
/// order left, right, bottom, top, near, far. Recompute it whenever the
/// model-view or projection matrix changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; PLANE_COUNT],
}

impl Frustum {
    /// Build the frustum from a model-view and a projection matrix.
    ///
    /// The combined matrix is `projection * modelview` (glam is column-major,
    /// so this is the row-vector product `modelview x projection` of the
    /// classic GL layout).
    pub fn build(modelview: &Mat4, projection: &Mat4) -> Self {
        Self::from_view_projection(&(*projection * *modelview))
    }

    /// Extract frustum planes from a combined model-view-projection matrix.
    ///
    /// Each plane is a sum or difference of the matrix rows:
    /// left = r3 - r0, right = r3 + r0, bottom = r3 - r1,
    /// top = r3 + r1, near = r3 - r2, far = r3 + r2.
    ///
    /// Input matrices must produce non-degenerate planes. A zero-length
    /// normal trips a debug assertion; release builds divide through
    /// unchecked.
    pub fn from_view_projection(mvp: &Mat4) -> Self {
        let r0 = mvp.row(0);
        let r1 = mvp.row(1);
        let r2 = mvp.row(2);
        let r3 = mvp.row(3);

        let mut planes = [
            r3 - r0, // left
            r3 + r0, // right
            r3 - r1, // bottom
            r3 + r1, // top
            r3 - r2, // near
            r3 + r2, // far
        ];

        for plane in &mut planes {
            let normal_len = (plane.x * plane.x + plane.y * plane.y + plane.z * plane.z).sqrt();
            debug_assert!(normal_len > 0.0, "degenerate frustum plane: {:?}", plane);
            let t = 1.0 / normal_len;
            *plane *= t;
        }

        Self { planes }
    }

    /// Plane at `index` (see the `PLANE_*` constants).
    pub fn plane(&self, index: usize) -> Vec4 {
        self.planes[index]
    }

    /// Signed distance from `point` to plane `index` (positive = inside half-space).
    pub fn signed_distance(&self, index: usize, point: Vec3) -> f32 {
        plane_distance(&self.planes[index], point)
    }

    /// Test whether a point lies on the positive side of all six planes.
    ///
    /// A point exactly on a plane counts as inside.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane_distance(plane, point) >= 0.0)
    }

    /// Distance of a sphere inside the frustum, or 0.0 when it is outside.
    ///
    /// Walks all six planes and returns `distance_to_far_plane + radius`
    /// (the last plane evaluated), not the minimum over the planes.
    pub fn sphere_distance(&self, center: Vec3, radius: f32) -> f32 {
        debug_assert!(radius >= 0.0, "negative sphere radius: {}", radius);

        let mut d = 0.0;
        for plane in &self.planes {
            d = plane_distance(plane, center);
            if d < -radius {
                return 0.0;
            }
        }

        d + radius
    }

    /// Classify a sphere against the frustum (3-way test).
    ///
    /// - center more than `radius` behind any plane → `Outside` (early out)
    /// - center more than `radius` in front of all six planes → `Inside`
    /// - otherwise → `Intersecting`
    pub fn classify_sphere(&self, center: Vec3, radius: f32) -> FrustumTest {
        debug_assert!(radius >= 0.0, "negative sphere radius: {}", radius);

        let mut inside_planes = 0;
        for plane in &self.planes {
            let d = plane_distance(plane, center);
            if d < -radius {
                return FrustumTest::Outside;
            } else if d > radius {
                inside_planes += 1;
            }
        }

        if inside_planes == PLANE_COUNT {
            FrustumTest::Inside
        } else {
            FrustumTest::Intersecting
        }
    }

    /// Test if a box is (potentially) visible.
    ///
    /// A plane passes as soon as one of the eight corners is strictly on its
    /// positive side. Returns `false` when some plane has no passing corner.
    /// Does not distinguish inside from intersecting.
    pub fn contains_box(&self, center: Vec3, half_extent: Vec3) -> bool {
        let corners = BoundingBox::new(center, half_extent).corners();

        self.planes.iter().all(|plane| {
            corners
                .iter()
                .any(|corner| plane_distance(plane, *corner) > 0.0)
        })
    }

    /// Classify a box against the frustum (3-way test).
    ///
    /// For each plane, counts corners strictly on the positive side:
    /// - no corner → `Outside` (early out)
    /// - all eight corners for all six planes → `Inside`
    /// - otherwise → `Intersecting`
    pub fn classify_box(&self, center: Vec3, half_extent: Vec3) -> FrustumTest {
        let corners = BoundingBox::new(center, half_extent).corners();

        let mut inside_planes = 0;
        for plane in &self.planes {
            let positive = corners
                .iter()
                .filter(|corner| plane_distance(plane, **corner) > 0.0)
                .count();

            if positive == 0 {
                return FrustumTest::Outside;
            }
            if positive == corners.len() {
                inside_planes += 1;
            }
        }

        if inside_planes == PLANE_COUNT {
            FrustumTest::Inside
        } else {
            FrustumTest::Intersecting
        }
    }

    /// Classify a [`BoundingSphere`].
    pub fn classify_bounding_sphere(&self, sphere: &BoundingSphere) -> FrustumTest {
        self.classify_sphere(sphere.center, sphere.radius)
    }

    /// Classify a [`BoundingBox`].
    pub fn classify_bounding_box(&self, aabb: &BoundingBox) -> FrustumTest {
        self.classify_box(aabb.center, aabb.half_extent)
    }
}

/// Evaluate the plane equation at `point`.
#[inline]
fn plane_distance(plane: &Vec4, point: Vec3) -> f32 {
    plane.x * point.x + plane.y * point.y + plane.z * point.z + plane.w
}

// ===== FREE-FUNCTION API =====
//
// Thin wrappers keeping the engine's historical entry points.

/// Construct a six plane frustum from a model-view and a projection matrix.
pub fn build_frustum(modelview: &Mat4, projection: &Mat4) -> Frustum {
    Frustum::build(modelview, projection)
}

/// Returns `true` if the point is inside all six planes.
pub fn point_in_frustum(frustum: &Frustum, location: Vec3) -> bool {
    frustum.contains_point(location)
}

/// Distance of the sphere in the frustum (> 0), or 0.0 when outside.
pub fn sphere_distance_in_frustum(frustum: &Frustum, location: Vec3, radius: f32) -> f32 {
    frustum.sphere_distance(location, radius)
}

/// Classify a sphere as outside, intersecting or inside.
pub fn sphere_intersect_frustum(frustum: &Frustum, location: Vec3, radius: f32) -> FrustumTest {
    frustum.classify_sphere(location, radius)
}

/// Returns `true` if the box is inside or intersecting the frustum.
pub fn box_in_frustum(frustum: &Frustum, location: Vec3, dimension: Vec3) -> bool {
    frustum.contains_box(location, dimension)
}

/// Classify a box as outside, intersecting or inside.
pub fn box_intersect_frustum(frustum: &Frustum, location: Vec3, dimension: Vec3) -> FrustumTest {
    frustum.classify_box(location, dimension)
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
