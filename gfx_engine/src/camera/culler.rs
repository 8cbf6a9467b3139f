/// Camera culling strategies.
///
/// A Culler determines which bounding volumes are visible from a given
/// camera, before any draw call is issued for them. The result only holds
/// indices into the caller's volume slice and lives for one frame.

use glam::Vec3;
use super::camera::Camera;
use super::frustum::{BoundingBox, BoundingSphere, Frustum, FrustumTest};

/// Bounding volume submitted for culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CullVolume {
    /// Single point (billboards, particles, light positions)
    Point(Vec3),
    /// Sphere around an object's pivot
    Sphere(BoundingSphere),
    /// Axis-aligned box around an object's pivot
    Box(BoundingBox),
}

impl CullVolume {
    /// Classify this volume against the frustum.
    ///
    /// Points have no intersecting state: they are `Inside` or `Outside`.
    pub fn classify(&self, frustum: &Frustum) -> FrustumTest {
        match self {
            CullVolume::Point(p) => {
                if frustum.contains_point(*p) {
                    FrustumTest::Inside
                } else {
                    FrustumTest::Outside
                }
            }
            CullVolume::Sphere(s) => frustum.classify_sphere(s.center, s.radius),
            CullVolume::Box(b) => frustum.classify_box(b.center, b.half_extent),
        }
    }

    /// Boolean visibility test (inside or intersecting).
    pub fn is_visible(&self, frustum: &Frustum) -> bool {
        match self {
            CullVolume::Point(p) => frustum.contains_point(*p),
            CullVolume::Sphere(s) => frustum.classify_sphere(s.center, s.radius) != FrustumTest::Outside,
            CullVolume::Box(b) => frustum.contains_box(b.center, b.half_extent),
        }
    }
}

/// Result of a culling pass. Ephemeral — lives for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CullResult {
    visible: Vec<usize>,
    inside_count: usize,
    tested_count: usize,
}

impl CullResult {
    pub(crate) fn new(visible: Vec<usize>, inside_count: usize, tested_count: usize) -> Self {
        Self {
            visible,
            inside_count,
            tested_count,
        }
    }

    /// Indices of visible volumes, in submission order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Number of visible volumes.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Visible volumes proven fully inside the frustum.
    pub fn inside_count(&self) -> usize {
        self.inside_count
    }

    /// Visible volumes that may cross a frustum plane.
    pub fn intersecting_count(&self) -> usize {
        self.visible.len() - self.inside_count
    }

    /// Volumes rejected by the pass.
    pub fn culled_count(&self) -> usize {
        self.tested_count - self.visible.len()
    }
}

/// Strategy for determining visible volumes from a camera.
///
/// Called once per frame before drawing. `&mut self` allows stateful
/// implementations to keep data across frames.
pub trait Culler: Send + Sync {
    /// Cull `volumes` against the camera frustum.
    fn cull(&mut self, camera: &Camera, volumes: &[CullVolume]) -> CullResult;
}

/// Brute-force culler — returns ALL volumes (no actual culling).
///
/// Nothing is proven inside, so every volume counts as intersecting.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Culler for BruteForceCuller {
    fn cull(&mut self, _camera: &Camera, volumes: &[CullVolume]) -> CullResult {
        CullResult::new((0..volumes.len()).collect(), 0, volumes.len())
    }
}

/// Frustum culler — classifies every volume against the camera frustum.
#[derive(Debug, Default)]
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Culler for FrustumCuller {
    fn cull(&mut self, camera: &Camera, volumes: &[CullVolume]) -> CullResult {
        let frustum = camera.frustum();

        let mut visible = Vec::with_capacity(volumes.len());
        let mut inside_count = 0;

        for (index, volume) in volumes.iter().enumerate() {
            match volume.classify(frustum) {
                FrustumTest::Outside => {}
                FrustumTest::Inside => {
                    inside_count += 1;
                    visible.push(index);
                }
                FrustumTest::Intersecting => visible.push(index),
            }
        }

        CullResult::new(visible, inside_count, volumes.len())
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
