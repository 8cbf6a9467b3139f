use glam::{Mat4, Vec4};
use crate::error::Error;
use super::*;

// ============================================================================
// Defaults and constructors
// ============================================================================

#[test]
fn test_default_is_standard_perspective() {
    match Projection::default() {
        Projection::Perspective { fov_y_radians, aspect_ratio, z_near, z_far } => {
            assert!((fov_y_radians - 60.0_f32.to_radians()).abs() < 1e-6);
            assert_eq!(aspect_ratio, 1.0);
            assert_eq!(z_near, 0.1);
            assert_eq!(z_far, 100.0);
        }
        other => panic!("unexpected default projection: {:?}", other),
    }
}

#[test]
fn test_default_matrix_matches_glam() {
    let matrix = Projection::default().matrix().unwrap();
    let expected = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_3, 1.0, 0.1, 100.0);
    assert_eq!(matrix, expected);
}

#[test]
fn test_perspective_degrees() {
    let projection = Projection::perspective_degrees(90.0, 2.0, 1.0, 10.0);
    match projection {
        Projection::Perspective { fov_y_radians, .. } => {
            assert!((fov_y_radians - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        }
        other => panic!("unexpected projection: {:?}", other),
    }
}

#[test]
fn test_screen_2d_maps_corners_to_ndc() {
    let matrix = Projection::screen_2d(800.0, 600.0).matrix().unwrap();

    let top_right = matrix * Vec4::new(400.0, 300.0, 0.0, 1.0);
    assert!((top_right.x - 1.0).abs() < 1e-6);
    assert!((top_right.y - 1.0).abs() < 1e-6);

    let bottom_left = matrix * Vec4::new(-400.0, -300.0, 0.0, 1.0);
    assert!((bottom_left.x + 1.0).abs() < 1e-6);
    assert!((bottom_left.y + 1.0).abs() < 1e-6);
}

#[test]
fn test_orthographic_matrix_matches_glam() {
    let projection = Projection::Orthographic {
        left: -10.0,
        right: 10.0,
        bottom: -5.0,
        top: 5.0,
        z_near: 0.1,
        z_far: 50.0,
    };
    let expected = Mat4::orthographic_rh_gl(-10.0, 10.0, -5.0, 5.0, 0.1, 50.0);
    assert_eq!(projection.matrix().unwrap(), expected);
}

#[test]
fn test_orthographic_allows_negative_near() {
    let projection = Projection::Orthographic {
        left: -1.0,
        right: 1.0,
        bottom: -1.0,
        top: 1.0,
        z_near: -1.0,
        z_far: 1.0,
    };
    assert!(projection.validate().is_ok());
}

// ============================================================================
// Validation
// ============================================================================

fn assert_invalid(projection: Projection, needle: &str) {
    match projection.validate() {
        Err(Error::InvalidProjection(msg)) => {
            assert!(msg.contains(needle), "message {:?} should mention {:?}", msg, needle);
        }
        other => panic!("expected InvalidProjection, got {:?}", other),
    }
    assert!(projection.matrix().is_err());
}

#[test]
fn test_perspective_rejects_bad_fov() {
    assert_invalid(Projection::perspective_degrees(0.0, 1.0, 0.1, 100.0), "FOV");
    assert_invalid(Projection::perspective_degrees(200.0, 1.0, 0.1, 100.0), "FOV");
}

#[test]
fn test_perspective_rejects_bad_aspect() {
    assert_invalid(Projection::perspective_degrees(60.0, 0.0, 0.1, 100.0), "aspect");
}

#[test]
fn test_perspective_rejects_non_positive_near() {
    assert_invalid(Projection::perspective_degrees(60.0, 1.0, 0.0, 100.0), "near plane must be positive");
}

#[test]
fn test_rejects_inverted_depth_range() {
    assert_invalid(Projection::perspective_degrees(60.0, 1.0, 10.0, 10.0), "far plane");
    assert_invalid(
        Projection::Orthographic {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            z_near: 5.0,
            z_far: 1.0,
        },
        "far plane",
    );
}

#[test]
fn test_rejects_zero_extent() {
    assert_invalid(
        Projection::Orthographic2d { left: 3.0, right: 3.0, bottom: 0.0, top: 1.0 },
        "zero width",
    );
    assert_invalid(
        Projection::Orthographic2d { left: 0.0, right: 1.0, bottom: 2.0, top: 2.0 },
        "zero height",
    );
}

#[test]
fn test_rejects_non_finite() {
    assert_invalid(Projection::perspective_degrees(60.0, f32::NAN, 0.1, 100.0), "finite");
    assert_invalid(
        Projection::Orthographic2d { left: 0.0, right: f32::INFINITY, bottom: 0.0, top: 1.0 },
        "finite",
    );
}
