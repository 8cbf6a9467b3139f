//! Integration tests for the logging system
//!
//! Run with: cargo test --test logging_integration_tests

use gfx_engine::gfx::camera::{Camera, Projection};
use gfx_engine::gfx::log::{Logger, LogEntry, LogSeverity};
use gfx_engine::gfx::{Engine, Error};
use gfx_engine::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_rejected_projection_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let result = Camera::look_at(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
        &Projection::perspective_degrees(60.0, 1.0, 0.1, 0.05),
    );

    assert!(matches!(result, Err(Error::InvalidProjection(_))));

    {
        let captured = entries.lock().unwrap();
        let errors: Vec<&LogEntry> = captured
            .iter()
            .filter(|e| e.severity == LogSeverity::Error)
            .collect();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "gfx::Camera");
        assert!(errors[0].message.contains("far plane"));
        assert!(errors[0].file.is_some());
        assert!(errors[0].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_camera_creation_logs_debug() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let camera = Camera::look_at(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::ZERO,
        Vec3::Y,
        &Projection::default(),
    );
    assert!(camera.is_ok());

    {
        let captured = entries.lock().unwrap();
        assert!(captured
            .iter()
            .any(|e| e.severity == LogSeverity::Debug && e.source == "gfx::Camera"));
        assert!(captured.iter().all(|e| e.severity != LogSeverity::Error));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_frustum_queries_do_not_log() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let camera = gfx_engine::gfx::camera::Camera::new(
        gfx_engine::glam::Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y),
        gfx_engine::glam::Mat4::perspective_rh_gl(1.0, 1.0, 0.1, 100.0),
    );
    let _ = camera.frustum().classify_box(Vec3::ZERO, Vec3::ONE);
    let _ = camera.frustum().sphere_distance(Vec3::ZERO, 1.0);

    assert!(entries.lock().unwrap().is_empty());

    Engine::reset_logger();
}
