/*!
# GFX Engine

Math and visibility layer of a lightweight OpenGL ES 2.0 game engine.

Platform bootstrap, shaders and draw calls live elsewhere; this crate
provides what a renderer asks before issuing draw calls: which objects
the camera can see.

## Architecture

- **Frustum**: six normalized clipping planes extracted from the
  model-view and projection matrices, with point, sphere and box tests
- **Camera**: matrices plus the frustum derived from them
- **Projection**: typed, validated projection parameters
- **Culler**: per-frame visibility pass over bounding volumes
- **utils**: power-of-two sizing, picking colors, direction vectors
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod utils;

// Main gfx namespace module
pub mod gfx {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine services (logging)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: gfx_* macros are NOT re-exported here - they are internal only
    }

    // Camera, frustum and culling
    pub mod camera {
        pub use crate::camera::*;
    }

    // Helpers
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
