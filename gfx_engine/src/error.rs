//! Error types for the GFX engine
//!
//! Frustum construction and culling queries are total and never fail.
//! Errors are reserved for rejected configuration (projection parameters,
//! utility arguments).

use std::fmt;

/// Result type for GFX engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// GFX engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Projection parameters cannot produce a valid clip volume
    InvalidProjection(String),

    /// Argument outside the accepted domain
    InvalidParameter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
