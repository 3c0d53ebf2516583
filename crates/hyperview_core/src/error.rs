//! Error types for solid construction and the rendering backend seam
//!
//! The math itself never fails: degenerate inputs produce zero vectors or
//! NaN/Inf that propagate like any other floating-point value. Errors only
//! arise when a solid is attached to a rendering backend.

use std::fmt;

use crate::backend::ProgramKind;

/// Failure reported by a rendering backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendError {
    /// Shader compilation or program linking failed
    ShaderLink {
        program: ProgramKind,
        log: String,
    },
    /// Geometry could not be uploaded
    Upload(String),
    /// A draw referenced an unknown mesh or program
    InvalidHandle(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::ShaderLink { program, log } => {
                write!(f, "Shader link failed for {:?}: {}", program, log)
            }
            BackendError::Upload(msg) => write!(f, "Geometry upload failed: {}", msg),
            BackendError::InvalidHandle(msg) => write!(f, "Invalid backend handle: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

/// Fatal error while constructing or drawing a solid
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The backend has no device/context to draw with
    MissingContext(&'static str),
    /// The backend rejected an upload, link or draw
    Backend(BackendError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::MissingContext(what) => write!(f, "Missing rendering context: {}", what),
            CoreError::Backend(err) => write!(f, "Backend error: {}", err),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::MissingContext(_) => None,
            CoreError::Backend(err) => Some(err),
        }
    }
}

impl From<BackendError> for CoreError {
    fn from(err: BackendError) -> Self {
        CoreError::Backend(err)
    }
}
