//! Error types for dgp-io.

use dgp_core::{NormalBinding, SceneError};
use thiserror::Error;

/// Result type for dgp-io operations.
pub type Result<T> = std::result::Result<T, SaveError>;

/// Broad class of a save failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The caller passed no destination.
    InvalidArgument,
    /// The scene does not have the shape the saver requires.
    StructuralMismatch,
    /// The destination could not be written.
    Io,
}

/// Errors that can occur while saving a scene.
#[derive(Debug, Error)]
pub enum SaveError {
    /// No destination path was given.
    #[error("no destination path")]
    InvalidArgument,

    /// The scene does not hold exactly one top-level node.
    #[error("scene has {0} children, expected exactly 1")]
    ChildCount(usize),

    /// The top-level node is not a Shape.
    #[error("scene child is a {0} node, not a Shape")]
    NotShape(&'static str),

    /// The Shape has no IndexedFaceSet geometry.
    #[error("shape geometry is {0}, not an IndexedFaceSet")]
    NotIndexedFaceSet(&'static str),

    /// Some face of the mesh is not a triangle.
    #[error("IndexedFaceSet is not a triangle mesh")]
    NotTriangleMesh,

    /// The mesh normals are not bound per face.
    #[error("normal binding is {0:?}, expected PerFace")]
    NormalBinding(NormalBinding),

    /// Coordinate or normal buffers are shorter than the faces require.
    #[error("invalid mesh buffers: {0}")]
    Buffers(#[from] SceneError),

    /// No saver is registered for the destination extension.
    #[error("no saver for extension: {0:?}")]
    NoSaver(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SaveError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            SaveError::InvalidArgument | SaveError::NoSaver(_) => FailureKind::InvalidArgument,
            SaveError::Io(_) => FailureKind::Io,
            _ => FailureKind::StructuralMismatch,
        }
    }
}
