//! Error types for scene graph queries.

use thiserror::Error;

/// Result type for scene graph operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised while querying scene graph buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("face {face} references vertex {vertex}, but only {count} vertices exist")]
    VertexOutOfRange { face: usize, vertex: i32, count: usize },

    #[error("face {face} has no normal: buffer holds {len} floats")]
    NormalOutOfRange { face: usize, len: usize },

    #[error("coordinate buffer length {len} is not a multiple of 3")]
    RaggedCoord { len: usize },
}
