//! dgp-io: File savers for DGP scene graphs.
//!
//! # Supported Formats
//!
//! | Format | Extension | Notes |
//! |--------|-----------|-------|
//! | ASCII STL | `.stl` | single triangle mesh, per-face normals |
//!
//! # Quick Start
//!
//! ```no_run
//! use dgp_core::{IndexedFaceSet, SceneGraph, Shape};
//!
//! let mesh = IndexedFaceSet::from_buffers(
//!     vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
//!     vec![0, 1, 2, -1],
//! )
//! .with_face_normals(vec![0.0, 0.0, 1.0]);
//! let scene = SceneGraph::new().with_child(Shape::new(mesh));
//!
//! assert!(dgp_io::save("/tmp/tri.stl", &scene));
//! ```
//!
//! Savers report failure as `false`. Use `SaverStl::try_save` to get the
//! reason as a `SaveError`.

pub mod error;
pub mod formats;
pub mod registry;

pub use error::{FailureKind, Result, SaveError};
pub use registry::{SaveOptions, Saver, SaverRegistry};

#[cfg(feature = "stl")]
pub use formats::stl::SaverStl;

/// Save a scene, picking the saver from the destination extension.
pub fn save(filename: &str, scene: &dgp_core::SceneGraph) -> bool {
    SaverRegistry::with_defaults().save(filename, scene)
}
