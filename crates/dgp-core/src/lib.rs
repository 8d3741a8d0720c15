//! Scene graph nodes for the DGP engine.
//!
//! This crate provides the in-memory scene graph consumed by the savers in
//! `dgp-io`:
//! - `SceneGraph` and its top-level `Node`s
//! - `Shape` nodes pairing an `Appearance` with a `Geometry`
//! - `IndexedFaceSet` meshes with flat coordinate, index and normal buffers
//! - `Faces`, a borrowed view enumerating the faces of an index buffer

pub mod errors;
pub mod faces;
pub mod geometry;
pub mod scene;
pub mod shape;

pub use errors::*;
pub use faces::Faces;
pub use geometry::*;
pub use scene::*;
pub use shape::*;
