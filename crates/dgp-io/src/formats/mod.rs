//! Savers for the supported file formats.

#[cfg(feature = "stl")]
pub mod stl;
