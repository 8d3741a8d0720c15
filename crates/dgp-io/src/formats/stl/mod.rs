//! ASCII STL saver.
//!
//! Writes the single triangle mesh of a scene as an ASCII STL solid. The
//! scene must hold exactly one Shape whose geometry is an IndexedFaceSet
//! made of triangles with one normal per face; anything else is rejected
//! before the destination file is opened.

mod name;
mod validate;
mod writer;

pub use name::{name_from_path, solid_name};
pub use validate::{validate, ValidatedMesh};
pub use writer::{format_scalar, write_ascii, Scientific};

use std::fs::File;
use std::io::{BufWriter, Write};

use dgp_core::SceneGraph;
use tracing::{debug, info, warn};

use crate::error::{FailureKind, Result};
use crate::registry::{SaveOptions, Saver};

/// Saver for ASCII STL files.
#[derive(Debug, Clone, Default)]
pub struct SaverStl {
    options: SaveOptions,
}

impl SaverStl {
    /// File extension written by this saver.
    pub const EXT: &'static str = "stl";

    /// Create an STL saver with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an STL saver with custom options.
    pub fn with_options(options: SaveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SaveOptions {
        &self.options
    }

    /// Save `scene` to `filename`, reporting why a save failed.
    pub fn try_save(&self, filename: &str, scene: &SceneGraph) -> Result<()> {
        let mesh = validate(filename, scene)?;
        let name = solid_name(filename, mesh.mesh);
        debug!(filename, solid = %name, facets = mesh.facet_count(), "writing STL");

        let mut out = BufWriter::new(File::create(filename)?);
        write_ascii(&mut out, &mesh, &name, &self.options)?;
        out.flush()?;

        info!(filename, facets = mesh.facet_count(), "saved STL");
        Ok(())
    }

    /// Serialize `scene` to an in-memory STL document.
    ///
    /// `filename` is only used to validate and to derive the solid name.
    pub fn to_ascii_string(&self, filename: &str, scene: &SceneGraph) -> Result<String> {
        let mesh = validate(filename, scene)?;
        let name = solid_name(filename, mesh.mesh);

        let mut out = Vec::new();
        write_ascii(&mut out, &mesh, &name, &self.options)?;
        // Every byte written is either ASCII or copied from a `&str`.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl Saver for SaverStl {
    fn ext(&self) -> &'static str {
        Self::EXT
    }

    fn save(&self, filename: &str, scene: &SceneGraph) -> bool {
        match self.try_save(filename, scene) {
            Ok(()) => true,
            Err(err) => {
                match err.kind() {
                    FailureKind::Io => warn!(filename, error = %err, "cannot write STL"),
                    _ => debug!(filename, error = %err, "scene rejected by STL saver"),
                }
                false
            }
        }
    }
}
