//! Saver registry: picks a saver from the destination extension.

use dgp_core::SceneGraph;
use indexmap::IndexMap;
use tracing::debug;

use super::traits::Saver;

/// Registry of savers keyed by file extension.
pub struct SaverRegistry {
    savers: IndexMap<String, Box<dyn Saver>>,
}

impl Default for SaverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SaverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            savers: IndexMap::new(),
        }
    }

    /// Create a registry with the built-in savers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        #[cfg(feature = "stl")]
        registry.register(crate::formats::stl::SaverStl::new());

        registry
    }

    /// Register a saver, replacing any saver with the same extension.
    pub fn register<S: Saver + 'static>(&mut self, saver: S) {
        self.savers
            .insert(saver.ext().to_lowercase(), Box::new(saver));
    }

    /// Get a saver by extension, with or without the leading dot.
    pub fn get(&self, ext: &str) -> Option<&dyn Saver> {
        let ext_lower = ext.trim_start_matches('.').to_lowercase();
        self.savers.get(&ext_lower).map(|s| s.as_ref())
    }

    /// Get the saver matching the extension of `filename`.
    pub fn saver_for(&self, filename: &str) -> Option<&dyn Saver> {
        self.get(extension(filename)?)
    }

    /// List the registered extensions.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.savers.keys().map(String::as_str)
    }

    /// Save `scene` with the saver matching `filename`.
    pub fn save(&self, filename: &str, scene: &SceneGraph) -> bool {
        match self.saver_for(filename) {
            Some(saver) => saver.save(filename, scene),
            None => {
                debug!(filename, "no saver registered for destination");
                false
            }
        }
    }
}

/// Text after the last `.` of the final path component.
fn extension(filename: &str) -> Option<&str> {
    let base = filename
        .rfind(|c: char| c == '/' || c == '\\')
        .map_or(filename, |i| &filename[i + 1..]);
    let dot = base.rfind('.')?;
    Some(&base[dot + 1..]).filter(|ext| !ext.is_empty())
}
