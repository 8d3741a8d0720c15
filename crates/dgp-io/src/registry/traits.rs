//! Saver trait and save options.

use dgp_core::SceneGraph;

/// Trait for file savers.
///
/// Implement this trait to add support for writing a new file format.
pub trait Saver: Send + Sync {
    /// Get the file extension this saver writes (e.g., "stl").
    fn ext(&self) -> &'static str;

    /// Save `scene` to `filename`.
    ///
    /// Returns `true` on success and `false` on any failure. A saver that
    /// rejects the scene must do so before touching the destination.
    fn save(&self, filename: &str, scene: &SceneGraph) -> bool;
}

/// Options for savers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Close text solids with an `endsolid <name>` line.
    ///
    /// Off by default: the historical output of this saver ends after the
    /// last facet, and downstream tools may rely on that.
    pub emit_endsolid: bool,
}

impl SaveOptions {
    /// Create default save options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close text solids with an `endsolid` line.
    pub fn with_endsolid(mut self) -> Self {
        self.emit_endsolid = true;
        self
    }
}
