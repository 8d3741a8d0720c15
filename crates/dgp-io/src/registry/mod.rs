//! Saver registry and traits.

mod registry;
mod traits;

pub use registry::SaverRegistry;
pub use traits::{SaveOptions, Saver};
