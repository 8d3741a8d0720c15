//! Shape nodes and their appearance.

use glam::Vec3;

use crate::geometry::Geometry;

/// Surface material of a shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Material {
    pub ambient_intensity: f32,
    pub diffuse_color: Vec3,
    pub emissive_color: Vec3,
    pub shininess: f32,
    pub specular_color: Vec3,
    pub transparency: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.2,
            diffuse_color: Vec3::splat(0.8),
            emissive_color: Vec3::ZERO,
            shininess: 0.2,
            specular_color: Vec3::ZERO,
            transparency: 0.0,
        }
    }
}

/// Appearance of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Appearance {
    pub material: Option<Material>,
}

/// A node pairing a geometry with its appearance.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Shape {
    pub appearance: Option<Appearance>,
    pub geometry: Option<Geometry>,
}

impl Shape {
    /// Create a shape with the given geometry and no appearance.
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            appearance: None,
            geometry: Some(geometry.into()),
        }
    }

    /// Set the appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn appearance(&self) -> Option<&Appearance> {
        self.appearance.as_ref()
    }
}
