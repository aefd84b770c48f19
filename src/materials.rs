//! Surface materials for Blinn-Phong shading

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Material
///
/// Owned by exactly one primitive and copied into hit records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base surface color
    pub color: Color,
    /// Fraction of the base color always emitted
    pub ambient: f64,
    /// Lambertian weight
    pub diffuse: f64,
    /// Highlight weight, applied to the light color
    pub specular: f64,
    /// Specular exponent, must be positive
    pub shininess: f64,
}
impl Material {
    pub fn new(color: Color, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Contribution that does not depend on any light
    pub fn ambient_color(&self) -> Color {
        self.color * self.ambient
    }
}
impl Default for Material {
    fn default() -> Self {
        Self::new(Color::WHITE, 0.1, 0.9, 0.3, 32.0)
    }
}
