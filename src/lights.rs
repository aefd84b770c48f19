//! Point lights
use crate::{color::Color, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub position: Point,
    pub color: Color,
    /// Scales the whole diffuse and specular contribution
    ///
    /// Expected to be non-negative. Taken as given here; `Config::validate` rejects negative
    /// values from scene files.
    pub intensity: f64,
}
impl Light {
    pub fn new(position: Point, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ConfigError;

    #[test]
    fn test_intensity_is_stored_as_given() {
        let light = Light::new(Point::zeros(), Color::WHITE, -0.5);
        assert_eq!(light.intensity, -0.5);

        let mut config = Config::default();
        config.lights[0].intensity = -0.5;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
