//! Scene configuration
//!
//! Everything a render needs, loadable from YAML. [`Config::default`] is the built-in
//! five-sphere hard-shadow case.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    cameras::{Camera, CameraConfig},
    color::Color,
    error::ConfigError,
    eval::DEFAULT_SHADOW_THRESHOLD,
    lights::Light,
    materials::Material,
    objects::{Plane, Sphere},
    scene::Scene,
    utils::SerdeVector,
    Vec3,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    pub image: ImageConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
    #[serde(default)]
    pub planes: Vec<PlaneConfig>,
    #[serde(default)]
    pub lights: Vec<LightConfig>,
    #[serde(default = "default_shadow_threshold")]
    pub shadow_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
}

/// Sphere config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    pub center: SerdeVector,
    pub radius: f64,
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneConfig {
    pub point: SerdeVector,
    pub normal: SerdeVector,
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    pub position: SerdeVector,
    pub color: Color,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_background() -> Color {
    Color::new(80, 90, 110)
}

fn default_shadow_threshold() -> f64 {
    DEFAULT_SHADOW_THRESHOLD
}

fn default_intensity() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        let sphere = |center: SerdeVector, color: [u8; 3]| SphereConfig {
            center,
            radius: 0.5,
            material: Material::new(color.into(), 0.2, 0.8, 0.3, 32.0),
        };

        Self {
            name: "RAY TRACER CASE 2: 5 SPHERES, HARD SHADOWS".to_string(),
            image: ImageConfig {
                width: 800,
                height: 600,
            },
            camera: CameraConfig::default(),
            background: default_background(),
            spheres: vec![
                sphere(SerdeVector(-1.5, 1.0, 1.5), [255, 220, 200]),
                sphere(SerdeVector(1.5, 0.0, 2.5), [200, 220, 255]),
                sphere(SerdeVector(0.0, 0.5, 2.0), [220, 255, 200]),
                sphere(SerdeVector(-0.8, 2.3, 1.5), [255, 180, 180]),
                sphere(SerdeVector(0.8, 1.8, 2.0), [180, 255, 180]),
            ],
            planes: Vec::new(),
            lights: vec![LightConfig {
                position: SerdeVector(3.0, 1.0, 3.0),
                color: Color::new(255, 255, 230),
                intensity: 1.0,
            }],
            shadow_threshold: DEFAULT_SHADOW_THRESHOLD,
        }
    }
}

impl Config {
    /// Load and validate a YAML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        log::info!("Loaded scene '{}' from {}", config.name, path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Validation(msg));

        if self.image.width == 0 || self.image.height == 0 {
            return invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.image.width, self.image.height
            ));
        }

        let fov = self.camera.vertical_fov_deg;
        if !(fov > 0.0 && fov < 180.0) {
            return invalid(format!("vertical_fov_deg must be in (0, 180), got {fov}"));
        }
        let forward = Vec3::from(self.camera.look_at) - Vec3::from(self.camera.position);
        let up: Vec3 = self.camera.up.into();
        if forward.cross(&up).norm() == 0.0 {
            return invalid("camera up vector must not be parallel to the view direction".into());
        }

        for (i, s) in self.spheres.iter().enumerate() {
            if !(s.radius > 0.0) {
                return invalid(format!("sphere {i}: radius must be positive, got {}", s.radius));
            }
            check_material(&s.material, &format!("sphere {i}"))?;
        }
        for (i, p) in self.planes.iter().enumerate() {
            if Vec3::from(p.normal).norm() == 0.0 {
                return invalid(format!("plane {i}: normal must be non-zero"));
            }
            check_material(&p.material, &format!("plane {i}"))?;
        }
        for (i, l) in self.lights.iter().enumerate() {
            if !(l.intensity >= 0.0) {
                return invalid(format!(
                    "light {i}: intensity must not be negative, got {}",
                    l.intensity
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.shadow_threshold) {
            return invalid(format!(
                "shadow_threshold must be in [0, 1], got {}",
                self.shadow_threshold
            ));
        }
        Ok(())
    }

    pub fn build_scene(&self) -> Scene {
        let spheres = self
            .spheres
            .iter()
            .map(|s| Sphere::new(s.center.into(), s.radius, s.material))
            .collect();
        let planes = self
            .planes
            .iter()
            .map(|p| Plane::new(p.point.into(), p.normal.into(), p.material))
            .collect();
        let lights = self
            .lights
            .iter()
            .map(|l| Light::new(l.position.into(), l.color, l.intensity))
            .collect();

        let scene = Scene::new(spheres, planes, lights, self.background);
        log::info!(
            "Scene '{}': {} spheres, {} planes, {} lights",
            self.name,
            self.spheres.len(),
            self.planes.len(),
            self.lights.len()
        );
        scene
    }

    pub fn camera(&self) -> Camera {
        Camera::from_config(&self.camera, self.image.width, self.image.height)
    }
}

fn check_material(m: &Material, what: &str) -> Result<(), ConfigError> {
    if !(m.shininess > 0.0) {
        return Err(ConfigError::Validation(format!(
            "{what}: shininess must be positive, got {}",
            m.shininess
        )));
    }
    Ok(())
}
