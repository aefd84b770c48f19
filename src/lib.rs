//! Hard-shadow ray tracing library
//!
//! One primary ray per pixel, Blinn-Phong direct lighting, and a binary shadow test per light.
//! The finished image is then scanned to measure how much of it sits in shadow.

use nalgebra::Vector3;

pub mod buffer;
pub mod cameras;
pub mod color;
pub mod config;
pub mod error;
pub mod eval;
pub mod lights;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod utils;

pub type Vec3 = Vector3<f64>;
pub type Point = Vec3;

/// Minimum accepted ray parameter for a hit.
///
/// An empirical acne bias tuned to the unit scale of the scenes, not a derived tolerance.
/// Hits closer than this to the ray origin are treated as self-intersections.
pub const RAY_EPSILON: f64 = 1e-3;

/// Distance the shadow ray origin is pushed towards the light, in scene units.
///
/// Empirical bias against shadow acne. The push is along the light direction, not the normal.
pub const SHADOW_BIAS: f64 = 1e-4;

/// Below this, a ray is considered parallel to a plane.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// Prelude
pub mod prelude {
    pub use crate::buffer::ImageBuffer;
    pub use crate::cameras::Camera;
    pub use crate::color::Color;
    pub use crate::config::Config;
    pub use crate::eval::{evaluate, EvalMetrics};
    pub use crate::lights::Light;
    pub use crate::materials::Material;
    pub use crate::objects::{Hittable, Plane, Shape, Sphere};
    pub use crate::render::{render, RenderOutput, RenderSettings};
    pub use crate::scene::{HitRecord, Scene};
    pub use crate::{Point, Ray, Vec3};
}

/// The ray in ray tracing
///
/// The direction is always stored normalized.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub orig: Point,
    pub dir: Vec3,
}
impl Ray {
    pub fn new(orig: Point, dir: Vec3) -> Self {
        Self {
            orig,
            dir: utils::safe_normalize(&dir),
        }
    }

    pub fn get(&self, t: f64) -> Point {
        self.orig + t * self.dir
    }
}
