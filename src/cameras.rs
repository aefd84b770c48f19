//! Cameras and configs for cameras
use crate::utils::{self, SerdeVector};
use crate::{Point, Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Camera Config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: SerdeVector,
    pub look_at: SerdeVector,
    pub up: SerdeVector,
    pub vertical_fov_deg: f64,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: SerdeVector(0.0, 3.0, 8.0),
            look_at: SerdeVector(0.0, 0.5, 0.0),
            up: SerdeVector(0.0, 1.0, 0.0),
            vertical_fov_deg: 60.0,
        }
    }
}

/// Pinhole camera
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    /// Half-height of the image plane at unit distance
    half_height: f64,
    width: u32,
    height: u32,
    aspect_ratio: f64,
}
impl Camera {
    pub fn new(
        position: Point,
        look_at: Point,
        v_up: Vec3,
        vertical_fov_deg: f64,
        width: u32,
        height: u32,
    ) -> Self {
        let forward = utils::safe_normalize(&(look_at - position));
        let right = utils::safe_normalize(&forward.cross(&v_up));
        let up = utils::safe_normalize(&right.cross(&forward));

        Self {
            origin: position,
            forward,
            right,
            up,
            half_height: (vertical_fov_deg.to_radians() / 2.0).tan(),
            width,
            height,
            aspect_ratio: width as f64 / height.max(1) as f64,
        }
    }

    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        Self::new(
            config.position.into(),
            config.look_at.into(),
            config.up.into(),
            config.vertical_fov_deg,
            width,
            height,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ray through the center of pixel `(x, y)`, with `y` growing downwards
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let px = (2.0 * (x as f64 + 0.5) / self.width as f64 - 1.0)
            * self.half_height
            * self.aspect_ratio;
        let py = (1.0 - 2.0 * (y as f64 + 0.5) / self.height as f64) * self.half_height;

        Ray::new(self.origin, self.forward + self.right * px + self.up * py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(width: u32, height: u32) -> Camera {
        Camera::new(
            Point::new(0.0, 0.0, 5.0),
            Point::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
            90.0,
            width,
            height,
        )
    }

    #[test]
    fn test_center_ray_looks_forward() {
        let ray = camera(3, 3).get_ray(1, 1);
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
        assert_eq!(ray.orig, Point::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_orientation() {
        let cam = camera(4, 2);
        // Top-left pixel points up and to the left
        let ray = cam.get_ray(0, 0);
        assert!(ray.dir[0] < 0.0);
        assert!(ray.dir[1] > 0.0);
        // Bottom-right pixel points down and to the right
        let ray = cam.get_ray(3, 1);
        assert!(ray.dir[0] > 0.0);
        assert!(ray.dir[1] < 0.0);
    }

    #[test]
    fn test_aspect_ratio_widens_horizontal_extent() {
        let cam = camera(200, 100);
        let left = cam.get_ray(0, 50).dir;
        let top = cam.get_ray(100, 0).dir;
        // 90 degree vertical fov: tan(45) = 1, horizontal doubled by the aspect ratio
        let horizontal = (left[0] / -left[2]).abs();
        let vertical = (top[1] / -top[2]).abs();
        assert!((horizontal - 1.99).abs() < 1e-9);
        assert!((vertical - 0.99).abs() < 1e-9);
    }

    #[test]
    fn test_from_config() {
        let cam = Camera::from_config(&CameraConfig::default(), 800, 600);
        assert_eq!(cam.width(), 800);
        assert_eq!(cam.height(), 600);
        let ray = cam.get_ray(400, 300);
        assert!(ray.dir[1] < 0.0);
        assert!(ray.dir[2] < 0.0);
    }
}
