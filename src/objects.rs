//! Objects
use crate::{materials::Material, utils, Point, Ray, Vec3, PARALLEL_EPSILON, RAY_EPSILON};

/// A surface that rays can hit
pub trait Hittable {
    /// Nearest ray parameter beyond [`RAY_EPSILON`] where the ray meets the surface
    fn try_hit(&self, ray: &Ray) -> Option<f64>;

    /// Unit surface normal at a point on the surface
    fn normal_at(&self, p: &Point) -> Vec3;

    fn material(&self) -> &Material;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
    pub material: Material,
}
impl Sphere {
    pub fn new(center: Point, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}
impl Hittable for Sphere {
    fn try_hit(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.orig - self.center;
        let a = ray.dir.dot(&ray.dir);
        let b = 2.0 * oc.dot(&ray.dir);
        let c = oc.dot(&oc) - self.radius.powi(2);
        let discriminant = b.powi(2) - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Take the near root unless it is behind the bias, then fall back to the far one
        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / (2.0 * a);
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t = if t0 > RAY_EPSILON { t0 } else { t1 };
        (t > RAY_EPSILON).then_some(t)
    }

    fn normal_at(&self, p: &Point) -> Vec3 {
        utils::safe_normalize(&(p - self.center))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// Infinite plane
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub point: Point,
    normal: Vec3,
    pub material: Material,
}
impl Plane {
    /// The normal is normalized here, once
    pub fn new(point: Point, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: utils::safe_normalize(&normal),
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}
impl Hittable for Plane {
    fn try_hit(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(&ray.dir);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (self.point - ray.orig).dot(&self.normal) / denom;
        (t > RAY_EPSILON).then_some(t)
    }

    fn normal_at(&self, _p: &Point) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// Every kind of primitive a scene can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}
impl Hittable for Shape {
    fn try_hit(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(s) => s.try_hit(ray),
            Shape::Plane(p) => p.try_hit(ray),
        }
    }

    fn normal_at(&self, p: &Point) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.normal_at(p),
            Shape::Plane(pl) => pl.normal_at(p),
        }
    }

    fn material(&self) -> &Material {
        match self {
            Shape::Sphere(s) => s.material(),
            Shape::Plane(p) => p.material(),
        }
    }
}
impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}
impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}
