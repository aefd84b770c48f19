//! Scene container, nearest-hit search and direct-lighting shading

use crate::{
    color::Color,
    lights::Light,
    materials::Material,
    objects::{Hittable, Plane, Shape, Sphere},
    utils, Point, Ray, Vec3, SHADOW_BIAS,
};

/// Represents a hit
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Point of intersection
    pub p: Point,
    /// Unit surface normal
    pub normal: Vec3,
    /// Copy of the material of the surface that was hit
    pub material: Material,
}

/// Everything that gets rendered
///
/// Built once before rendering and only read afterwards, so pixels can be shaded independently.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Shape>,
    pub lights: Vec<Light>,
    pub background: Color,
}
impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            background: Color::new(80, 90, 110),
        }
    }
}
impl Scene {
    /// Spheres are enumerated before planes
    pub fn new(
        spheres: Vec<Sphere>,
        planes: Vec<Plane>,
        lights: Vec<Light>,
        background: Color,
    ) -> Self {
        let objects = spheres
            .into_iter()
            .map(Shape::from)
            .chain(planes.into_iter().map(Shape::from))
            .collect();
        Self {
            objects,
            lights,
            background,
        }
    }

    /// Append a primitive at the end of the enumeration order
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.objects.push(shape.into())
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light)
    }

    pub fn objects(&self) -> &[Shape] {
        &self.objects
    }

    /// Nearest intersection along the ray
    ///
    /// Linear scan. On equal distances the primitive enumerated first wins.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let mut closest_so_far = f64::INFINITY;
        let mut hr_final = None;

        for obj in &self.objects {
            if let Some(t) = obj.try_hit(ray) {
                if t < closest_so_far {
                    closest_so_far = t;
                    let p = ray.get(t);
                    hr_final = Some(HitRecord {
                        t,
                        p,
                        normal: obj.normal_at(&p),
                        material: *obj.material(),
                    });
                }
            }
        }
        hr_final
    }

    /// Whether anything sits between `point` and a light at `light_pos`
    pub fn is_in_shadow(&self, point: &Point, light_pos: &Point) -> bool {
        let to_light = light_pos - point;
        let light_dist = to_light.norm();
        let light_dir = utils::safe_normalize(&to_light);

        let shadow_ray = Ray::new(point + light_dir * SHADOW_BIAS, light_dir);
        self.intersect(&shadow_ray)
            .map_or(false, |hr| hr.t < light_dist)
    }

    /// Color seen along a primary ray
    pub fn trace_ray(&self, ray: &Ray) -> Color {
        match self.intersect(ray) {
            Some(hr) => self.shade(ray, &hr),
            None => self.background,
        }
    }

    /// Ambient term plus Blinn-Phong diffuse and specular for every unoccluded light
    pub fn shade(&self, ray: &Ray, hr: &HitRecord) -> Color {
        let mat = &hr.material;
        let view_dir = utils::safe_normalize(&-ray.dir);

        self.lights
            .iter()
            .filter(|light| !self.is_in_shadow(&hr.p, &light.position))
            .fold(mat.ambient_color(), |result, light| {
                let light_dir = utils::safe_normalize(&(light.position - hr.p));
                let diff = hr.normal.dot(&light_dir).max(0.0);
                let diffuse = mat.color * (mat.diffuse * diff);

                let half_dir = utils::safe_normalize(&(light_dir + view_dir));
                let spec = hr.normal.dot(&half_dir).max(0.0).powf(mat.shininess);
                let specular = light.color * (mat.specular * spec);

                result + (diffuse + specular) * light.intensity
            })
    }
}
