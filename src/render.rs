//! Raster driver: one primary ray per pixel into a color buffer and a shadow mask

use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::{buffer::ImageBuffer, cameras::Camera, color::Color, scene::Scene};

#[derive(Debug, Clone, Default)]
pub struct RenderSettings {
    /// Render rows on the rayon thread pool. Output is identical either way.
    pub parallel: bool,
}

/// Both buffers of a finished render
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: ImageBuffer,
    /// White where lit or background, black where the key light is occluded
    pub shadow_mask: ImageBuffer,
    pub elapsed: Duration,
}

/// Color and mask value of a single pixel
///
/// The mask only looks at the first light of the scene.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32) -> (Color, Color) {
    let ray = camera.get_ray(x, y);
    let color = scene.trace_ray(&ray);

    let mask = match (scene.intersect(&ray), scene.lights.first()) {
        (Some(hr), Some(key)) if scene.is_in_shadow(&hr.p, &key.position) => Color::BLACK,
        _ => Color::WHITE,
    };
    (color, mask)
}

/// Render the whole frame
///
/// The progress bar, if any, is advanced once per finished row. The caller finishes it.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    progress: Option<&ProgressBar>,
) -> RenderOutput {
    let (width, height) = (camera.width(), camera.height());
    let mut image = ImageBuffer::new(width, height, scene.background);
    let mut shadow_mask = ImageBuffer::new(width, height, Color::WHITE);

    let report_every = (height / 10).max(1);
    let finish_row = |y: u32| {
        if let Some(bar) = progress {
            bar.inc(1);
        }
        if y % report_every == 0 {
            log::debug!("Progress: {}%", y as u64 * 100 / height as u64);
        }
    };

    let start = Instant::now();
    if width > 0 && height > 0 {
        if settings.parallel {
            image
                .pixels
                .par_chunks_mut(width as usize)
                .zip(shadow_mask.pixels.par_chunks_mut(width as usize))
                .enumerate()
                .for_each(|(y, (row, mask_row))| {
                    let y = y as u32;
                    for (x, (c, m)) in row.iter_mut().zip(mask_row.iter_mut()).enumerate() {
                        (*c, *m) = render_pixel(scene, camera, x as u32, y);
                    }
                    finish_row(y);
                });
        } else {
            for y in 0..height {
                for x in 0..width {
                    let (c, m) = render_pixel(scene, camera, x, y);
                    image.put_pixel(x, y, c);
                    shadow_mask.put_pixel(x, y, m);
                }
                finish_row(y);
            }
        }
    }
    let elapsed = start.elapsed();

    RenderOutput {
        image,
        shadow_mask,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::eval::{evaluate, DEFAULT_SHADOW_THRESHOLD};
    use crate::lights::Light;
    use crate::materials::Material;
    use crate::objects::Sphere;
    use crate::{Point, Vec3};

    /// One sphere, one light, no planes
    fn single_sphere_scene() -> Scene {
        let mat = Material::new(Color::new(220, 255, 200), 0.2, 0.8, 0.3, 32.0);
        Scene::new(
            vec![Sphere::new(Point::new(0.0, 0.5, 2.0), 0.5, mat)],
            vec![],
            vec![Light::new(
                Point::new(3.0, 1.0, 3.0),
                Color::new(255, 255, 230),
                1.0,
            )],
            Color::new(80, 90, 110),
        )
    }

    fn default_camera(width: u32, height: u32) -> Camera {
        Camera::new(
            Point::new(0.0, 3.0, 8.0),
            Point::new(0.0, 0.5, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            60.0,
            width,
            height,
        )
    }

    #[test]
    fn test_single_sphere_end_to_end() {
        let scene = single_sphere_scene();
        let camera = default_camera(800, 600);
        let out = render(&scene, &camera, &RenderSettings::default(), None);

        assert_eq!(out.image.len(), 480_000);
        assert_eq!(out.shadow_mask.len(), 480_000);

        let mut ppm = Vec::new();
        out.image.write_ppm(&mut ppm).unwrap();
        let text = String::from_utf8(ppm).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("800 600"));
        assert_eq!(lines.next(), Some("255"));
        let triples: Vec<&str> = lines.collect();
        assert_eq!(triples.len(), 480_000);
        assert!(triples.iter().all(|l| l.split(' ').count() == 3));
        assert!(out.elapsed > Duration::ZERO);

        let metrics = evaluate(&out.image, DEFAULT_SHADOW_THRESHOLD);
        assert!(metrics.shadow_area_ratio >= 0.0 && metrics.shadow_area_ratio <= 1.0);

        // Corners see only background
        assert_eq!(out.image.get(0, 0), Some(Color::new(80, 90, 110)));
        assert_eq!(out.shadow_mask.get(0, 0), Some(Color::WHITE));
        // The sphere is visible somewhere
        assert!(out.image.pixels.iter().any(|c| *c != scene.background));
    }

    #[test]
    fn test_self_shadowed_side_is_masked() {
        let scene = single_sphere_scene();
        let camera = default_camera(160, 120);
        let out = render(&scene, &camera, &RenderSettings::default(), None);
        // The far side of the sphere from the light shadows itself
        assert!(out.shadow_mask.pixels.iter().any(|c| *c == Color::BLACK));
        for (c, m) in out.image.pixels.iter().zip(&out.shadow_mask.pixels) {
            if *m == Color::BLACK {
                assert_eq!(*c, Color::new(220, 255, 200) * 0.2);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = Config::default().build_scene();
        let camera = default_camera(120, 90);
        let a = render(&scene, &camera, &RenderSettings::default(), None);
        let b = render(&scene, &camera, &RenderSettings::default(), None);
        assert_eq!(a.image, b.image);
        assert_eq!(a.shadow_mask, b.shadow_mask);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = Config::default().build_scene();
        let camera = default_camera(97, 61);
        let seq = render(&scene, &camera, &RenderSettings { parallel: false }, None);
        let par = render(&scene, &camera, &RenderSettings { parallel: true }, None);
        assert_eq!(seq.image, par.image);
        assert_eq!(seq.shadow_mask, par.shadow_mask);
    }

    #[test]
    fn test_no_lights_gives_white_mask() {
        let mut scene = single_sphere_scene();
        scene.lights.clear();
        let out = render(&scene, &default_camera(40, 30), &RenderSettings::default(), None);
        assert!(out.shadow_mask.pixels.iter().all(|c| *c == Color::WHITE));
    }

    #[test]
    fn test_progress_counts_rows() {
        for parallel in [false, true] {
            let bar = ProgressBar::hidden();
            bar.set_length(100);
            render(
                &single_sphere_scene(),
                &default_camera(40, 30),
                &RenderSettings { parallel },
                Some(&bar),
            );
            assert_eq!(bar.position(), 30);
            assert!(!bar.is_finished());
        }
    }

    #[test]
    fn test_empty_image() {
        let out = render(
            &single_sphere_scene(),
            &default_camera(0, 0),
            &RenderSettings { parallel: true },
            None,
        );
        assert!(out.image.is_empty());
    }
}
