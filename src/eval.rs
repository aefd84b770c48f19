//! Shadow-area evaluation of a finished image

use std::time::Duration;

use crate::buffer::ImageBuffer;

/// Pixels darker than this are counted as shadow
pub const DEFAULT_SHADOW_THRESHOLD: f64 = 0.30;

/// Report on a completed image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvalMetrics {
    pub render_time: Duration,
    pub shadow_pixels: usize,
    /// `shadow_pixels` over the total pixel count, in `[0, 1]`
    pub shadow_area_ratio: f64,
}
impl EvalMetrics {
    pub fn with_render_time(self, render_time: Duration) -> Self {
        Self {
            render_time,
            ..self
        }
    }

    pub fn render_time_ms(&self) -> f64 {
        self.render_time.as_secs_f64() * 1000.0
    }

    /// Throughput for an image of `pixels` pixels, zero when no time was recorded
    pub fn pixels_per_second(&self, pixels: usize) -> f64 {
        let secs = self.render_time.as_secs_f64();
        if secs > 0.0 {
            pixels as f64 / secs
        } else {
            0.0
        }
    }
}

/// Count pixels with brightness strictly below `threshold`
pub fn evaluate(image: &ImageBuffer, threshold: f64) -> EvalMetrics {
    let shadow_pixels = image
        .pixels
        .iter()
        .filter(|p| p.brightness() < threshold)
        .count();
    let shadow_area_ratio = if image.is_empty() {
        0.0
    } else {
        shadow_pixels as f64 / image.len() as f64
    };

    EvalMetrics {
        render_time: Duration::ZERO,
        shadow_pixels,
        shadow_area_ratio,
    }
}
