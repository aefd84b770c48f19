//! 8-bit colors with saturating arithmetic

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// An RGB color with one byte per channel
///
/// Scaling and addition clamp every channel to `[0, 255]`. Overshoot is lost once a channel
/// saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `s`, truncating towards zero and clamping
    pub fn scale(self, s: f64) -> Self {
        Self::new(
            scale_channel(self.r, s),
            scale_channel(self.g, s),
            scale_channel(self.b, s),
        )
    }

    /// Mean channel value, normalized to `[0, 1]`
    pub fn brightness(&self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / (3.0 * 255.0)
    }
}

fn scale_channel(c: u8, s: f64) -> u8 {
    let v = (c as f64 * s).trunc();
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, 255.0) as u8
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, s: f64) -> Color {
        self.scale(s)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, o: Color) -> Color {
        Color::new(
            self.r.saturating_add(o.r),
            self.g.saturating_add(o.g),
            self.b.saturating_add(o.b),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}
