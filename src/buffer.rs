//! Image buffers and their on-disk formats

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;

use crate::color::Color;
use crate::error::{RenderError, RenderResult};

/// Row-major grid of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}
impl ImageBuffer {
    /// Create a buffer with every pixel set to `fill`
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set one pixel. Coordinates outside the image are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Write as plain-text PPM (P3), one `R G B` line per pixel
    pub fn write_ppm<W: Write>(&self, mut out: W) -> RenderResult<()> {
        write!(out, "P3\n{} {}\n255\n", self.width, self.height)?;
        for p in &self.pixels {
            writeln!(out, "{} {} {}", p.r, p.g, p.b)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_ppm(BufWriter::new(file))?;
        log::info!("Saved: {}", path.display());
        Ok(())
    }

    pub fn to_rgb_image(&self) -> RenderResult<RgbImage> {
        let raw: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|c| <[u8; 3]>::from(*c))
            .collect();
        let expected = self.width as usize * self.height as usize;
        let got = self.pixels.len();
        RgbImage::from_raw(self.width, self.height, raw)
            .ok_or(RenderError::SizeMismatch { expected, got })
    }

    /// Save through the `image` crate, format picked from the extension
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgb_image()?.save(path)?;
        log::info!("Saved: {}", path.display());
        Ok(())
    }
}
