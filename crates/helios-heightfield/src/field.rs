//! Bilinear-sampled scalar height fields.

use image::DynamicImage;

use crate::HeightFieldError;

/// A read-only 2D field of scalar heights in `[0, 1]`, sampled by normalized
/// coordinates.
pub trait HeightField {
    /// Sample the field at `(u, v)` with bilinear interpolation across the
    /// four nearest samples.
    ///
    /// Coordinates outside `[0, 1]` are clamped to the field boundary; they
    /// are never an error.
    fn sample_bilinear(&self, u: f64, v: f64) -> f64;
}

/// A row-major grid of height samples.
#[derive(Clone, Debug)]
pub struct GridHeightField {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl GridHeightField {
    /// Create a grid field from a flat row-major sample buffer.
    ///
    /// Samples are clamped into `[0, 1]` on construction, so every later
    /// bilinear lookup stays in range.
    pub fn new(
        width: usize,
        height: usize,
        mut samples: Vec<f64>,
    ) -> Result<Self, HeightFieldError> {
        if width == 0 || height == 0 {
            return Err(HeightFieldError::EmptyField);
        }
        if samples.len() != width * height {
            return Err(HeightFieldError::SampleCountMismatch {
                expected: width * height,
                actual: samples.len(),
            });
        }

        for sample in &mut samples {
            *sample = sample.clamp(0.0, 1.0);
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a field from an image, using its luma channel scaled to
    /// `[0, 1]`.
    pub fn from_image(image: &DynamicImage) -> Result<Self, HeightFieldError> {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();
        let samples = gray
            .pixels()
            .map(|p| f64::from(p.0[0]) / 255.0)
            .collect();
        Self::new(width as usize, height as usize, samples)
    }

    /// Grid width in samples.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn sample_at(&self, x: usize, y: usize) -> f64 {
        self.samples[y * self.width + x]
    }
}

impl HeightField for GridHeightField {
    fn sample_bilinear(&self, u: f64, v: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let x = u * (self.width - 1) as f64;
        let y = v * (self.height - 1) as f64;

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x - x0 as f64;
        let fy = y - y0 as f64;

        let top = self.sample_at(x0, y0) * (1.0 - fx) + self.sample_at(x1, y0) * fx;
        let bottom = self.sample_at(x0, y1) * (1.0 - fx) + self.sample_at(x1, y1) * fx;
        top * (1.0 - fy) + bottom * fy
    }
}
