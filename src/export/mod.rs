//! Raster export: sample a field on a grid and write it out.
//!
//! - [`raster`] fans rows out over the rayon pool and joins their min/max.
//! - [`png`] normalizes a sampled field to 16-bit grey and encodes it.
//! - [`json`] writes the run summary next to the image.
use glam::DVec2;
use serde::Serialize;
use thiserror::Error;

pub mod json;
pub mod png;
pub mod raster;

pub use json::write_summary;
pub use png::{save_grey_png, write_grey_png};
pub use raster::{SampledField, sample_field};

/// Errors from sampling or writing a raster.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Rejected before any sampling starts.
    #[error("invalid dimensions: {samples_x} x {samples_y} samples")]
    InvalidDimensions { samples_x: i64, samples_y: i64 },

    #[error("sample step must be finite, got {0}")]
    InvalidStep(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where and how densely to sample.
///
/// Sample `(col, row)` is taken at `origin + (col, row) * step`. Row 0 ends up
/// at the bottom of the written image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    pub origin: DVec2,
    pub step: f64,
    pub samples_x: i64,
    pub samples_y: i64,
}

impl SampleGrid {
    pub fn new(origin: DVec2, step: f64, samples_x: i64, samples_y: i64) -> Self {
        Self {
            origin,
            step,
            samples_x,
            samples_y,
        }
    }

    /// Image dimensions, or an error for non-positive or oversized counts.
    pub fn dimensions(&self) -> Result<(u32, u32), ExportError> {
        let invalid = || ExportError::InvalidDimensions {
            samples_x: self.samples_x,
            samples_y: self.samples_y,
        };
        if self.samples_x <= 0 || self.samples_y <= 0 {
            return Err(invalid());
        }
        if !self.step.is_finite() {
            return Err(ExportError::InvalidStep(self.step));
        }
        let width = u32::try_from(self.samples_x).map_err(|_| invalid())?;
        let height = u32::try_from(self.samples_y).map_err(|_| invalid())?;
        Ok((width, height))
    }

    /// Noise-space point of sample `(col, row)`.
    #[inline]
    pub fn point(&self, col: u32, row: u32) -> DVec2 {
        self.origin + DVec2::new(col as f64, row as f64) * self.step
    }
}

/// What an export produced, serialized next to the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportSummary {
    pub width: u32,
    pub height: u32,
    pub origin: [f64; 2],
    pub step: f64,
    /// Smallest sampled value, mapped to black.
    pub min: f64,
    /// Largest sampled value, mapped to white.
    pub max: f64,
}
