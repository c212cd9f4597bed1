//! Normalized 16-bit greyscale PNG output.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ImageBuffer, Luma};

use super::raster::{SampledField, sample_field};
use super::{ExportError, ExportSummary, SampleGrid};
use crate::lattice::lerp;
use crate::source::Noise2D;

/// Samples `source` over `grid` and writes the result to `writer` as a
/// greyscale PNG, stretched so the smallest sample is black and the largest is
/// white.
///
/// Row sampling runs in parallel; normalization and encoding run once all rows
/// are in. A field with no spread renders black.
pub fn write_grey_png<W, S>(
    writer: W,
    source: &S,
    grid: &SampleGrid,
) -> Result<ExportSummary, ExportError>
where
    W: Write,
    S: Noise2D + ?Sized,
{
    let field = sample_field(source, grid)?;
    let image = to_grey16(&field);
    image.write_with_encoder(PngEncoder::new(writer))?;

    log::info!(
        "encoded {}x{} greyscale image, range [{}, {}]",
        field.width,
        field.height,
        field.min,
        field.max
    );
    Ok(ExportSummary {
        width: field.width,
        height: field.height,
        origin: grid.origin.to_array(),
        step: grid.step,
        min: field.min,
        max: field.max,
    })
}

/// [`write_grey_png`] into a newly created file at `path`.
pub fn save_grey_png<S>(
    path: impl AsRef<Path>,
    source: &S,
    grid: &SampleGrid,
) -> Result<ExportSummary, ExportError>
where
    S: Noise2D + ?Sized,
{
    // Validate before touching the filesystem.
    grid.dimensions()?;
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    let summary = write_grey_png(&mut writer, source, grid)?;
    writer.flush()?;
    Ok(summary)
}

/// Stretches the field over the full `u16` range; image row 0 is the top, so
/// field rows are flipped.
fn to_grey16(field: &SampledField) -> ImageBuffer<Luma<u16>, Vec<u16>> {
    let range = field.max - field.min;
    let height = field.height;
    ImageBuffer::from_fn(field.width, height, |x, y| {
        let value = field.get(x, height - 1 - y);
        let frac = if range > 0.0 {
            (value - field.min) / range
        } else {
            0.0
        };
        Luma([lerp(0.0, u16::MAX as f64, frac) as u16])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    struct Constant(f64);

    impl Noise2D for Constant {
        fn noise(&self, _: f64, _: f64) -> f64 {
            self.0
        }
    }

    struct Vertical;

    impl Noise2D for Vertical {
        fn noise(&self, _: f64, y: f64) -> f64 {
            y
        }
    }

    #[test]
    fn constant_field_is_black() {
        let grid = SampleGrid::new(DVec2::ZERO, 1.0, 4, 4);
        let field = sample_field(&Constant(0.3), &grid).unwrap();
        let image = to_grey16(&field);
        assert!(image.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn rows_are_flipped_and_stretched() {
        let grid = SampleGrid::new(DVec2::ZERO, 1.0, 2, 3);
        let field = sample_field(&Vertical, &grid).unwrap();
        let image = to_grey16(&field);
        // Field row 0 (smallest y) lands on the bottom image row.
        assert_eq!(image.get_pixel(0, 2).0[0], 0);
        assert_eq!(image.get_pixel(1, 1).0[0], 32767);
        assert_eq!(image.get_pixel(0, 0).0[0], u16::MAX);
    }

    #[test]
    fn writes_png_bytes() {
        let grid = SampleGrid::new(DVec2::new(-2.0, -2.0), 0.25, 16, 8);
        let mut bytes = Vec::new();
        let summary = write_grey_png(&mut bytes, &Vertical, &grid).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!((summary.width, summary.height), (16, 8));
        assert_eq!(summary.min, -2.0);
        assert_eq!(summary.max, -0.25);
    }

    #[test]
    fn invalid_grid_writes_nothing() {
        let grid = SampleGrid::new(DVec2::ZERO, 1.0, 0, 8);
        let mut bytes = Vec::new();
        let err = write_grey_png(&mut bytes, &Vertical, &grid).unwrap_err();
        assert!(matches!(err, ExportError::InvalidDimensions { .. }));
        assert!(bytes.is_empty());
    }
}
