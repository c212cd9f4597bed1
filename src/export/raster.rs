//! Parallel grid sampling.
use rayon::prelude::*;

use super::{ExportError, SampleGrid};
use crate::source::Noise2D;

/// A sampled grid, row-major with row 0 first, plus its value range.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledField {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f64>,
    /// `+inf` if no finite sample was seen.
    pub min: f64,
    /// `-inf` if no finite sample was seen.
    pub max: f64,
}

impl SampledField {
    pub fn get(&self, col: u32, row: u32) -> f64 {
        self.values[row as usize * self.width as usize + col as usize]
    }
}

/// One row's samples and local extremes.
struct RowSamples {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

/// Samples `source` over `grid`, one rayon task per row.
///
/// Rows are independent; each reports its own min/max and the results are
/// merged only after every row has finished. Invalid dimensions are rejected
/// before any task is spawned.
pub fn sample_field<S>(source: &S, grid: &SampleGrid) -> Result<SampledField, ExportError>
where
    S: Noise2D + ?Sized,
{
    let (width, height) = grid.dimensions()?;

    let rows: Vec<RowSamples> = (0..height)
        .into_par_iter()
        .map(|row| {
            let values: Vec<f64> = (0..width)
                .map(|col| {
                    let p = grid.point(col, row);
                    source.noise(p.x, p.y)
                })
                .collect();
            let (min, max) = min_max(&values);
            RowSamples { values, min, max }
        })
        .collect();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut values = Vec::with_capacity(width as usize * height as usize);
    for row in rows {
        min = min.min(row.min);
        max = max.max(row.max);
        values.extend(row.values);
    }

    log::debug!("sampled {width}x{height} grid, range [{min}, {max}]");
    Ok(SampledField {
        width,
        height,
        values,
        min,
        max,
    })
}

/// NaN samples are ignored.
fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradientNoise;
    use glam::DVec2;

    struct Ramp;

    impl Noise2D for Ramp {
        fn noise(&self, x: f64, y: f64) -> f64 {
            x + 10.0 * y
        }
    }

    #[test]
    fn rows_are_joined_in_order() {
        let grid = SampleGrid::new(DVec2::new(1.0, 2.0), 0.5, 3, 4);
        let field = sample_field(&Ramp, &grid).unwrap();
        assert_eq!((field.width, field.height), (3, 4));
        assert_eq!(field.values.len(), 12);
        assert_eq!(field.get(0, 0), 21.0);
        assert_eq!(field.get(2, 0), 22.0);
        assert_eq!(field.get(0, 3), 36.0);
        assert_eq!(field.min, 21.0);
        assert_eq!(field.max, 37.0);
    }

    #[test]
    fn rejects_non_positive_counts() {
        for (sx, sy) in [(0, 10), (10, 0), (-3, 10), (10, -1)] {
            let grid = SampleGrid::new(DVec2::ZERO, 0.1, sx, sy);
            let err = sample_field(&Ramp, &grid).unwrap_err();
            assert!(matches!(err, ExportError::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn rejection_happens_before_sampling() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct Counting(AtomicUsize);
        impl Noise2D for Counting {
            fn noise(&self, _: f64, _: f64) -> f64 {
                self.0.fetch_add(1, Ordering::Relaxed);
                0.0
            }
        }

        let counting = Counting(AtomicUsize::new(0));
        let grid = SampleGrid::new(DVec2::ZERO, 1.0, 5, 0);
        assert!(sample_field(&counting, &grid).is_err());
        assert_eq!(counting.0.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn parallel_sampling_matches_sequential() {
        let noise = GradientNoise::new(42);
        let grid = SampleGrid::new(DVec2::new(-100.0, -100.0), 0.137, 40, 30);
        let field = sample_field(&noise, &grid).unwrap();
        for row in 0..30 {
            for col in 0..40 {
                let p = grid.point(col, row);
                assert_eq!(field.get(col, row), noise.noise(p.x, p.y));
            }
        }
    }
}
