//! Sixteen-point gradient noise interpolated through centripetal Catmull-Rom
//! splines.
use glam::DVec2;

use crate::lattice::{PermutationTable, split_cell, wrap_cell};
use crate::sample_cache::{MIN_SAMPLES, SplineSampleCache};
use crate::source::Noise2D;
use crate::spline::SplineError;

/// Knot exponent of every spline built on the query path.
const CENTRIPETAL: f64 = 0.5;

/// Gradient noise that interpolates a 4×4 neighbourhood of lattice
/// contributions with five centripetal Catmull-Rom splines: one per row along
/// `x`, then one through the row results along `y`.
///
/// Removes the blocky pattern of [`GradientNoise`](crate::GradientNoise) at
/// the price of five spline and cache builds per query, and shows its own
/// faint grid lines. Unlike the bilinear variant it is not zero on lattice
/// points.
#[derive(Clone, Debug)]
pub struct SplineGradientNoise {
    table: PermutationTable,
    cache_size: usize,
}

impl SplineGradientNoise {
    /// `cache_size` is the number of samples per spline cache; values below 3
    /// are raised to 3.
    pub fn new(cache_size: usize, seed: u64) -> Self {
        if cache_size < MIN_SAMPLES {
            log::warn!("spline cache size {cache_size} raised to {MIN_SAMPLES}");
        }
        Self {
            table: PermutationTable::new(seed),
            cache_size: cache_size.max(MIN_SAMPLES),
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache_size
    }

    /// Full evaluation. Control points are always one unit apart in `x` and
    /// cell offsets stay fractional at any magnitude, so splines only fail to
    /// build for NaN or infinite coordinates.
    pub fn try_noise(&self, x: f64, y: f64) -> Result<f64, SplineError> {
        let (cell_x, rel_x) = split_cell(x);
        let (cell_y, rel_y) = split_cell(y);

        // Lower-left corner of the 4×4 neighbourhood around the query cell.
        let x0 = wrap_cell(cell_x.saturating_sub(1));
        let y0 = wrap_cell(cell_y.saturating_sub(1));
        let origin_x = x0 as f64;
        let origin_y = y0 as f64;

        let mut rows = [0.0; 4];
        for (row, value) in rows.iter_mut().enumerate() {
            let offset_y = rel_y - (row as f64 - 1.0);
            let controls: [DVec2; 4] = std::array::from_fn(|col| {
                let offset_x = rel_x - (col as f64 - 1.0);
                let contribution = self
                    .table
                    .gradient(x0 + col, y0 + row)
                    .dot(DVec2::new(offset_x, offset_y));
                DVec2::new(origin_x + col as f64, contribution)
            });

            let cache = self.cache(controls)?;
            // Keeps the piecewise-linear cache error from compounding in the
            // column pass.
            *value = cache.interpolate_x(origin_x + 1.0 + rel_x).clamp(-1.0, 1.0);
        }

        self.column_pass(rows, origin_y, rel_y)
    }

    /// Interpolates the four row results along `y`. The result is not clamped,
    /// so it can leave `[-1, 1]` even though every row value is inside it.
    fn column_pass(&self, rows: [f64; 4], origin_y: f64, rel_y: f64) -> Result<f64, SplineError> {
        let column: [DVec2; 4] =
            std::array::from_fn(|row| DVec2::new(origin_y + row as f64, rows[row]));
        Ok(self.cache(column)?.interpolate_x(origin_y + 1.0 + rel_y))
    }

    fn cache(&self, [p0, p1, p2, p3]: [DVec2; 4]) -> Result<SplineSampleCache, SplineError> {
        SplineSampleCache::from_points(self.cache_size, CENTRIPETAL, p0, p1, p2, p3)
    }
}

impl Noise2D for SplineGradientNoise {
    /// Returns NaN where [`try_noise`](Self::try_noise) fails, which only
    /// happens for non-finite coordinates.
    fn noise(&self, x: f64, y: f64) -> f64 {
        self.try_noise(x, y).unwrap_or(f64::NAN)
    }
}
