//! 2D simplex noise.
use glam::DVec2;

use crate::lattice::{PermutationTable, wrap_cell};
use crate::source::Noise2D;

/// Factor taking input coordinates onto the skewed simplex grid, `(√3 − 1) / 2`.
#[inline]
fn to_simplex_grid() -> f64 {
    (3f64.sqrt() - 1.0) / 2.0
}

/// Factor taking simplex-grid coordinates back to input space, `(1/√3 − 1) / 2`.
/// Negative.
#[inline]
fn from_simplex_grid() -> f64 {
    (1.0 / 3f64.sqrt() - 1.0) / 2.0
}

/// Simplex noise over triangles.
///
/// Three corner contributions with radial falloff `(0.5 − d²)⁴` are summed. The
/// output is not rescaled, so typical magnitudes are a few hundredths.
#[derive(Clone, Debug)]
pub struct SimplexNoise {
    table: PermutationTable,
}

impl SimplexNoise {
    /// Same seed, same field.
    pub fn new(seed: u64) -> Self {
        Self {
            table: PermutationTable::new(seed),
        }
    }

    #[inline]
    fn corner(&self, ix: usize, iy: usize, offset: DVec2) -> f64 {
        let t = 0.5 - offset.x * offset.x - offset.y * offset.y;
        if t > 0.0 {
            t * t * t * t * self.table.gradient(ix, iy).dot(offset)
        } else {
            0.0
        }
    }
}

impl Noise2D for SimplexNoise {
    fn noise(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * to_simplex_grid();
        let floor_x = (x + skew).floor();
        let floor_y = (y + skew).floor();

        // Cells stay in floating point here; their integer forms saturate.
        let unskew = from_simplex_grid();
        let origin_shift = (floor_x + floor_y) * unskew;
        let first = DVec2::new(
            x - (floor_x + origin_shift),
            y - (floor_y + origin_shift),
        );

        // Lower triangle steps along x first, upper triangle along y.
        let (unit_x, unit_y) = if first.x > first.y { (1, 0) } else { (0, 1) };

        let middle = DVec2::new(
            first.x - unit_x as f64 - unskew,
            first.y - unit_y as f64 - unskew,
        );
        let last = DVec2::new(first.x - 1.0 - 2.0 * unskew, first.y - 1.0 - 2.0 * unskew);

        let i = wrap_cell(floor_x as i64);
        let j = wrap_cell(floor_y as i64);

        let c0 = self.corner(i, j, first);
        let c1 = self.corner(i + unit_x, j + unit_y, middle);
        let c2 = self.corner(i + 1, j + 1, last);
        c0 + c1 + c2
    }
}
