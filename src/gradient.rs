//! Four-corner gradient noise with quintic fading.
use glam::DVec2;

use crate::lattice::{PermutationTable, fade, lerp, split_cell, wrap_cell};
use crate::source::Noise2D;

/// Classic 2D gradient noise.
///
/// Each lattice corner gets one of the twelve unit gradients through the seeded
/// hash; the four corner contributions are blended bilinearly with faded
/// weights. Fast, zero at every integer lattice point, and prone to a faint
/// axis-aligned pattern at low frequencies.
#[derive(Clone, Debug)]
pub struct GradientNoise {
    table: PermutationTable,
}

impl GradientNoise {
    /// Same seed, same field.
    pub fn new(seed: u64) -> Self {
        Self {
            table: PermutationTable::new(seed),
        }
    }
}

impl Noise2D for GradientNoise {
    fn noise(&self, x: f64, y: f64) -> f64 {
        let (cell_x, rel_x) = split_cell(x);
        let (cell_y, rel_y) = split_cell(y);

        let x0 = wrap_cell(cell_x);
        let y0 = wrap_cell(cell_y);

        let n00 = self.table.gradient(x0, y0).dot(DVec2::new(rel_x, rel_y));
        let n10 = self.table.gradient(x0 + 1, y0).dot(DVec2::new(rel_x - 1.0, rel_y));
        let n01 = self.table.gradient(x0, y0 + 1).dot(DVec2::new(rel_x, rel_y - 1.0));
        let n11 = self
            .table
            .gradient(x0 + 1, y0 + 1)
            .dot(DVec2::new(rel_x - 1.0, rel_y - 1.0));

        let fade_x = fade(rel_x);
        let fade_y = fade(rel_y);

        let nx0 = lerp(n00, n10, fade_x);
        let nx1 = lerp(n01, n11, fade_x);
        lerp(nx0, nx1, fade_y)
    }
}
