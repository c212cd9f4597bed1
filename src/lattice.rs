//! Lattice primitives shared by every generator: the gradient table, the seeded
//! permutation table and the small numeric helpers used on the query path.
use glam::DVec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Number of distinct lattice hashes before the pattern repeats.
/// Must stay a power of two, see [`PermutationTable::new`].
pub const HASH_SIZE: usize = 2048 * 4;

/// Twelve unit vectors spaced `π/6` apart on the unit circle, starting at `(1, 0)`.
///
/// The values are `(cos(kπ/6), sin(kπ/6))` for `k = 0..12` as produced by the
/// platform `cos`/`sin`, kept as literals so the table is plain constant data.
pub const GRADIENTS: [DVec2; 12] = [
    DVec2::new(1.0, 0.0),
    DVec2::new(0.8660254037844387, 0.49999999999999994),
    DVec2::new(0.5000000000000001, 0.8660254037844386),
    DVec2::new(6.123233995736766e-17, 1.0),
    DVec2::new(-0.4999999999999998, 0.8660254037844387),
    DVec2::new(-0.8660254037844385, 0.5000000000000003),
    DVec2::new(-1.0, 1.2246467991473532e-16),
    DVec2::new(-0.8660254037844388, -0.4999999999999997),
    DVec2::new(-0.5000000000000004, -0.8660254037844384),
    DVec2::new(-1.8369701987210297e-16, -1.0),
    DVec2::new(0.49999999999999933, -0.866025403784439),
    DVec2::new(0.8660254037844384, -0.5000000000000004),
];

/// Seeded table of pseudo-random lattice hashes in `[0, HASH_SIZE)`.
///
/// The sequence is stored twice so that `table[i + table[j]]` never needs a
/// modulo for `i, j < HASH_SIZE`. Built once, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    values: Vec<u16>,
}

impl PermutationTable {
    /// Builds the table for `seed`. Identical seeds always give identical tables.
    ///
    /// Each entry is `next_u32() % HASH_SIZE` from a PCG32 stream. Because
    /// `HASH_SIZE` is a power of two the reduction is unbiased, and the table only
    /// depends on the PCG32 output sequence, which `rand_pcg` keeps value-stable.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut values: Vec<u16> = Vec::with_capacity(HASH_SIZE * 2);
        for _ in 0..HASH_SIZE {
            values.push((rng.next_u32() % HASH_SIZE as u32) as u16);
        }
        values.extend_from_within(..);
        log::debug!("built permutation table for seed {seed}");
        Self { values }
    }

    /// Number of stored entries (`2 * HASH_SIZE`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Hash lookup. Indices past the end wrap around.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.values[index % self.values.len()] as usize
    }

    /// Index into [`GRADIENTS`] for the lattice point `(ix, iy)`.
    ///
    /// `ix` and `iy` are expected to be already reduced by [`wrap_cell`] (plus a
    /// small neighbourhood offset).
    #[inline]
    pub fn gradient_index(&self, ix: usize, iy: usize) -> usize {
        self.get(ix + self.get(iy)) % GRADIENTS.len()
    }

    /// Gradient vector for the lattice point `(ix, iy)`.
    #[inline]
    pub fn gradient(&self, ix: usize, iy: usize) -> DVec2 {
        GRADIENTS[self.gradient_index(ix, iy)]
    }
}

/// Reduces a lattice coordinate into `[0, HASH_SIZE)`, wrapping negatives.
#[inline]
pub fn wrap_cell(cell: i64) -> usize {
    cell.rem_euclid(HASH_SIZE as i64) as usize
}

/// Integer lattice cell containing `v`, and `v`'s offset from that cell.
///
/// The offset is measured from the float floor, so it stays within the unit
/// cell even where the integer cell saturates at the `i64` range.
#[inline]
pub fn split_cell(v: f64) -> (i64, f64) {
    let floor = v.floor();
    (floor as i64, v - floor)
}

/// Quintic fade `6t⁵ − 15t⁴ + 10t³`; first and second derivatives vanish at 0 and 1.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation with `t` in `[0, 1]`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}
