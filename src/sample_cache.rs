//! Precomputed samples of a spline's middle segment, queried by `x`.
use glam::DVec2;

use crate::spline::{CatmullRomSpline, SplineError};

/// Fewest samples a cache will hold.
pub const MIN_SAMPLES: usize = 3;

/// Evenly-`t`-spaced samples of a [`CatmullRomSpline`] over `[lower_t, upper_t]`.
///
/// Lookups treat the curve as a function of `x`: [`interpolate_x`] finds the
/// bracketing pair by binary search and interpolates linearly between them.
/// That is only meaningful if the sampled `x` values never decrease, which the
/// caller must guarantee (it is not checked). Loops, vertical runs and other
/// curves that are not functions of `x` give arbitrary results.
///
/// [`interpolate_x`]: SplineSampleCache::interpolate_x
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSampleCache {
    samples: Vec<DVec2>,
}

impl SplineSampleCache {
    /// Samples `spline` at `samples` evenly spaced parameter values, both ends
    /// included. Requests below [`MIN_SAMPLES`] are raised to it.
    pub fn new(spline: &CatmullRomSpline, samples: usize) -> Self {
        let count = samples.max(MIN_SAMPLES);
        let lower = spline.lower_t();
        let upper = spline.upper_t();
        let delta = (upper - lower) / (count - 1) as f64;

        let samples = (0..count)
            .map(|i| {
                // Pin the last sample so accumulated rounding never skips `upper`.
                let t = if i == count - 1 {
                    upper
                } else {
                    lower + delta * i as f64
                };
                spline.at(t)
            })
            .collect();

        Self { samples }
    }

    /// Builds the spline and its cache in one step.
    pub fn from_points(
        samples: usize,
        alpha: f64,
        p0: DVec2,
        p1: DVec2,
        p2: DVec2,
        p3: DVec2,
    ) -> Result<Self, SplineError> {
        let spline = CatmullRomSpline::new(alpha, p0, p1, p2, p3)?;
        Ok(Self::new(&spline, samples))
    }

    pub fn centripetal(
        samples: usize,
        p0: DVec2,
        p1: DVec2,
        p2: DVec2,
        p3: DVec2,
    ) -> Result<Self, SplineError> {
        Self::from_points(samples, 0.5, p0, p1, p2, p3)
    }

    pub fn uniform(
        samples: usize,
        p0: DVec2,
        p1: DVec2,
        p2: DVec2,
        p3: DVec2,
    ) -> Result<Self, SplineError> {
        Self::from_points(samples, 0.0, p0, p1, p2, p3)
    }

    pub fn chordal(
        samples: usize,
        p0: DVec2,
        p1: DVec2,
        p2: DVec2,
        p3: DVec2,
    ) -> Result<Self, SplineError> {
        Self::from_points(samples, 1.0, p0, p1, p2, p3)
    }

    pub fn samples(&self) -> &[DVec2] {
        &self.samples
    }

    /// Estimated `y` on the curve at `x`.
    ///
    /// Finds `i` with `samples[i].x <= x < samples[i + 1].x` and interpolates
    /// linearly. Below the first sample this returns the first `y`; at or past
    /// the last sample it returns the last `y`. Never extrapolates.
    pub fn interpolate_x(&self, x: f64) -> f64 {
        // Count of samples with `sample.x <= x`.
        let idx = self.samples.partition_point(|s| s.x <= x);
        match idx {
            0 => self.samples[0].y,
            n if n == self.samples.len() => self.samples[n - 1].y,
            n => {
                let a = self.samples[n - 1];
                let b = self.samples[n];
                a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x)
            }
        }
    }
}
