//! The one capability every generator exposes.
use std::sync::Arc;

/// A deterministic scalar field over the plane.
///
/// The same instance always returns the same value for the same point, and
/// queries never mutate the instance, so one source can be sampled from many
/// threads at once.
pub trait Noise2D: Send + Sync {
    /// Sample the field at `(x, y)`.
    fn noise(&self, x: f64, y: f64) -> f64;

    /// Sample and remap `[-1, 1]` onto `[0, 1]`. Values outside `[-1, 1]` stay
    /// outside `[0, 1]`; no clamping is applied.
    fn noise_01(&self, x: f64, y: f64) -> f64 {
        (self.noise(x, y) + 1.0) * 0.5
    }
}

impl<N: Noise2D + ?Sized> Noise2D for &N {
    #[inline]
    fn noise(&self, x: f64, y: f64) -> f64 {
        (**self).noise(x, y)
    }
}

impl<N: Noise2D + ?Sized> Noise2D for Box<N> {
    #[inline]
    fn noise(&self, x: f64, y: f64) -> f64 {
        (**self).noise(x, y)
    }
}

impl<N: Noise2D + ?Sized> Noise2D for Arc<N> {
    #[inline]
    fn noise(&self, x: f64, y: f64) -> f64 {
        (**self).noise(x, y)
    }
}
