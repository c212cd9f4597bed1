//! Bridges to the [`noise`] crate.
//!
//! Every generator here is usable wherever noise-rs expects a
//! `NoiseFn<f64, 2>`, and any noise-rs 2D function can be sampled (or stacked
//! into an [`OctaveNoise`]) through [`NoiseFnSource`].
use noise::NoiseFn;

use crate::gradient::GradientNoise;
use crate::octave::OctaveNoise;
use crate::simplex::SimplexNoise;
use crate::source::Noise2D;
use crate::spline_gradient::SplineGradientNoise;

macro_rules! impl_noise_fn {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NoiseFn<f64, 2> for $ty {
                #[inline]
                fn get(&self, [x, y]: [f64; 2]) -> f64 {
                    Noise2D::noise(self, x, y)
                }
            }
        )*
    };
}

impl_noise_fn!(GradientNoise, SplineGradientNoise, SimplexNoise, OctaveNoise);

/// Adapts a noise-rs function to [`Noise2D`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NoiseFnSource<F>(pub F);

impl<F> Noise2D for NoiseFnSource<F>
where
    F: NoiseFn<f64, 2> + Send + Sync,
{
    #[inline]
    fn noise(&self, x: f64, y: f64) -> f64 {
        self.0.get([x, y])
    }
}
