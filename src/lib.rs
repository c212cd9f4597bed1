//! Seed-reproducible 2D noise.
//!
//! Three generators share one hashed gradient lattice:
//!
//! - [`GradientNoise`]: fast four-corner gradient noise with quintic fading.
//!   Zero on every lattice point; can betray the square lattice.
//! - [`SplineGradientNoise`]: sixteen-point gradient noise interpolated through
//!   centripetal Catmull-Rom splines. Slow, hides the square pattern, shows
//!   faint grid lines of its own.
//! - [`SimplexNoise`]: triangle-based noise.
//!
//! [`OctaveNoise`] stacks any of them (or any other [`Noise2D`]) into fractal
//! noise. Equal seeds always give equal fields.
//!
//! ```
//! use seeded_noise::{GradientNoise, Noise2D, OctaveNoise};
//!
//! let pink = OctaveNoise::new(0.5)
//!     .with_octave(GradientNoise::new(1))
//!     .with_octave(GradientNoise::new(1));
//! let v = pink.noise(0.5, 0.5);
//! assert_eq!(v, pink.noise(0.5, 0.5));
//! ```
pub mod config;
pub mod export;
pub mod gradient;
pub mod interop;
pub mod lattice;
pub mod octave;
pub mod sample_cache;
pub mod simplex;
pub mod source;
pub mod spline;
pub mod spline_gradient;

pub use gradient::GradientNoise;
pub use interop::NoiseFnSource;
pub use octave::OctaveNoise;
pub use sample_cache::SplineSampleCache;
pub use simplex::SimplexNoise;
pub use source::Noise2D;
pub use spline::{CatmullRomSpline, SplineError};
pub use spline_gradient::SplineGradientNoise;
