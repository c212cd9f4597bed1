//! Render configuration, loadable from JSON.
use std::fmt;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::export::SampleGrid;
use crate::{GradientNoise, Noise2D, OctaveNoise, SimplexNoise, SplineGradientNoise};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which generator fills each octave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Four-corner gradient noise.
    #[default]
    Classic,
    /// Sixteen-point gradient noise through Catmull-Rom splines.
    Spline,
    Simplex,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeneratorKind::Classic => "classic",
            GeneratorKind::Spline => "spline",
            GeneratorKind::Simplex => "simplex",
        };
        f.write_str(s)
    }
}

/// Everything needed to build a source and sample it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub generator: GeneratorKind,
    pub seed: u64,
    /// Samples per spline cache; only used by [`GeneratorKind::Spline`].
    pub spline_cache_size: usize,
    /// Number of octaves; 1 renders the bare generator.
    pub octaves: u32,
    pub persistence: f64,
    /// Noise-space point of the first sample.
    pub origin: [f64; 2],
    /// Distance between neighbouring samples in noise space.
    pub step: f64,
    pub samples_x: i64,
    pub samples_y: i64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::Classic,
            seed: 42,
            spline_cache_size: 3,
            octaves: 1,
            persistence: 0.5,
            origin: [-100.0, -100.0],
            step: 0.137,
            samples_x: 200,
            samples_y: 200,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.octaves == 0 {
            return Err(ConfigError::Invalid("octaves must be at least 1".into()));
        }
        if self.samples_x <= 0 || self.samples_y <= 0 {
            return Err(ConfigError::Invalid(format!(
                "sample counts must be positive, got {} x {}",
                self.samples_x, self.samples_y
            )));
        }
        if !self.step.is_finite() || self.step == 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step must be finite and non-zero, got {}",
                self.step
            )));
        }
        if !self.persistence.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "persistence must be finite, got {}",
                self.persistence
            )));
        }
        Ok(())
    }

    /// The configured generator, wrapped in an [`OctaveNoise`] of identically
    /// seeded copies when more than one octave is requested.
    pub fn build_source(&self) -> Box<dyn Noise2D> {
        if self.octaves == 1 {
            return self.generator();
        }
        let mut octaves = OctaveNoise::new(self.persistence);
        for _ in 0..self.octaves {
            octaves.add_octave(self.generator());
        }
        Box::new(octaves)
    }

    fn generator(&self) -> Box<dyn Noise2D> {
        match self.generator {
            GeneratorKind::Classic => Box::new(GradientNoise::new(self.seed)),
            GeneratorKind::Spline => {
                Box::new(SplineGradientNoise::new(self.spline_cache_size, self.seed))
            }
            GeneratorKind::Simplex => Box::new(SimplexNoise::new(self.seed)),
        }
    }

    pub fn grid(&self) -> SampleGrid {
        SampleGrid::new(
            DVec2::from_array(self.origin),
            self.step,
            self.samples_x,
            self.samples_y,
        )
    }
}
