//! Fractal noise from layered octaves.
use crate::source::Noise2D;

/// Frequency growth per octave.
pub const LACUNARITY: f64 = 2.0;

/// Sums child sources at doubling frequencies and geometrically decaying
/// amplitudes:
///
/// `noise(x, y) = Σᵢ octaveᵢ(x·2ⁱ, y·2ⁱ) · persistenceⁱ`
///
/// Octaves are applied in insertion order, so later octaves get the higher
/// frequencies. With identical children and a persistence of one half this is
/// the usual pink / fractal noise. The sum is not renormalized.
pub struct OctaveNoise {
    persistence: f64,
    octaves: Vec<Box<dyn Noise2D>>,
}

impl OctaveNoise {
    /// Empty composition; a typical persistence is around `0.5`.
    pub fn new(persistence: f64) -> Self {
        Self {
            persistence,
            octaves: Vec::with_capacity(2),
        }
    }

    /// Appends the next (higher-frequency) octave.
    pub fn add_octave(&mut self, octave: impl Noise2D + 'static) {
        self.octaves.push(Box::new(octave));
    }

    /// Builder form of [`add_octave`](Self::add_octave).
    pub fn with_octave(mut self, octave: impl Noise2D + 'static) -> Self {
        self.add_octave(octave);
        self
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn len(&self) -> usize {
        self.octaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octaves.is_empty()
    }

    /// Sum of the amplitudes of all octaves; divide by it to bring the output
    /// back into the children's range.
    pub fn amplitude_sum(&self) -> f64 {
        let mut amplitude = 1.0;
        let mut sum = 0.0;
        for _ in &self.octaves {
            sum += amplitude;
            amplitude *= self.persistence;
        }
        sum
    }
}

impl std::fmt::Debug for OctaveNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctaveNoise")
            .field("persistence", &self.persistence)
            .field("octaves", &self.octaves.len())
            .finish()
    }
}

impl Noise2D for OctaveNoise {
    fn noise(&self, x: f64, y: f64) -> f64 {
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for octave in &self.octaves {
            total += octave.noise(x * frequency, y * frequency) * amplitude;
            frequency *= LACUNARITY;
            amplitude *= self.persistence;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GradientNoise, SimplexNoise, SplineGradientNoise};

    #[test]
    fn single_octave_is_the_child() {
        let child = GradientNoise::new(42);
        for persistence in [0.0, 0.5, 1.0, 3.0, -2.0] {
            let octaves = OctaveNoise::new(persistence).with_octave(GradientNoise::new(42));
            for i in 0..50 {
                let (x, y) = (i as f64 * 0.31, i as f64 * -0.17);
                assert_eq!(octaves.noise(x, y), child.noise(x, y));
            }
        }
    }

    #[test]
    fn empty_composition_is_zero() {
        let octaves = OctaveNoise::new(0.5);
        assert!(octaves.is_empty());
        assert_eq!(octaves.noise(1.3, 2.7), 0.0);
    }

    #[test]
    fn octaves_scale_frequency_and_amplitude() {
        let octaves = OctaveNoise::new(0.5)
            .with_octave(SimplexNoise::new(1))
            .with_octave(SimplexNoise::new(2))
            .with_octave(SimplexNoise::new(3));
        let (x, y) = (0.8, -1.35);
        let expected = SimplexNoise::new(1).noise(x, y)
            + SimplexNoise::new(2).noise(x * 2.0, y * 2.0) * 0.5
            + SimplexNoise::new(3).noise(x * 4.0, y * 4.0) * 0.25;
        assert_eq!(octaves.noise(x, y), expected);
    }

    #[test]
    fn insertion_order_matters() {
        let ab = OctaveNoise::new(0.5)
            .with_octave(GradientNoise::new(1))
            .with_octave(GradientNoise::new(2));
        let ba = OctaveNoise::new(0.5)
            .with_octave(GradientNoise::new(2))
            .with_octave(GradientNoise::new(1));
        let differs = (0..20).any(|i| {
            let p = 0.37 + i as f64 * 0.53;
            ab.noise(p, p * 0.5) != ba.noise(p, p * 0.5)
        });
        assert!(differs);
    }

    #[test]
    fn amplitude_sum_is_geometric() {
        let mut octaves = OctaveNoise::new(0.5);
        for _ in 0..4 {
            octaves.add_octave(SplineGradientNoise::new(3, 7));
        }
        assert_eq!(octaves.len(), 4);
        assert_eq!(octaves.amplitude_sum(), 1.875);
    }

    #[test]
    fn compositions_nest() {
        let inner = OctaveNoise::new(0.5).with_octave(GradientNoise::new(4));
        let outer = OctaveNoise::new(0.25).with_octave(inner);
        assert_eq!(outer.noise(0.3, 0.9), GradientNoise::new(4).noise(0.3, 0.9));
    }
}
