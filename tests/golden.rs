//! Reference values that pin the seeded output across releases.
use seeded_noise::lattice::PermutationTable;
use seeded_noise::{GradientNoise, Noise2D, OctaveNoise, SimplexNoise, SplineGradientNoise};

const EPS: f64 = 1e-12;

const POINTS: [(f64, f64); 4] = [(0.5, 0.5), (-3.25, 7.75), (12.3, -4.6), (100.125, -250.5)];

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: got {actual:.17}, expected {expected:.17}"
    );
}

#[test]
fn permutation_table_prefix_for_seed_42() {
    let table = PermutationTable::new(42);
    let prefix: Vec<usize> = (0..8).map(|i| table.get(i)).collect();
    assert_eq!(prefix, [4656, 7492, 4270, 3396, 8126, 7053, 6098, 6255]);
}

#[test]
fn classic_seed_42() {
    let noise = GradientNoise::new(42);
    let expected = [
        0.0915063509461097,
        -0.3488251630479134,
        -0.12668199680109346,
        -0.13947146961663115,
    ];
    for ((x, y), e) in POINTS.into_iter().zip(expected) {
        assert_close(noise.noise(x, y), e, &format!("classic({x}, {y})"));
    }
}

#[test]
fn simplex_seed_42() {
    let noise = SimplexNoise::new(42);
    let expected = [
        -0.004387950194674523,
        0.004039130287635298,
        -0.005882795589604935,
        0.0048433225562935275,
    ];
    for ((x, y), e) in POINTS.into_iter().zip(expected) {
        assert_close(noise.noise(x, y), e, &format!("simplex({x}, {y})"));
    }
}

#[test]
fn spline_seed_42_cache_16() {
    let noise = SplineGradientNoise::new(16, 42);
    let expected = [
        0.1655102786472929,
        -0.3970959408993782,
        -0.02295882650206274,
        -0.24126971939299094,
    ];
    for ((x, y), e) in POINTS.into_iter().zip(expected) {
        assert_close(noise.noise(x, y), e, &format!("spline16({x}, {y})"));
    }
}

#[test]
fn spline_seed_42_cache_3() {
    let noise = SplineGradientNoise::new(3, 42);
    let expected = [
        0.1729421270911328,
        -0.40810372006817697,
        -0.0650456549810195,
        -0.2234937454829576,
    ];
    for ((x, y), e) in POINTS.into_iter().zip(expected) {
        assert_close(noise.noise(x, y), e, &format!("spline3({x}, {y})"));
    }
}

#[test]
fn undersized_cache_behaves_like_minimum() {
    let tiny = SplineGradientNoise::new(1, 42);
    let minimum = SplineGradientNoise::new(3, 42);
    for (x, y) in POINTS {
        assert_eq!(tiny.noise(x, y), minimum.noise(x, y));
    }
}

#[test]
fn seed_7() {
    let (x, y) = (2.75, -1.5);
    assert_close(
        SplineGradientNoise::new(8, 7).noise(x, y),
        -0.6606512706860826,
        "spline8",
    );
    assert_close(GradientNoise::new(7).noise(x, y), -0.5596214257509377, "classic");
    assert_close(SimplexNoise::new(7).noise(x, y), -0.003525386230140394, "simplex");
}

#[test]
fn two_octaves_follow_the_weighted_sum() {
    let (x, y) = (0.5, 0.5);
    let base = GradientNoise::new(42);
    let octaves = OctaveNoise::new(0.5)
        .with_octave(GradientNoise::new(42))
        .with_octave(GradientNoise::new(42));
    let expected = base.noise(x, y) + 0.5 * base.noise(2.0 * x, 2.0 * y);
    assert_close(octaves.noise(x, y), expected, "octaves");
}
