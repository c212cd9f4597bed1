//! Four-point Catmull-Rom spline with a tunable knot exponent.
//!
//! - `alpha = 0.0` uniform
//! - `alpha = 0.5` centripetal (no cusps or self-intersections within a segment)
//! - `alpha = 1.0` chordal
//!
//! Only the middle segment, from `p1` to `p2`, is evaluated.
use glam::DVec2;
use thiserror::Error;

/// Errors raised while building a spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Two consecutive knots coincide (or are not finite), so the blending
    /// weights would divide by zero.
    #[error("degenerate knot interval {index}: [{lower}, {upper}]")]
    DegenerateKnots {
        index: usize,
        lower: f64,
        upper: f64,
    },

    #[error("alpha must lie in [0, 1], got {0}")]
    InvalidAlpha(f64),
}

/// Catmull-Rom spline through `p0..p3`, parameterized by cumulative chord
/// length raised to `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRomSpline {
    alpha: f64,
    points: [DVec2; 4],
    t1: f64,
    t2: f64,
    t3: f64,
}

impl CatmullRomSpline {
    /// Builds the spline and its knots `0 <= t1 <= t2 <= t3`.
    ///
    /// Fails if any knot interval is empty, which happens when two consecutive
    /// control points coincide with `alpha > 0`.
    pub fn new(
        alpha: f64,
        p0: DVec2,
        p1: DVec2,
        p2: DVec2,
        p3: DVec2,
    ) -> Result<Self, SplineError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SplineError::InvalidAlpha(alpha));
        }

        let t1 = knot_step(p0, p1, alpha);
        let t2 = knot_step(p1, p2, alpha) + t1;
        let t3 = knot_step(p2, p3, alpha) + t2;

        let intervals = [(0.0, t1), (t1, t2), (t2, t3)];
        for (index, (lower, upper)) in intervals.into_iter().enumerate() {
            let span = upper - lower;
            if span.is_nan() || span <= 0.0 || !upper.is_finite() {
                return Err(SplineError::DegenerateKnots { index, lower, upper });
            }
        }

        Ok(Self {
            alpha,
            points: [p0, p1, p2, p3],
            t1,
            t2,
            t3,
        })
    }

    pub fn centripetal(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Result<Self, SplineError> {
        Self::new(0.5, p0, p1, p2, p3)
    }

    pub fn uniform(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Result<Self, SplineError> {
        Self::new(0.0, p0, p1, p2, p3)
    }

    pub fn chordal(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Result<Self, SplineError> {
        Self::new(1.0, p0, p1, p2, p3)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn points(&self) -> [DVec2; 4] {
        self.points
    }

    /// Parameter value at `p1`, the start of the usable segment.
    pub fn lower_t(&self) -> f64 {
        self.t1
    }

    /// Parameter value at `p2`, the end of the usable segment.
    pub fn upper_t(&self) -> f64 {
        self.t2
    }

    /// Point on the curve at parameter `t`.
    ///
    /// Meaningful for `t` in `[lower_t, upper_t]`; outside that range the
    /// result is an extrapolation with no guarantees.
    pub fn at(&self, t: f64) -> DVec2 {
        let [p0, p1, p2, p3] = self.points;

        let a1 = blend(p0, p1, 0.0, self.t1, t);
        let a2 = blend(p1, p2, self.t1, self.t2, t);
        let a3 = blend(p2, p3, self.t2, self.t3, t);

        let b1 = blend(a1, a2, 0.0, self.t2, t);
        let b2 = blend(a2, a3, self.t1, self.t3, t);

        blend(b1, b2, self.t1, self.t2, t)
    }
}

/// Distance between consecutive control points raised to `alpha`.
fn knot_step(from: DVec2, to: DVec2, alpha: f64) -> f64 {
    (to - from).length().powf(alpha)
}

/// One level of the pyramid: `a` at `t_lower`, `b` at `t_upper`.
#[inline]
fn blend(a: DVec2, b: DVec2, t_lower: f64, t_upper: f64, t: f64) -> DVec2 {
    let span = t_upper - t_lower;
    let lower = (t_upper - t) / span;
    let upper = (t - t_lower) / span;
    a * lower + b * upper
}
