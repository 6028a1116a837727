//! Easing curves.
//!
//! Curves are data, not bare function pointers, so descriptors stay
//! serializable and two curves can be blended (see [`Ease::blend`]).
//! Cubic-bezier evaluation inverts the x polynomial via binary search.

use serde::{Deserialize, Serialize};

/// A normalized progress-to-progress shaping curve.
///
/// `evaluate` maps t in [0,1] to an output that is 0 at t=0 and 1 at t=1
/// for every built-in variant; `Bezier` follows whatever control points it
/// was given.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// The classic CSS-style "ease": cubic-bezier(0.42, 0, 1, 1).
    Ease,
    /// Quadratic ease-in (t^2).
    Quad,
    /// Cubic ease-in (t^3).
    Cubic,
    /// Arbitrary cubic-bezier timing, control points [x1, y1, x2, y2].
    Bezier([f32; 4]),
    /// Pointwise mean of two curves. Produced by descriptor merging.
    Blend(Box<Ease>, Box<Ease>),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

impl Ease {
    /// Evaluate the curve at normalized progress `t` (clamped to [0,1]).
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Ease => bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Ease::Quad => t * t,
            Ease::Cubic => t * t * t,
            Ease::Bezier([x1, y1, x2, y2]) => bezier_ease(t, *x1, *y1, *x2, *y2),
            Ease::Blend(a, b) => (a.evaluate(t) + b.evaluate(t)) / 2.0,
        }
    }

    /// Curve that evaluates both inputs and returns their mean.
    pub fn blend(a: Ease, b: Ease) -> Ease {
        Ease::Blend(Box::new(a), Box::new(b))
    }
}

/// Cubic Bezier basis function.
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Fast path: Bezier(0,0,1,1) is exactly linear.
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1].
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
