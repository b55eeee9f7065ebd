//! Timing curves for tweens, expressed as CSS-style cubic Béziers.
//!
//! The named curves match the `ease*` keywords of CSS transitions; a duration-only transition
//! on the page uses [`Ease::EaseInOut`].

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

/// Maps normalized tween time to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    #[default]
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`. `x1` and `x2` are clamped into `[0, 1]`.
    CubicBezier([f64; 4]),
}

impl Ease {
    /// Control points `[x1, y1, x2, y2]`, or `None` for [`Ease::Linear`].
    pub fn control_points(self) -> Option<[f64; 4]> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some([0.42, 0.0, 1.0, 1.0]),
            Self::EaseOut => Some([0.0, 0.0, 0.58, 1.0]),
            Self::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
            Self::CubicBezier(p) => Some(p),
        }
    }

    /// Eased progress at time `t`, clamped into `[0, 1]`. Endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        if !t.is_finite() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let Some([x1, y1, x2, y2]) = self.control_points() else {
            return t;
        };
        let (x1, x2) = (x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
        if x1 == y1 && x2 == y2 {
            return t;
        }
        bezier(solve_param(t, x1, x2), y1, y2)
    }
}

/// One axis of a cubic Bézier from (0, 0) to (1, 1) with inner controls `p1`, `p2`.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Curve parameter whose x equals `x`. Newton first, bisection when the slope flattens.
fn solve_param(x: f64, x1: f64, x2: f64) -> f64 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < SOLVE_EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    // x(s) is monotonic for x1, x2 in [0, 1].
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < SOLVE_EPSILON {
            break;
        }
        if err > 0.0 {
            hi = s;
        } else {
            lo = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
