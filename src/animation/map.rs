//! Piecewise-linear mapping from a progress value to style outputs.
//!
//! Several [`MapRange`]s usually share one input progress so stacked layers can move at
//! different rates (parallax depth).

use crate::foundation::core::{Progress, Vec2};

/// Interpolation contract for mapped output types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t` (`0` gives `a`, `1` gives `b`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// What to do with inputs outside `input`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Hold the nearest output endpoint.
    #[default]
    Clamp,
    /// Continue the line past the endpoints.
    Extrapolate,
}

/// Maps `input[0]..input[1]` linearly onto `output[0]..output[1]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapRange<T> {
    pub input: [f64; 2],
    pub output: [T; 2],
    #[serde(default)]
    pub overflow: Overflow,
}

impl<T> MapRange<T>
where
    T: Lerp + Clone,
{
    /// Map over the unit input range `[0, 1]`.
    pub fn unit(from: T, to: T) -> Self {
        Self {
            input: [0.0, 1.0],
            output: [from, to],
            overflow: Overflow::Clamp,
        }
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Sample at a raw input value.
    pub fn sample(&self, x: f64) -> T {
        let [i0, i1] = self.input;
        let span = i1 - i0;
        if span == 0.0 || !span.is_finite() || !x.is_finite() {
            return self.output[0].clone();
        }
        let mut t = (x - i0) / span;
        if self.overflow == Overflow::Clamp {
            t = t.clamp(0.0, 1.0);
        }
        if t == 0.0 {
            return self.output[0].clone();
        }
        if t == 1.0 {
            return self.output[1].clone();
        }
        T::lerp(&self.output[0], &self.output[1], t)
    }

    pub fn sample_progress(&self, p: Progress) -> T {
        self.sample(p.get())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/map.rs"]
mod tests;
