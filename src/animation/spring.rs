//! Damped harmonic spring used to chase moving targets (progress bar, magnetic button,
//! presence transitions).

use crate::foundation::core::Vec2;
use crate::foundation::error::{PageError, PageResult};

/// Integration substep in seconds. Large frame deltas are split into these.
const SUBSTEP_SECS: f64 = 1.0 / 240.0;

/// Physical spring parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringSpec {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Distance to target below which the spring may settle.
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f64,
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest_delta() -> f64 {
    0.001
}

fn default_rest_speed() -> f64 {
    0.01
}

impl SpringSpec {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }

    pub fn validate(&self) -> PageResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.stiffness) {
            return Err(PageError::config("spring stiffness must be finite and > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(PageError::config("spring damping must be finite and >= 0"));
        }
        if !positive(self.mass) {
            return Err(PageError::config("spring mass must be finite and > 0"));
        }
        if !(self.rest_delta.is_finite() && self.rest_delta >= 0.0)
            || !(self.rest_speed.is_finite() && self.rest_speed >= 0.0)
        {
            return Err(PageError::config("spring rest thresholds must be finite and >= 0"));
        }
        Ok(())
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One scalar driven by a [`SpringSpec`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct SpringState {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl SpringState {
    /// A spring resting at `value`.
    pub fn at(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump straight to `value` and stop.
    pub fn snap(&mut self, value: f64) {
        *self = Self::at(value);
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advance by `dt` seconds. Returns `true` once settled on the target.
    ///
    /// Non-finite or non-positive `dt` leaves the state untouched.
    pub fn step(&mut self, spec: &SpringSpec, dt: f64) -> bool {
        if !(dt.is_finite() && dt > 0.0) {
            return self.is_at_rest();
        }
        if self.is_at_rest() {
            return true;
        }

        // Semi-implicit Euler.
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let displacement = self.value - self.target;
            let force = -spec.stiffness * displacement - spec.damping * self.velocity;
            self.velocity += (force / spec.mass) * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        let settled = (self.value - self.target).abs() <= spec.rest_delta
            && self.velocity.abs() <= spec.rest_speed;
        if settled {
            self.snap(self.target);
        }
        settled
    }
}

/// Two independent springs sharing one spec.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct SpringVec2 {
    pub x: SpringState,
    pub y: SpringState,
}

impl SpringVec2 {
    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target, self.y.target)
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value, self.y.value)
    }

    pub fn step(&mut self, spec: &SpringSpec, dt: f64) -> bool {
        let x = self.x.step(spec, dt);
        let y = self.y.step(spec, dt);
        x && y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
