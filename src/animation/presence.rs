use crate::animation::ease::Ease;
use crate::animation::spring::{SpringSpec, SpringState};

/// How a [`Presence`] travels between its hidden (0) and shown (1) states.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Motion {
    Spring(SpringSpec),
    Tween { duration_secs: f64, ease: Ease },
}

impl Motion {
    pub fn tween(duration_secs: f64, ease: Ease) -> Self {
        Self::Tween {
            duration_secs,
            ease,
        }
    }
}

/// A 0..1 value that animates toward shown/hidden, with an optional start delay.
///
/// Styles are derived from [`Presence::value`] by the caller (opacity, slide offset, scale).
#[derive(Clone, Debug, PartialEq)]
pub struct Presence {
    motion: Motion,
    delay_secs: f64,
    shown: bool,
    waited_secs: f64,
    spring: SpringState,
    tween_from: f64,
    tween_elapsed: f64,
}

impl Presence {
    pub fn hidden(motion: Motion) -> Self {
        Self {
            motion,
            delay_secs: 0.0,
            shown: false,
            waited_secs: 0.0,
            spring: SpringState::at(0.0),
            tween_from: 0.0,
            tween_elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs.max(0.0);
        self
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn value(&self) -> f64 {
        self.spring.value
    }

    /// Change the destination state. Re-targeting mid-flight keeps the current value.
    pub fn set_shown(&mut self, shown: bool) {
        if shown == self.shown {
            return;
        }
        self.shown = shown;
        self.waited_secs = 0.0;
        self.tween_from = self.spring.value;
        self.tween_elapsed = 0.0;
        self.spring.set_target(if shown { 1.0 } else { 0.0 });
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }

    pub fn tick(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) || self.is_settled() {
            return;
        }

        let mut dt = dt;
        if self.waited_secs < self.delay_secs {
            let wait = (self.delay_secs - self.waited_secs).min(dt);
            self.waited_secs += wait;
            dt -= wait;
            if dt <= 0.0 {
                return;
            }
        }

        match self.motion {
            Motion::Spring(spec) => {
                self.spring.step(&spec, dt);
            }
            Motion::Tween {
                duration_secs,
                ease,
            } => {
                self.tween_elapsed += dt;
                let target = self.spring.target;
                if duration_secs <= 0.0 || self.tween_elapsed >= duration_secs {
                    self.spring.snap(target);
                } else {
                    let t = ease.apply(self.tween_elapsed / duration_secs);
                    self.spring.value = self.tween_from + (target - self.tween_from) * t;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presence.rs"]
mod tests;
