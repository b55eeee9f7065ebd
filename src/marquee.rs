use crate::animation::map::MapRange;

/// Endless promotion ticker: the repeated track slides left by half its width each period,
/// then wraps.
#[derive(Clone, Debug, PartialEq)]
pub struct Marquee {
    period_secs: f64,
    phase_secs: f64,
    shift: MapRange<f64>,
}

impl Marquee {
    pub fn new(period_secs: f64) -> Self {
        Self {
            period_secs,
            phase_secs: 0.0,
            shift: MapRange::unit(0.0, -50.0),
        }
    }

    pub fn tick(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) || self.period_secs <= 0.0 {
            return;
        }
        self.phase_secs = (self.phase_secs + dt) % self.period_secs;
    }

    /// Horizontal translation of the track, in percent of its own width.
    pub fn offset_pct(&self) -> f64 {
        self.shift.sample(self.phase_secs / self.period_secs)
    }
}

#[cfg(test)]
#[path = "../tests/unit/marquee.rs"]
mod tests;
