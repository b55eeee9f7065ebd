//! "Magnetic" control: the label drifts toward the pointer while it hovers the control.

use crate::animation::spring::{SpringSpec, SpringVec2};
use crate::foundation::core::{Point, Rect, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub struct Magnet {
    factor: f64,
    spring: SpringSpec,
    offset: SpringVec2,
}

impl Magnet {
    pub fn new(factor: f64, spring: SpringSpec) -> Self {
        Self {
            factor,
            spring,
            offset: SpringVec2::default(),
        }
    }

    /// Pointer moved to `pointer` (client coordinates) over a control with client rect `bounds`.
    ///
    /// A missing control is a no-op.
    pub fn pointer_move(&mut self, pointer: Point, bounds: Option<Rect>) {
        let Some(bounds) = bounds else {
            return;
        };
        let raw = pointer - bounds.center();
        self.offset.set_target(raw * self.factor);
    }

    pub fn pointer_leave(&mut self) {
        self.offset.set_target(Vec2::ZERO);
    }

    pub fn tick(&mut self, dt: f64) {
        self.offset.step(&self.spring, dt);
    }

    /// Displacement the control is heading to.
    pub fn target(&self) -> Vec2 {
        self.offset.target()
    }

    /// Displacement currently rendered.
    pub fn offset(&self) -> Vec2 {
        self.offset.value()
    }
}

#[cfg(test)]
#[path = "../tests/unit/pointer.rs"]
mod tests;
