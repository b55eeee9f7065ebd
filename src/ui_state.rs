use crate::animation::presence::{Motion, Presence};
use crate::animation::spring::SpringSpec;
use crate::foundation::core::Progress;

/// Independent boolean UI flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct UiFlags {
    pub mobile_nav_open: bool,
    pub cart_visible: bool,
}

impl UiFlags {
    pub fn toggle_mobile_nav(&mut self) {
        self.mobile_nav_open = !self.mobile_nav_open;
    }

    /// Nav link chosen: the mobile menu closes. Nothing else closes it.
    pub fn nav_link_selected(&mut self) {
        self.mobile_nav_open = false;
    }

    /// Exact threshold test on raw global progress. Returns `true` when the flag flipped.
    pub fn update_cart(&mut self, progress: Progress, threshold: f64) -> bool {
        let visible = progress.get() > threshold;
        let flipped = visible != self.cart_visible;
        self.cart_visible = visible;
        flipped
    }
}

/// Enter/exit animation of the floating cart button.
#[derive(Clone, Debug, PartialEq)]
pub struct CartButton {
    presence: Presence,
}

/// Slide distance (px) of the cart button while hidden.
pub const CART_SLIDE: f64 = 80.0;

impl CartButton {
    pub fn new(spring: SpringSpec) -> Self {
        Self {
            presence: Presence::hidden(Motion::Spring(spring)),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.presence.set_shown(visible);
    }

    pub fn tick(&mut self, dt: f64) {
        self.presence.tick(dt);
    }

    pub fn presence(&self) -> f64 {
        self.presence.value()
    }

    /// Still on screen: shown, or mid-exit.
    pub fn is_rendered(&self) -> bool {
        self.presence.is_shown() || self.presence.value() > 0.0
    }

    pub fn translate_y(&self) -> f64 {
        CART_SLIDE * (1.0 - self.presence.value())
    }

    pub fn opacity(&self) -> f64 {
        self.presence.value().clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../tests/unit/ui_state.rs"]
mod tests;
