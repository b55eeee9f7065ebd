//! In-view entrance effects for menu cards and gallery cards.

use crate::animation::presence::{Motion, Presence};
use crate::animation::spring::SpringSpec;
use crate::foundation::core::Rect;
use crate::observe::intersection_ratio;

/// Opacity / slide / scale derived from a presence value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CardStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

/// Menu cards reveal once, the first time they enter the viewport shrunk by `margin`.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuReveal {
    margin: f64,
    cards: Vec<Presence>,
}

impl MenuReveal {
    pub fn new(count: usize, spring: SpringSpec, stagger_secs: f64, margin: f64) -> Self {
        let cards = (0..count)
            .map(|i| Presence::hidden(Motion::Spring(spring)).with_delay(i as f64 * stagger_secs))
            .collect();
        Self { margin, cards }
    }

    /// `cards` are document rects, `visible` the document-space viewport.
    pub fn update(&mut self, cards: &[Rect], visible: Rect) {
        let root = visible.inset(-self.margin);
        for (presence, rect) in self.cards.iter_mut().zip(cards) {
            if presence.is_shown() {
                continue;
            }
            if rect.intersect(root).area() > 0.0 {
                presence.set_shown(true);
            }
        }
    }

    pub fn tick(&mut self, dt: f64) {
        for p in &mut self.cards {
            p.tick(dt);
        }
    }

    pub fn is_revealed(&self, idx: usize) -> bool {
        self.cards.get(idx).is_some_and(Presence::is_shown)
    }

    pub fn style(&self, idx: usize) -> CardStyle {
        let v = self.cards.get(idx).map_or(0.0, Presence::value);
        CardStyle {
            opacity: v.clamp(0.0, 1.0),
            translate_y: 24.0 * (1.0 - v),
            scale: 1.0 - 0.02 * (1.0 - v),
        }
    }
}

/// Gallery cards brighten while at least `amount` of them is visible, and dim again after.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryFocus {
    amount: f64,
    cards: Vec<Presence>,
}

impl GalleryFocus {
    pub fn new(count: usize, motion: Motion, amount: f64) -> Self {
        Self {
            amount,
            cards: (0..count).map(|_| Presence::hidden(motion)).collect(),
        }
    }

    pub fn update(&mut self, cards: &[Rect], visible: Rect) {
        for (presence, rect) in self.cards.iter_mut().zip(cards) {
            let ratio = intersection_ratio(*rect, visible);
            presence.set_shown(ratio > 0.0 && ratio >= self.amount);
        }
    }

    pub fn tick(&mut self, dt: f64) {
        for p in &mut self.cards {
            p.tick(dt);
        }
    }

    pub fn in_view(&self, idx: usize) -> bool {
        self.cards.get(idx).is_some_and(Presence::is_shown)
    }

    pub fn style(&self, idx: usize) -> CardStyle {
        let v = self.cards.get(idx).map_or(0.0, Presence::value);
        CardStyle {
            opacity: 1.0 - 0.4 * (1.0 - v),
            translate_y: 0.0,
            scale: 1.0 - 0.02 * (1.0 - v),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/reveal.rs"]
mod tests;
