//! Scroll position → normalized progress.

use crate::animation::spring::{SpringSpec, SpringState};
use crate::foundation::core::{Progress, Rect, Viewport};

/// A point along an edge axis: the start, center or end of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// "`target` edge of the element meets `container` edge of the viewport".
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Scroll offset at which this intersection happens for `element`.
    fn scroll_y(self, element: Rect, viewport: Viewport) -> f64 {
        element.y0 + self.target.fraction() * element.height()
            - self.container.fraction() * viewport.height
    }
}

/// The scroll window tracked for an element: progress is 0 at `start` and 1 at `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffsets {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffsets {
    /// From the element's top hitting the viewport top until its bottom does.
    pub const STICKY_EXIT: Self = Self {
        start: Intersection::new(Edge::Start, Edge::Start),
        end: Intersection::new(Edge::End, Edge::Start),
    };

    /// From the element's top entering at the bottom until its bottom leaves at the top.
    pub const PASS_THROUGH: Self = Self {
        start: Intersection::new(Edge::Start, Edge::End),
        end: Intersection::new(Edge::End, Edge::Start),
    };

    pub fn progress(self, scroll_y: f64, element: Rect, viewport: Viewport) -> Progress {
        Progress::through(
            scroll_y,
            self.start.scroll_y(element, viewport),
            self.end.scroll_y(element, viewport),
        )
    }
}

/// Latest scroll sample of the document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport: Viewport,
}

impl ScrollSample {
    /// `scroll_y / (document_height - viewport_height)`, clamped.
    pub fn global_progress(&self) -> Progress {
        Progress::through(
            self.scroll_y,
            0.0,
            self.document_height - self.viewport.height,
        )
    }

    pub fn element_progress(&self, element: Rect, offsets: ScrollOffsets) -> Progress {
        offsets.progress(self.scroll_y, element, self.viewport)
    }
}

/// Spring-smoothed copy of a progress signal, used for the top progress bar only.
///
/// Without a spring (or given an unusable timestep) the smoothed value is the raw value.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothedProgress {
    spring: Option<SpringSpec>,
    state: SpringState,
}

impl SmoothedProgress {
    pub fn new(spring: Option<SpringSpec>, initial: Progress) -> Self {
        Self {
            spring,
            state: SpringState::at(initial.get()),
        }
    }

    pub fn set_target(&mut self, raw: Progress) {
        match self.spring {
            Some(_) => self.state.set_target(raw.get()),
            None => self.state.snap(raw.get()),
        }
    }

    pub fn tick(&mut self, dt: f64) {
        let Some(spec) = self.spring else {
            return;
        };
        if !(dt.is_finite() && dt > 0.0) {
            let target = self.state.target;
            self.state.snap(target);
            return;
        }
        self.state.step(&spec, dt);
    }

    /// Current smoothed value, clamped into `[0, 1]` (the spring may overshoot).
    pub fn value(&self) -> Progress {
        Progress::new(self.state.value)
    }

    pub fn target(&self) -> Progress {
        Progress::new(self.state.target)
    }
}

#[cfg(test)]
#[path = "../tests/unit/scroll.rs"]
mod tests;
