use crate::foundation::error::{PageError, PageResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Host viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport (both sides finite and > 0).
    pub fn new(width: f64, height: f64) -> PageResult<Self> {
        let v = Self { width, height };
        v.validate()?;
        Ok(v)
    }

    pub fn validate(self) -> PageResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(PageError::validation("viewport width must be finite and > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(PageError::validation("viewport height must be finite and > 0"));
        }
        Ok(())
    }

    /// Visible document rect when scrolled to `scroll_y`.
    pub fn rect_at(self, scroll_y: f64) -> Rect {
        Rect::new(0.0, scroll_y, self.width, scroll_y + self.height)
    }

    /// Viewport rect in client (viewport-relative) coordinates.
    pub fn client_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn breakpoint(self) -> Breakpoint {
        Breakpoint::for_width(self.width)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Responsive width classes, smallest first.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// `< 640px`
    Base,
    /// `>= 640px`
    Sm,
    /// `>= 768px`
    Md,
    /// `>= 1024px`
    Lg,
}

impl Breakpoint {
    pub fn for_width(width: f64) -> Self {
        if width >= 1024.0 {
            Self::Lg
        } else if width >= 768.0 {
            Self::Md
        } else if width >= 640.0 {
            Self::Sm
        } else {
            Self::Base
        }
    }
}

/// Normalized position through a scroll range. Always inside `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`. Non-finite input maps to 0.
    pub fn new(v: f64) -> Self {
        if v.is_finite() {
            Self(v.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Progress of `pos` through `[start, end]`. A degenerate range yields 0.
    pub fn through(pos: f64, start: f64, end: f64) -> Self {
        let span = end - start;
        if !(span.is_finite() && span > 0.0) {
            return Self::ZERO;
        }
        Self::new((pos - start) / span)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl<'de> serde::Deserialize<'de> for Progress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::new(f64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
