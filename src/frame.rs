//! Immutable per-frame snapshot of everything the page renders.

use crate::content::SectionId;
use crate::foundation::core::{Progress, Vec2, Viewport};
use crate::reveal::CardStyle;

/// Transform and opacity of a scroll-linked layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerStyle {
    /// Vertical translation in percent of the layer's own height.
    pub translate_y_pct: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            translate_y_pct: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ProgressFrame {
    pub raw: Progress,
    /// Drives the top bar's horizontal scale.
    pub smoothed: Progress,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct IntroFrame {
    pub opacity: f64,
    /// Pixels.
    pub translate_y: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavLinkFrame {
    pub label: &'static str,
    pub section: SectionId,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MagnetFrame {
    pub target: Vec2,
    pub offset: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CartFrame {
    pub visible: bool,
    /// Still drawn (visible, or animating out).
    pub rendered: bool,
    pub translate_y: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CardFrame {
    pub label: &'static str,
    pub shown: bool,
    pub style: CardStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageFrame {
    pub time_secs: f64,
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub gallery_scroll_x: f64,
    pub mounted: bool,
    pub progress: ProgressFrame,
    pub hero: LayerStyle,
    pub intro: IntroFrame,
    /// Back to front.
    pub parallax: Vec<LayerStyle>,
    pub active_section: SectionId,
    pub nav: Vec<NavLinkFrame>,
    pub mobile_nav_open: bool,
    pub magnet: MagnetFrame,
    pub cart: CartFrame,
    pub marquee_offset_pct: f64,
    pub menu_cards: Vec<CardFrame>,
    pub gallery: Vec<CardFrame>,
    pub acknowledgments: u32,
}
