//! In-flow geometry of the page for a given viewport.
//!
//! Rects are in document coordinates unless noted as client (viewport-fixed) rects.
//! Sections can be left out of the document; their sub-elements are then absent too.

use std::collections::BTreeMap;

use crate::content::{GALLERY, MENU, SectionId};
use crate::foundation::core::{Breakpoint, Rect, Viewport};

pub const HEADER_HEIGHT: f64 = 64.0;
pub const MARQUEE_HEIGHT: f64 = 40.0;
pub const FOOTER_HEIGHT: f64 = 116.0;
const CONTAINER_MAX: f64 = 1280.0;
const MENU_PAD_Y: f64 = 96.0;
const MENU_HEADING: f64 = 116.0;
const MENU_GAP: f64 = 24.0;
const MENU_CARD_BODY: f64 = 128.0;
const PHOTOS_PAD_Y: f64 = 80.0;
const PHOTOS_HEADING: f64 = 72.0;
const GALLERY_GAP: f64 = 16.0;
const CONTACT_PAD_Y: f64 = 96.0;
const CONTACT_FORM: f64 = 420.0;
const CONTACT_INFO: f64 = 300.0;
const ABOUT_TEXT: f64 = 300.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GalleryLayout {
    /// Visible scroller box.
    pub scroller: Rect,
    /// Card rects relative to the scroller's content origin (before horizontal scroll).
    pub cards: Vec<Rect>,
    pub max_scroll_x: f64,
}

impl GalleryLayout {
    /// Card rect in document coordinates for horizontal scroll `scroll_x`.
    pub fn card_at(&self, idx: usize, scroll_x: f64) -> Option<Rect> {
        let c = self.cards.get(idx)?;
        Some(c.with_origin((
            self.scroller.x0 + c.x0 - scroll_x,
            self.scroller.y0 + c.y0,
        )))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub breakpoint: Breakpoint,
    pub document_height: f64,
    /// Content column (container minus padding), horizontally.
    pub content_x: [f64; 2],
    pub header: Rect,
    pub marquee: Rect,
    pub footer: Rect,
    sections: BTreeMap<SectionId, Rect>,
    /// Sticky hero frame at its in-flow position.
    pub hero_frame: Option<Rect>,
    pub parallax_stack: Option<Rect>,
    /// The three stacked parallax cards, back to front, before translation.
    pub parallax_layers: Vec<Rect>,
    pub menu_cards: Vec<Rect>,
    pub gallery: Option<GalleryLayout>,
    pub contact_form: Option<Rect>,
    /// Client rect of the magnetic "Order Now" button (hidden below `md`).
    pub order_button: Option<Rect>,
    /// Client rect of the hamburger toggle (only below `md`).
    pub nav_toggle: Option<Rect>,
    /// Client rect of the floating cart button.
    pub cart_button: Rect,
}

impl PageLayout {
    pub fn compute(viewport: Viewport) -> Self {
        Self::compute_with(viewport, &SectionId::ALL)
    }

    /// Lay out only the listed sections; the rest are missing from the document.
    pub fn compute_with(viewport: Viewport, present: &[SectionId]) -> Self {
        let w = viewport.width;
        let h = viewport.height;
        let bp = viewport.breakpoint();

        let container_w = w.min(CONTAINER_MAX);
        let pad = match bp {
            Breakpoint::Base => 16.0,
            Breakpoint::Sm | Breakpoint::Md => 24.0,
            Breakpoint::Lg => 32.0,
        };
        let cx0 = (w - container_w) / 2.0 + pad;
        let cw = (container_w - 2.0 * pad).max(0.0);
        let cx1 = cx0 + cw;

        let has = |s: SectionId| present.contains(&s);
        let mut sections = BTreeMap::new();
        let mut y = 0.0;

        let header = Rect::new(0.0, y, w, y + HEADER_HEIGHT);
        y = header.y1;

        let mut hero_frame = None;
        if has(SectionId::Home) {
            let r = Rect::new(0.0, y, w, y + 1.4 * h);
            hero_frame = Some(Rect::new(0.0, r.y0, w, r.y0 + h));
            sections.insert(SectionId::Home, r);
            y = r.y1;
        }

        let marquee = Rect::new(0.0, y, w, y + MARQUEE_HEIGHT);
        y = marquee.y1;

        let mut menu_cards = Vec::new();
        if has(SectionId::Menu) {
            let cols = match bp {
                Breakpoint::Base | Breakpoint::Sm => 1,
                Breakpoint::Md => 2,
                Breakpoint::Lg => 3,
            };
            let card_w = (cw - MENU_GAP * (cols as f64 - 1.0)) / cols as f64;
            let card_h = card_w * 0.75 + MENU_CARD_BODY;
            let rows = MENU.len().div_ceil(cols);
            let grid_top = y + MENU_PAD_Y + MENU_HEADING;
            for i in 0..MENU.len() {
                let (row, col) = ((i / cols) as f64, (i % cols) as f64);
                let x0 = cx0 + col * (card_w + MENU_GAP);
                let y0 = grid_top + row * (card_h + MENU_GAP);
                menu_cards.push(Rect::new(x0, y0, x0 + card_w, y0 + card_h));
            }
            let grid_h = rows as f64 * card_h + (rows as f64 - 1.0) * MENU_GAP;
            let r = Rect::new(0.0, y, w, grid_top + grid_h + MENU_PAD_Y);
            sections.insert(SectionId::Menu, r);
            y = r.y1;
        }

        let mut parallax_stack = None;
        let mut parallax_layers = Vec::new();
        if has(SectionId::About) {
            let r = Rect::new(0.0, y, w, y + 1.6 * h);
            let stack_h = if bp >= Breakpoint::Md { 0.7 * h } else { 0.6 * h };
            let stack = if bp >= Breakpoint::Lg {
                let col_w = (cw - 40.0) / 2.0;
                let x0 = cx0 + col_w + 40.0;
                let y0 = r.y0 + (h - stack_h) / 2.0;
                Rect::new(x0, y0, x0 + col_w, y0 + stack_h)
            } else {
                let total = ABOUT_TEXT + 40.0 + stack_h;
                let y0 = r.y0 + ((h - total) / 2.0).max(0.0) + ABOUT_TEXT + 40.0;
                Rect::new(cx0, y0, cx1, y0 + stack_h)
            };
            // left/top/right insets of each card inside the stack, 4:3 aspect.
            for (left, top, right) in [(24.0, 24.0, 96.0), (64.0, 96.0, 48.0), (112.0, 160.0, 0.0)] {
                let lw = (stack.width() - left - right).max(0.0);
                let x0 = stack.x0 + left;
                let y0 = stack.y0 + top;
                parallax_layers.push(Rect::new(x0, y0, x0 + lw, y0 + lw * 0.75));
            }
            parallax_stack = Some(stack);
            sections.insert(SectionId::About, r);
            y = r.y1;
        }

        let mut gallery = None;
        if has(SectionId::Photos) {
            let frac = match bp {
                Breakpoint::Base => 0.8,
                Breakpoint::Sm => 0.6,
                Breakpoint::Md => 0.4,
                Breakpoint::Lg => 0.32,
            };
            let card_w = frac * w;
            let card_h = card_w * 0.75 + 2.0;
            let cards: Vec<Rect> = (0..GALLERY.len())
                .map(|i| {
                    let x0 = i as f64 * (card_w + GALLERY_GAP);
                    Rect::new(x0, 0.0, x0 + card_w, card_h)
                })
                .collect();
            let track_w = cards.last().map_or(0.0, |c| c.x1);
            let top = y + PHOTOS_PAD_Y + PHOTOS_HEADING;
            let scroller = Rect::new(cx0, top, cx1, top + card_h);
            gallery = Some(GalleryLayout {
                scroller,
                cards,
                max_scroll_x: (track_w - cw).max(0.0),
            });
            let r = Rect::new(0.0, y, w, scroller.y1 + PHOTOS_PAD_Y);
            sections.insert(SectionId::Photos, r);
            y = r.y1;
        }

        let mut contact_form = None;
        if has(SectionId::Contact) {
            let top = y + CONTACT_PAD_Y;
            let (form, content_h) = if bp >= Breakpoint::Lg {
                let col_w = (cw - 32.0) / 2.0;
                (
                    Rect::new(cx0, top, cx0 + col_w, top + CONTACT_FORM),
                    CONTACT_FORM.max(CONTACT_INFO),
                )
            } else {
                (
                    Rect::new(cx0, top, cx1, top + CONTACT_FORM),
                    CONTACT_FORM + 32.0 + CONTACT_INFO,
                )
            };
            contact_form = Some(form);
            let r = Rect::new(0.0, y, w, top + content_h + CONTACT_PAD_Y);
            sections.insert(SectionId::Contact, r);
            y = r.y1;
        }

        let footer = Rect::new(0.0, y, w, y + FOOTER_HEIGHT);

        let (order_button, nav_toggle) = if bp >= Breakpoint::Md {
            (Some(Rect::new(cx1 - 120.0, 12.0, cx1, 52.0)), None)
        } else {
            (None, Some(Rect::new(cx1 - 44.0, 12.0, cx1, 52.0)))
        };
        let cart_button = Rect::new(w - 24.0 - 132.0, h - 24.0 - 48.0, w - 24.0, h - 24.0);

        Self {
            viewport,
            breakpoint: bp,
            document_height: footer.y1,
            content_x: [cx0, cx1],
            header,
            marquee,
            footer,
            sections,
            hero_frame,
            parallax_stack,
            parallax_layers,
            menu_cards,
            gallery,
            contact_form,
            order_button,
            nav_toggle,
            cart_button,
        }
    }

    pub fn section(&self, id: SectionId) -> Option<Rect> {
        self.sections.get(&id).copied()
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, Rect)> + '_ {
        self.sections.iter().map(|(id, r)| (*id, *r))
    }

    pub fn max_scroll_y(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    pub fn clamp_scroll_y(&self, y: f64) -> f64 {
        if !y.is_finite() {
            return 0.0;
        }
        y.clamp(0.0, self.max_scroll_y())
    }

    /// Scroll position an anchor link to `id` jumps to.
    pub fn anchor_scroll_y(&self, id: SectionId) -> Option<f64> {
        self.section(id).map(|r| self.clamp_scroll_y(r.y0))
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
