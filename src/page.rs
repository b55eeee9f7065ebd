//! The page view: host events in, [`PageFrame`] snapshots out.
//!
//! All derived state lives in [`PageView`] and is recomputed synchronously by each handler.
//! Scroll-linked styles are pure functions of the current scroll sample; springs and tweens
//! only move on [`PageView::tick`].

use crate::animation::map::MapRange;
use crate::animation::presence::Presence;
use crate::config::PageConfig;
use crate::contact::{ContactDesk, ContactForm, SubmitOutcome};
use crate::content::{GALLERY, MENU, NAV_ITEMS, SectionId};
use crate::foundation::core::{Point, Progress, Rect, Viewport};
use crate::foundation::error::PageResult;
use crate::frame::{
    CardFrame, CartFrame, IntroFrame, LayerStyle, MagnetFrame, NavLinkFrame, PageFrame,
    ProgressFrame,
};
use crate::layout::PageLayout;
use crate::marquee::Marquee;
use crate::observe::{SectionWatch, resolve_active};
use crate::pointer::Magnet;
use crate::reveal::{GalleryFocus, MenuReveal};
use crate::scroll::{ScrollOffsets, ScrollSample, SmoothedProgress};
use crate::ui_state::{CartButton, UiFlags};

/// Longest time step a single [`PageView::tick`] advances animations by.
///
/// A longer gap (a backgrounded tab resuming, a stalled host) is treated as one 40 ms frame.
pub const MAX_FRAME_DELTA_SECS: f64 = 0.04;

/// Raw input from the host document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Scroll { y: f64 },
    Resize { width: f64, height: f64 },
    /// Pointer position in client coordinates.
    PointerMove { x: f64, y: f64 },
    /// Pointer left the document.
    PointerLeave,
    GalleryScroll { x: f64 },
    ToggleMobileNav,
    SelectNavLink { section: SectionId },
    SubmitContact(ContactForm),
}

/// What a handled event did beyond updating state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum EventEffect {
    None,
    /// Unmounted page: the event reached no listener.
    Ignored,
    ScrolledTo { section: SectionId, scroll_y: f64 },
    Acknowledged(SubmitOutcome),
    /// Required fields missing; the host would not fire submit.
    SubmitBlocked { reason: String },
}

#[derive(Clone, Debug, PartialEq)]
struct HeroMaps {
    translate_y_pct: MapRange<f64>,
    opacity: MapRange<f64>,
    scale: MapRange<f64>,
}

#[derive(Debug)]
pub struct PageView {
    config: PageConfig,
    present: Vec<SectionId>,
    layout: PageLayout,
    time_secs: f64,
    scroll_y: f64,
    gallery_scroll_x: f64,
    active: SectionId,
    flags: UiFlags,
    smoothed: SmoothedProgress,
    hero: HeroMaps,
    parallax: [MapRange<f64>; 3],
    magnet: Magnet,
    /// Last pointer position in client coordinates, while the pointer is in the document.
    pointer: Option<Point>,
    hovering_order: bool,
    cart: CartButton,
    intro: Presence,
    marquee: Marquee,
    menu_reveal: MenuReveal,
    gallery_focus: GalleryFocus,
    desk: ContactDesk,
    watch: Option<SectionWatch>,
}

impl PageView {
    pub fn new(config: PageConfig) -> PageResult<Self> {
        Self::with_sections(config, &SectionId::ALL)
    }

    /// Build a page whose document only contains `present` sections.
    pub fn with_sections(config: PageConfig, present: &[SectionId]) -> PageResult<Self> {
        config.validate()?;
        let layout = PageLayout::compute_with(config.viewport, present);
        let overflow = config.overflow;
        let unit = |from: f64, to: f64| MapRange::unit(from, to).with_overflow(overflow);

        Ok(Self {
            present: present.to_vec(),
            layout,
            time_secs: 0.0,
            scroll_y: 0.0,
            gallery_scroll_x: 0.0,
            active: SectionId::default(),
            flags: UiFlags::default(),
            smoothed: SmoothedProgress::new(config.progress_spring, Progress::ZERO),
            hero: HeroMaps {
                translate_y_pct: unit(0.0, -30.0),
                opacity: unit(1.0, 0.6),
                scale: unit(1.0, 1.08),
            },
            parallax: [unit(-10.0, 10.0), unit(-20.0, 15.0), unit(-30.0, 20.0)],
            magnet: Magnet::new(config.magnet_factor, config.magnet_spring),
            pointer: None,
            hovering_order: false,
            cart: CartButton::new(config.cart_spring),
            intro: Presence::hidden(config.hero_intro),
            marquee: Marquee::new(config.marquee_period_secs),
            menu_reveal: MenuReveal::new(
                MENU.len(),
                config.menu_reveal_spring,
                config.menu_reveal_stagger_secs,
                config.menu_reveal_margin,
            ),
            gallery_focus: GalleryFocus::new(
                GALLERY.len(),
                config.gallery_motion,
                config.gallery_in_view_amount,
            ),
            desk: ContactDesk::default(),
            watch: None,
            config,
        })
    }

    /// Attach listeners and observers, start the intro, and sync to the current scroll.
    pub fn mount(&mut self) {
        if self.watch.is_some() {
            return;
        }
        self.watch = Some(SectionWatch::mount(
            &SectionId::ALL,
            self.config.section_threshold,
            &self.layout,
        ));
        self.intro.set_shown(true);
        self.sync_scroll();
    }

    /// Release every observer. Returns how many observation targets were released.
    pub fn unmount(&mut self) -> usize {
        self.watch.take().map_or(0, SectionWatch::teardown)
    }

    pub fn is_mounted(&self) -> bool {
        self.watch.is_some()
    }

    pub fn observed_sections(&self) -> Vec<SectionId> {
        self.watch
            .as_ref()
            .map(|w| w.observer().observed().collect())
            .unwrap_or_default()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn active_section(&self) -> SectionId {
        self.active
    }

    pub fn flags(&self) -> UiFlags {
        self.flags
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn magnet(&self) -> &Magnet {
        &self.magnet
    }

    pub fn global_progress(&self) -> Progress {
        self.sample().global_progress()
    }

    pub fn handle(&mut self, event: PageEvent) -> EventEffect {
        // The document still scrolls and resizes without listeners attached.
        match event {
            PageEvent::Scroll { y } => {
                self.scroll_y = self.layout.clamp_scroll_y(y);
                if !self.is_mounted() {
                    return EventEffect::Ignored;
                }
                self.sync_scroll();
                EventEffect::None
            }
            PageEvent::Resize { width, height } => {
                let Ok(viewport) = Viewport::new(width, height) else {
                    tracing::debug!(width, height, "ignoring degenerate resize");
                    if !self.is_mounted() {
                        return EventEffect::Ignored;
                    }
                    return EventEffect::None;
                };
                self.resize(viewport);
                if !self.is_mounted() {
                    return EventEffect::Ignored;
                }
                self.sync_scroll();
                EventEffect::None
            }
            _ if !self.is_mounted() => EventEffect::Ignored,
            PageEvent::PointerMove { x, y } => {
                self.pointer_move(Point::new(x, y));
                EventEffect::None
            }
            PageEvent::PointerLeave => {
                self.pointer = None;
                if self.hovering_order {
                    self.hovering_order = false;
                    self.magnet.pointer_leave();
                }
                EventEffect::None
            }
            PageEvent::GalleryScroll { x } => {
                let max = self.layout.gallery.as_ref().map_or(0.0, |g| g.max_scroll_x);
                self.gallery_scroll_x = if x.is_finite() { x.clamp(0.0, max) } else { 0.0 };
                self.sync_scroll();
                EventEffect::None
            }
            PageEvent::ToggleMobileNav => {
                self.flags.toggle_mobile_nav();
                EventEffect::None
            }
            PageEvent::SelectNavLink { section } => {
                self.flags.nav_link_selected();
                let Some(scroll_y) = self.layout.anchor_scroll_y(section) else {
                    return EventEffect::None;
                };
                self.scroll_y = scroll_y;
                self.sync_scroll();
                EventEffect::ScrolledTo { section, scroll_y }
            }
            PageEvent::SubmitContact(form) => match self.desk.submit(&form) {
                Ok(outcome) => EventEffect::Acknowledged(outcome),
                Err(err) => EventEffect::SubmitBlocked {
                    reason: err.to_string(),
                },
            },
        }
    }

    /// Advance springs, tweens and the marquee clock by `dt` seconds, capped at
    /// [`MAX_FRAME_DELTA_SECS`].
    pub fn tick(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            // Nothing can animate; show settled scroll-linked values.
            self.smoothed.tick(dt);
            return;
        }
        let dt = dt.min(MAX_FRAME_DELTA_SECS);
        self.time_secs += dt;
        self.smoothed.tick(dt);
        self.magnet.tick(dt);
        self.cart.tick(dt);
        self.intro.tick(dt);
        self.marquee.tick(dt);
        self.menu_reveal.tick(dt);
        self.gallery_focus.tick(dt);
    }

    pub fn frame(&self) -> PageFrame {
        let sample = self.sample();

        let hero_p = self
            .layout
            .hero_frame
            .map_or(Progress::ZERO, |r| sample.element_progress(r, ScrollOffsets::STICKY_EXIT));
        let hero = LayerStyle {
            translate_y_pct: self.hero.translate_y_pct.sample_progress(hero_p),
            opacity: self.hero.opacity.sample_progress(hero_p),
            scale: self.hero.scale.sample_progress(hero_p),
        };

        let parallax = match self.layout.parallax_stack {
            Some(stack) => {
                let p = sample.element_progress(stack, ScrollOffsets::PASS_THROUGH);
                self.parallax
                    .iter()
                    .map(|m| LayerStyle {
                        translate_y_pct: m.sample_progress(p),
                        ..LayerStyle::default()
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        let intro = self.intro.value();
        let menu_cards = if self.layout.menu_cards.is_empty() {
            Vec::new()
        } else {
            MENU.iter()
                .enumerate()
                .map(|(i, item)| CardFrame {
                    label: item.name,
                    shown: self.menu_reveal.is_revealed(i),
                    style: self.menu_reveal.style(i),
                })
                .collect()
        };
        let gallery = if self.layout.gallery.is_none() {
            Vec::new()
        } else {
            GALLERY
                .iter()
                .enumerate()
                .map(|(i, src)| CardFrame {
                    label: *src,
                    shown: self.gallery_focus.in_view(i),
                    style: self.gallery_focus.style(i),
                })
                .collect()
        };

        PageFrame {
            time_secs: self.time_secs,
            viewport: self.layout.viewport,
            scroll_y: self.scroll_y,
            gallery_scroll_x: self.gallery_scroll_x,
            mounted: self.is_mounted(),
            progress: ProgressFrame {
                raw: sample.global_progress(),
                smoothed: self.smoothed.value(),
            },
            hero,
            intro: IntroFrame {
                opacity: intro.clamp(0.0, 1.0),
                translate_y: 20.0 * (1.0 - intro),
            },
            parallax,
            active_section: self.active,
            nav: NAV_ITEMS
                .iter()
                .map(|n| NavLinkFrame {
                    label: n.label,
                    section: n.section,
                    active: n.section == self.active,
                })
                .collect(),
            mobile_nav_open: self.flags.mobile_nav_open,
            magnet: MagnetFrame {
                target: self.magnet.target(),
                offset: self.magnet.offset(),
            },
            cart: CartFrame {
                visible: self.flags.cart_visible,
                rendered: self.cart.is_rendered(),
                translate_y: self.cart.translate_y(),
                opacity: self.cart.opacity(),
            },
            marquee_offset_pct: self.marquee.offset_pct(),
            menu_cards,
            gallery,
            acknowledgments: self.desk.acknowledged(),
        }
    }

    fn sample(&self) -> ScrollSample {
        ScrollSample {
            scroll_y: self.scroll_y,
            document_height: self.layout.document_height,
            viewport: self.layout.viewport,
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
        self.layout = PageLayout::compute_with(viewport, &self.present);
        self.scroll_y = self.layout.clamp_scroll_y(self.scroll_y);
        let max_x = self.layout.gallery.as_ref().map_or(0.0, |g| g.max_scroll_x);
        self.gallery_scroll_x = self.gallery_scroll_x.min(max_x);
        if let Some(watch) = self.watch.as_mut() {
            watch.relayout(&self.layout);
        }
        // The button moved under a resting pointer.
        if let Some(p) = self.pointer.filter(|_| self.watch.is_some()) {
            self.pointer_move(p);
        }
    }

    fn pointer_move(&mut self, p: Point) {
        self.pointer = Some(p);
        match self.layout.order_button {
            Some(bounds) if bounds.contains(p) => {
                self.hovering_order = true;
                self.magnet.pointer_move(p, Some(bounds));
            }
            _ => {
                if self.hovering_order {
                    self.hovering_order = false;
                    self.magnet.pointer_leave();
                }
            }
        }
    }

    /// Recompute everything derived from the scroll sample.
    fn sync_scroll(&mut self) {
        let sample = self.sample();
        let raw = sample.global_progress();
        self.smoothed.set_target(raw);

        if self.flags.update_cart(raw, self.config.cart_threshold) {
            tracing::debug!(visible = self.flags.cart_visible, progress = raw.get(), "cart button");
        }
        self.cart.set_visible(self.flags.cart_visible);

        let visible = self.layout.viewport.rect_at(self.scroll_y);
        if let Some(watch) = self.watch.as_mut() {
            let entries = watch.poll(visible);
            let next = resolve_active(self.active, &entries);
            if next != self.active {
                tracing::debug!(from = %self.active, to = %next, "active section");
                self.active = next;
            }
        }

        self.menu_reveal.update(&self.layout.menu_cards, visible);

        if let Some(gallery) = &self.layout.gallery {
            let clip = visible.intersect(gallery.scroller);
            let cards: Vec<Rect> = (0..gallery.cards.len())
                .filter_map(|i| gallery.card_at(i, self.gallery_scroll_x))
                .collect();
            self.gallery_focus.update(&cards, clip);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
