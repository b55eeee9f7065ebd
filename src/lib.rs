//! Pizzeria is the view engine behind a scroll-driven restaurant landing page.
//!
//! A [`PageView`] consumes host events (scroll, resize, pointer, navigation, form submit) and
//! derives everything the page shows from them:
//!
//! - a spring-smoothed reading-progress bar and scroll-linked hero/parallax transforms
//! - the active navigation section, tracked with viewport intersection observers
//! - a magnetic "Order Now" button and a floating cart button that appears past 15% progress
//! - menu/gallery reveal motion, the marquee ticker, and contact form acknowledgments
//!
//! Each state is captured as a serializable [`PageFrame`], which can be rendered to SVG or PNG
//! ([`render`]) or recorded over a scripted session ([`session`]).
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod config;
pub mod contact;
pub mod content;
pub mod frame;
pub mod layout;
pub mod marquee;
pub mod observe;
pub mod page;
pub mod pointer;
pub mod render;
pub mod reveal;
pub mod scroll;
pub mod session;
pub mod ui_state;

pub use crate::foundation::core::{Breakpoint, Point, Progress, Rect, Size, Vec2, Viewport};
pub use crate::foundation::error::{PageError, PageResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::map::{Lerp, MapRange, Overflow};
pub use crate::animation::presence::{Motion, Presence};
pub use crate::animation::spring::{SpringSpec, SpringState};
pub use crate::config::PageConfig;
pub use crate::contact::{Acknowledgment, ContactDesk, ContactForm, SubmitOutcome};
pub use crate::content::SectionId;
pub use crate::frame::PageFrame;
pub use crate::layout::PageLayout;
pub use crate::observe::{IntersectionEntry, SectionWatch, ViewportObserver};
pub use crate::page::{EventEffect, PageEvent, PageView};
pub use crate::pointer::Magnet;
pub use crate::render::raster::{RasterImage, RasterOptions, rasterize, render_png};
pub use crate::render::svg::render_svg;
pub use crate::scroll::{Edge, Intersection, ScrollOffsets, ScrollSample, SmoothedProgress};
pub use crate::session::{ScrollScript, TimedEvent, run_script};
pub use crate::ui_state::UiFlags;
