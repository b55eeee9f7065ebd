//! Snapshot rendering: [`svg`] writes a viewport-sized SVG document for a [`PageFrame`],
//! [`raster`] turns that document into PNG pixels.
//!
//! [`PageFrame`]: crate::frame::PageFrame

pub mod raster;
pub mod svg;
