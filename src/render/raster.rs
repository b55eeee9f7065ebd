use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{PageError, PageResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Options for [`rasterize`].
#[derive(Clone, Debug, Default)]
pub struct RasterOptions<'a> {
    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` fonts on top of the system fonts.
    pub fonts_dir: Option<&'a Path>,
    pub skip_system_fonts: bool,
}

/// Parse and rasterize an SVG document at its intrinsic size.
#[tracing::instrument(skip(svg, opts), fields(bytes = svg.len()))]
pub fn rasterize(svg: &str, opts: &RasterOptions<'_>) -> PageResult<RasterImage> {
    let usvg_opts = usvg::Options {
        fontdb: build_fontdb(opts),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &usvg_opts).context("parse svg tree")?;

    let size = tree.size();
    let to_px = |v: f32| -> PageResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(PageError::render("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    };
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PageError::render(format!("failed to allocate {width}x{height} pixmap")))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    Ok(RasterImage {
        width,
        height,
        data,
    })
}

/// Rasterize `svg` and write it as a PNG file.
#[tracing::instrument(skip(svg, opts))]
pub fn render_png(svg: &str, opts: &RasterOptions<'_>, path: &Path) -> PageResult<RasterImage> {
    let img = rasterize(svg, opts)?;
    image::save_buffer_with_format(
        path,
        &img.data,
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(width = img.width, height = img.height, "png written");
    Ok(img)
}

fn build_fontdb(opts: &RasterOptions<'_>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if !opts.skip_system_fonts {
        db.load_system_fonts();
    }
    if let Some(dir) = opts.fonts_dir {
        load_fonts_from_dir(&mut db, dir);
    }
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in rd.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc") {
            let _ = db.load_font_file(&path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
