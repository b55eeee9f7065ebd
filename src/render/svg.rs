use std::fmt::Write as _;

use crate::content::{
    ABOUT_TITLE, BRAND, BRAND_MARK, CART_BUTTON_LABEL, CONTACT_TITLE, GALLERY_HINT, GALLERY_TITLE,
    HERO_BADGE, HERO_BODY, HERO_TITLE, MARQUEE_REPEATS, MARQUEE_TEXT, MENU, MENU_SUBTITLE,
    MENU_TITLE, NAV_ITEMS, ORDER_BUTTON_LABEL, SectionId,
};
use crate::foundation::core::Rect;
use crate::foundation::error::{PageError, PageResult};
use crate::frame::{LayerStyle, PageFrame};
use crate::layout::{HEADER_HEIGHT, PageLayout};
use crate::reveal::CardStyle;

const WHITE: &str = "#ffffff";
const NEUTRAL_50: &str = "#fafafa";
const NEUTRAL_200: &str = "#e5e5e5";
const NEUTRAL_600: &str = "#525252";
const NEUTRAL_900: &str = "#171717";
const RED_100: &str = "#fee2e2";
const RED_200: &str = "#fecaca";
const RED_600: &str = "#dc2626";
const RED_700: &str = "#b91c1c";
const AMBER_50: &str = "#fffbeb";

const PROGRESS_BAR_HEIGHT: f64 = 4.0;
const NAV_LINK_GAP: f64 = 28.0;
const CHAR_WIDTH: f64 = 8.0;
const PARALLAX_FILLS: [&str; 3] = [RED_200, "#fde68a", NEUTRAL_200];

/// Escape text for XML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the visible viewport of `frame` as a standalone SVG document.
///
/// Document content is drawn under a `translate(0 -scroll_y)` group; the sticky header,
/// progress bar, mobile nav and cart button are drawn in client space on top.
#[tracing::instrument(skip(layout, frame), fields(scroll_y = frame.scroll_y))]
pub fn render_svg(layout: &PageLayout, frame: &PageFrame) -> PageResult<String> {
    let mut out = String::new();
    write_document(&mut out, layout, frame).map_err(|_| PageError::render("format svg"))?;
    Ok(out)
}

fn write_document(out: &mut String, layout: &PageLayout, frame: &PageFrame) -> std::fmt::Result {
    let w = layout.viewport.width;
    let h = layout.viewport.height;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
    )?;
    rect(out, Rect::new(0.0, 0.0, w, h), WHITE, "")?;

    writeln!(out, r#"<g transform="translate(0 {:.2})">"#, -frame.scroll_y)?;
    for (id, r) in layout.sections() {
        match id {
            SectionId::Home => write_home(out, layout, frame, r)?,
            SectionId::Menu => write_menu(out, layout, frame, r)?,
            SectionId::About => write_about(out, layout, frame, r)?,
            SectionId::Photos => write_photos(out, layout, frame, r)?,
            SectionId::Contact => write_contact(out, layout, r)?,
        }
    }
    write_marquee(out, layout, frame)?;
    rect(out, layout.footer, NEUTRAL_900, "")?;
    text(
        out,
        layout.content_x[0],
        layout.footer.y0 + 64.0,
        14.0,
        NEUTRAL_200,
        &format!("{BRAND_MARK} {BRAND}"),
    )?;
    writeln!(out, "</g>")?;

    write_header(out, layout, frame)?;
    write_mobile_nav(out, layout, frame)?;
    write_cart(out, layout, frame)?;
    rect(
        out,
        Rect::new(0.0, 0.0, w * frame.progress.smoothed.get(), PROGRESS_BAR_HEIGHT),
        RED_600,
        r#" id="progress""#,
    )?;
    writeln!(out, "</svg>")
}

fn write_home(
    out: &mut String,
    layout: &PageLayout,
    frame: &PageFrame,
    section: Rect,
) -> std::fmt::Result {
    rect(out, section, RED_100, "")?;
    let Some(hero) = layout.hero_frame else {
        return Ok(());
    };
    // Sticky at the top of the viewport while its section scrolls past.
    let max_y = (section.y1 - hero.height()).max(section.y0);
    let top = frame.scroll_y.clamp(section.y0, max_y);
    let hero = hero.with_origin((hero.x0, top));

    writeln!(out, "<g{}>", layer_attrs(hero, frame.hero))?;
    let [cx0, cx1] = layout.content_x;
    let image = Rect::new(
        cx0 + (cx1 - cx0) / 2.0,
        hero.y0 + HEADER_HEIGHT + 40.0,
        cx1,
        hero.y1 - 80.0,
    );
    rect(out, image, RED_200, r#" rx="24""#)?;

    writeln!(
        out,
        r#"<g opacity="{:.3}" transform="translate(0 {:.2})">"#,
        frame.intro.opacity, frame.intro.translate_y
    )?;
    let y = hero.y0 + HEADER_HEIGHT + 80.0;
    text(out, cx0, y, 14.0, RED_700, HERO_BADGE)?;
    text(out, cx0, y + 56.0, 40.0, NEUTRAL_900, HERO_TITLE)?;
    text(out, cx0, y + 104.0, 16.0, NEUTRAL_600, HERO_BODY)?;
    writeln!(out, "</g>")?;
    writeln!(out, "</g>")
}

fn write_marquee(out: &mut String, layout: &PageLayout, frame: &PageFrame) -> std::fmt::Result {
    let strip = layout.marquee;
    let track_w = 2.0 * strip.width();
    let shift = track_w * frame.marquee_offset_pct / 100.0;
    writeln!(
        out,
        r#"<clipPath id="marquee-clip"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath>"#,
        strip.x0,
        strip.y0,
        strip.width(),
        strip.height()
    )?;
    rect(out, strip, RED_600, "")?;
    writeln!(
        out,
        r#"<g clip-path="url(#marquee-clip)"><g transform="translate({shift:.2} 0)">"#
    )?;
    let step = track_w / MARQUEE_REPEATS as f64;
    for i in 0..MARQUEE_REPEATS {
        text(
            out,
            strip.x0 + i as f64 * step,
            strip.y0 + 26.0,
            14.0,
            WHITE,
            MARQUEE_TEXT,
        )?;
    }
    writeln!(out, "</g></g>")
}

fn write_menu(
    out: &mut String,
    layout: &PageLayout,
    frame: &PageFrame,
    section: Rect,
) -> std::fmt::Result {
    rect(out, section, NEUTRAL_50, "")?;
    let x = layout.content_x[0];
    text(out, x, section.y0 + 136.0, 32.0, NEUTRAL_900, MENU_TITLE)?;
    text(out, x, section.y0 + 172.0, 16.0, NEUTRAL_600, MENU_SUBTITLE)?;

    for ((r, item), card) in layout.menu_cards.iter().zip(&MENU).zip(&frame.menu_cards) {
        writeln!(out, "<g{}>", card_attrs(*r, card.style))?;
        rect(out, *r, WHITE, r##" rx="24" stroke="#e5e5e5""##)?;
        let image = Rect::new(r.x0, r.y0, r.x1, r.y0 + r.width() * 0.75);
        rect(out, image, NEUTRAL_200, r#" rx="24""#)?;
        text(out, r.x0 + 20.0, image.y1 + 36.0, 18.0, NEUTRAL_900, item.name)?;
        text(out, r.x1 - 80.0, image.y1 + 36.0, 18.0, RED_600, item.price)?;
        text(out, r.x0 + 20.0, image.y1 + 64.0, 13.0, NEUTRAL_600, item.desc)?;
        writeln!(out, "</g>")?;
    }
    Ok(())
}

fn write_about(
    out: &mut String,
    layout: &PageLayout,
    frame: &PageFrame,
    section: Rect,
) -> std::fmt::Result {
    rect(out, section, AMBER_50, "")?;
    let top = layout.parallax_stack.map_or(section.y0, |s| s.y0 - 300.0);
    text(
        out,
        layout.content_x[0],
        top.max(section.y0) + 48.0,
        32.0,
        NEUTRAL_900,
        ABOUT_TITLE,
    )?;
    for ((r, style), fill) in layout
        .parallax_layers
        .iter()
        .zip(&frame.parallax)
        .zip(PARALLAX_FILLS)
    {
        writeln!(out, "<g{}>", layer_attrs(*r, *style))?;
        rect(out, *r, fill, r##" rx="24" stroke="#ffffff" stroke-width="4""##)?;
        writeln!(out, "</g>")?;
    }
    Ok(())
}

fn write_photos(
    out: &mut String,
    layout: &PageLayout,
    frame: &PageFrame,
    section: Rect,
) -> std::fmt::Result {
    rect(out, section, WHITE, "")?;
    let x = layout.content_x[0];
    text(out, x, section.y0 + 120.0, 32.0, NEUTRAL_900, GALLERY_TITLE)?;
    text(out, layout.content_x[1] - 200.0, section.y0 + 120.0, 13.0, NEUTRAL_600, GALLERY_HINT)?;
    let Some(gallery) = &layout.gallery else {
        return Ok(());
    };
    let s = gallery.scroller;
    writeln!(
        out,
        r#"<clipPath id="gallery-clip"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath>"#,
        s.x0,
        s.y0,
        s.width(),
        s.height()
    )?;
    writeln!(out, r#"<g clip-path="url(#gallery-clip)">"#)?;
    for (i, card) in frame.gallery.iter().enumerate() {
        let Some(r) = gallery.card_at(i, frame.gallery_scroll_x) else {
            continue;
        };
        writeln!(out, "<g{}>", card_attrs(r, card.style))?;
        rect(out, r, NEUTRAL_200, r#" rx="24""#)?;
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</g>")
}

fn write_contact(out: &mut String, layout: &PageLayout, section: Rect) -> std::fmt::Result {
    rect(out, section, NEUTRAL_50, "")?;
    let Some(form) = layout.contact_form else {
        return Ok(());
    };
    text(out, form.x0, form.y0 - 24.0, 32.0, NEUTRAL_900, CONTACT_TITLE)?;
    rect(out, form, WHITE, r##" rx="24" stroke="#e5e5e5""##)?;
    let mut y = form.y0 + 32.0;
    for height in [44.0, 44.0, 44.0, 120.0] {
        rect(
            out,
            Rect::new(form.x0 + 24.0, y, form.x1 - 24.0, y + height),
            NEUTRAL_50,
            r#" rx="12""#,
        )?;
        y += height + 16.0;
    }
    rect(
        out,
        Rect::new(form.x0 + 24.0, y, form.x0 + 184.0, y + 44.0),
        RED_600,
        r#" rx="22""#,
    )
}

fn write_header(out: &mut String, layout: &PageLayout, frame: &PageFrame) -> std::fmt::Result {
    let w = layout.viewport.width;
    let cx0 = layout.content_x[0];
    rect(
        out,
        Rect::new(0.0, 0.0, w, HEADER_HEIGHT),
        WHITE,
        r#" fill-opacity="0.9""#,
    )?;
    text(out, cx0, 40.0, 20.0, NEUTRAL_900, &format!("{BRAND_MARK} {BRAND}"))?;

    if let Some(button) = layout.order_button {
        // Links are laid out right to left, ending before the order button.
        let mut right = button.x0 - NAV_LINK_GAP;
        for link in frame.nav.iter().rev() {
            let lw = link.label.chars().count() as f64 * CHAR_WIDTH;
            let x0 = right - lw;
            let color = if link.active { RED_600 } else { NEUTRAL_600 };
            text(out, x0, 38.0, 14.0, color, link.label)?;
            if link.active {
                rect(out, Rect::new(x0, 46.0, right, 48.0), RED_600, r#" class="underline""#)?;
            }
            right = x0 - NAV_LINK_GAP;
        }

        let off = frame.magnet.offset;
        writeln!(
            out,
            r#"<g id="order" transform="translate({:.2} {:.2})">"#,
            off.x, off.y
        )?;
        rect(out, button, RED_600, r#" rx="20""#)?;
        text(out, button.x0 + 22.0, button.y0 + 25.0, 14.0, WHITE, ORDER_BUTTON_LABEL)?;
        writeln!(out, "</g>")?;
    }
    if let Some(toggle) = layout.nav_toggle {
        rect(out, toggle, WHITE, r##" rx="12" stroke="#e5e5e5""##)?;
        for i in 0..3 {
            let y = toggle.y0 + 13.0 + i as f64 * 6.0;
            rect(
                out,
                Rect::new(toggle.x0 + 12.0, y, toggle.x1 - 12.0, y + 2.0),
                NEUTRAL_900,
                "",
            )?;
        }
    }
    Ok(())
}

fn write_mobile_nav(out: &mut String, layout: &PageLayout, frame: &PageFrame) -> std::fmt::Result {
    if layout.nav_toggle.is_none() || !frame.mobile_nav_open {
        return Ok(());
    }
    let panel = Rect::new(
        0.0,
        HEADER_HEIGHT,
        layout.viewport.width,
        HEADER_HEIGHT + 16.0 + NAV_ITEMS.len() as f64 * 44.0,
    );
    rect(out, panel, WHITE, r#" id="mobile-nav""#)?;
    for (i, link) in frame.nav.iter().enumerate() {
        let color = if link.active { RED_600 } else { NEUTRAL_900 };
        text(
            out,
            layout.content_x[0],
            panel.y0 + 36.0 + i as f64 * 44.0,
            16.0,
            color,
            link.label,
        )?;
    }
    Ok(())
}

fn write_cart(out: &mut String, layout: &PageLayout, frame: &PageFrame) -> std::fmt::Result {
    if !frame.cart.rendered {
        return Ok(());
    }
    let b = layout.cart_button;
    writeln!(
        out,
        r#"<g id="cart" opacity="{:.3}" transform="translate(0 {:.2})">"#,
        frame.cart.opacity, frame.cart.translate_y
    )?;
    rect(out, b, RED_600, r#" rx="24""#)?;
    text(out, b.x0 + 24.0, b.y0 + 29.0, 14.0, WHITE, CART_BUTTON_LABEL)?;
    writeln!(out, "</g>")
}

/// Transform/opacity attributes for a layer: vertical percent translation, then scale about
/// the layer's center.
fn layer_attrs(r: Rect, style: LayerStyle) -> String {
    let ty = style.translate_y_pct / 100.0 * r.height();
    let c = r.center();
    format!(
        r#" opacity="{:.3}" transform="translate(0 {ty:.2}) translate({:.2} {:.2}) scale({:.4}) translate({:.2} {:.2})""#,
        style.opacity, c.x, c.y, style.scale, -c.x, -c.y
    )
}

fn card_attrs(r: Rect, style: CardStyle) -> String {
    let c = r.center();
    format!(
        r#" opacity="{:.3}" transform="translate(0 {:.2}) translate({:.2} {:.2}) scale({:.4}) translate({:.2} {:.2})""#,
        style.opacity, style.translate_y, c.x, c.y, style.scale, -c.x, -c.y
    )
}

fn rect(out: &mut String, r: Rect, fill: &str, extra: &str) -> std::fmt::Result {
    writeln!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{fill}"{extra}/>"#,
        r.x0,
        r.y0,
        r.width().max(0.0),
        r.height().max(0.0)
    )
}

fn text(out: &mut String, x: f64, y: f64, size: f64, fill: &str, s: &str) -> std::fmt::Result {
    writeln!(
        out,
        r#"<text x="{x:.2}" y="{y:.2}" font-size="{size}" fill="{fill}">{}</text>"#,
        escape_xml(s)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
