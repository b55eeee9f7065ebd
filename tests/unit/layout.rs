use super::*;

fn desktop() -> PageLayout {
    PageLayout::compute(Viewport::default())
}

#[test]
fn sections_are_contiguous_in_document_order() {
    let l = desktop();
    let rects: Vec<Rect> = SectionId::ALL.iter().map(|s| l.section(*s).unwrap()).collect();
    assert_eq!(rects[0].y0, HEADER_HEIGHT);
    assert_eq!(rects[1].y0, rects[0].y1 + MARQUEE_HEIGHT);
    for pair in rects[1..].windows(2) {
        assert_eq!(pair[0].y1, pair[1].y0);
    }
    assert_eq!(l.footer.y0, rects[4].y1);
    assert_eq!(l.document_height, l.footer.y1);
}

#[test]
fn tall_sections_scale_with_viewport_height() {
    let l = desktop();
    assert_eq!(l.section(SectionId::Home).unwrap().height(), 1.4 * 800.0);
    assert_eq!(l.section(SectionId::About).unwrap().height(), 1.6 * 800.0);
    assert_eq!(l.hero_frame.unwrap().height(), 800.0);
}

#[test]
fn menu_grid_columns_follow_breakpoints() {
    let lg = desktop();
    assert_eq!(lg.menu_cards[0].y0, lg.menu_cards[2].y0);
    assert!(lg.menu_cards[3].y0 > lg.menu_cards[0].y0);

    let md = PageLayout::compute(Viewport::new(800.0, 900.0).unwrap());
    assert_eq!(md.menu_cards[0].y0, md.menu_cards[1].y0);
    assert!(md.menu_cards[2].y0 > md.menu_cards[1].y0);

    let base = PageLayout::compute(Viewport::new(390.0, 844.0).unwrap());
    for pair in base.menu_cards.windows(2) {
        assert!(pair[1].y0 > pair[0].y0);
    }
}

#[test]
fn order_button_only_on_wide_viewports() {
    assert!(desktop().order_button.is_some());
    assert!(desktop().nav_toggle.is_none());
    let phone = PageLayout::compute(Viewport::new(390.0, 844.0).unwrap());
    assert!(phone.order_button.is_none());
    assert!(phone.nav_toggle.is_some());
}

#[test]
fn missing_sections_drop_their_elements() {
    let l = PageLayout::compute_with(Viewport::default(), &[SectionId::Home, SectionId::Menu]);
    assert!(l.section(SectionId::About).is_none());
    assert!(l.parallax_stack.is_none());
    assert!(l.gallery.is_none());
    assert!(l.contact_form.is_none());
    assert_eq!(l.sections().count(), 2);
}

#[test]
fn gallery_scroll_range_covers_overflowing_track() {
    let l = desktop();
    let g = l.gallery.as_ref().unwrap();
    let track = g.cards.last().unwrap().x1;
    assert_eq!(g.max_scroll_x, track - g.scroller.width());
    let first = g.card_at(0, 100.0).unwrap();
    assert_eq!(first.x0, g.scroller.x0 - 100.0);
    assert!(g.card_at(9, 0.0).is_none());
}

#[test]
fn anchor_scroll_is_clamped_to_document() {
    let l = desktop();
    assert_eq!(l.anchor_scroll_y(SectionId::Home), Some(HEADER_HEIGHT));
    let contact = l.anchor_scroll_y(SectionId::Contact).unwrap();
    assert!(contact <= l.max_scroll_y());
    assert_eq!(l.clamp_scroll_y(-50.0), 0.0);
    assert_eq!(l.clamp_scroll_y(f64::NAN), 0.0);
}

#[test]
fn parallax_layers_sit_inside_the_stack() {
    let l = desktop();
    let stack = l.parallax_stack.unwrap();
    assert_eq!(l.parallax_layers.len(), 3);
    for layer in &l.parallax_layers {
        assert!(layer.x0 >= stack.x0 && layer.x1 <= stack.x1);
    }
}
