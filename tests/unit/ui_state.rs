use super::*;

#[test]
fn cart_flips_exactly_at_threshold_crossings() {
    let mut f = UiFlags::default();
    assert!(!f.update_cart(Progress::new(0.10), 0.15));
    assert!(!f.update_cart(Progress::new(0.15), 0.15));
    assert!(!f.cart_visible);
    assert!(f.update_cart(Progress::new(0.151), 0.15));
    assert!(f.cart_visible);
    assert!(!f.update_cart(Progress::new(0.9), 0.15));
    assert!(f.update_cart(Progress::new(0.149), 0.15));
    assert!(!f.cart_visible);
}

#[test]
fn no_hysteresis_around_threshold() {
    let mut f = UiFlags::default();
    let mut flips = 0;
    for p in [0.16, 0.14, 0.16, 0.14] {
        if f.update_cart(Progress::new(p), 0.15) {
            flips += 1;
        }
    }
    assert_eq!(flips, 4);
}

#[test]
fn mobile_nav_only_closes_on_toggle_or_link() {
    let mut f = UiFlags::default();
    f.toggle_mobile_nav();
    assert!(f.mobile_nav_open);
    f.update_cart(Progress::new(0.5), 0.15);
    assert!(f.mobile_nav_open);
    f.nav_link_selected();
    assert!(!f.mobile_nav_open);
    f.nav_link_selected();
    assert!(!f.mobile_nav_open);
}

#[test]
fn cart_button_slides_in_and_out() {
    let mut b = CartButton::new(SpringSpec::new(180.0, 18.0, 1.0));
    assert!(!b.is_rendered());
    assert_eq!(b.translate_y(), CART_SLIDE);
    b.set_visible(true);
    for _ in 0..180 {
        b.tick(1.0 / 60.0);
    }
    assert_eq!(b.translate_y(), 0.0);
    assert_eq!(b.opacity(), 1.0);
    b.set_visible(false);
    b.tick(1.0 / 60.0);
    assert!(b.is_rendered());
    for _ in 0..180 {
        b.tick(1.0 / 60.0);
    }
    assert!(!b.is_rendered());
}
