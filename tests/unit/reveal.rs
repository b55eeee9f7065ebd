use super::*;
use crate::animation::ease::Ease;

fn spring() -> SpringSpec {
    SpringSpec::new(120.0, 14.0, 1.0)
}

fn settle(r: &mut MenuReveal) {
    for _ in 0..600 {
        r.tick(1.0 / 60.0);
    }
}

#[test]
fn menu_card_needs_to_pass_the_margin() {
    let mut r = MenuReveal::new(1, spring(), 0.05, 80.0);
    let visible = Rect::new(0.0, 0.0, 1000.0, 800.0);
    r.update(&[Rect::new(0.0, 750.0, 300.0, 1100.0)], visible);
    assert!(!r.is_revealed(0));
    r.update(&[Rect::new(0.0, 700.0, 300.0, 1050.0)], visible);
    assert!(r.is_revealed(0));
}

#[test]
fn menu_reveal_is_latched() {
    let mut r = MenuReveal::new(1, spring(), 0.0, 0.0);
    let card = [Rect::new(0.0, 100.0, 10.0, 200.0)];
    r.update(&card, Rect::new(0.0, 0.0, 10.0, 800.0));
    settle(&mut r);
    r.update(&card, Rect::new(0.0, 5000.0, 10.0, 5800.0));
    assert!(r.is_revealed(0));
    assert_eq!(r.style(0).opacity, 1.0);
    assert_eq!(r.style(0).translate_y, 0.0);
    assert_eq!(r.style(0).scale, 1.0);
}

#[test]
fn stagger_delays_later_cards() {
    let mut r = MenuReveal::new(3, spring(), 0.05, 0.0);
    let cards = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(20.0, 0.0, 30.0, 10.0),
        Rect::new(40.0, 0.0, 50.0, 10.0),
    ];
    r.update(&cards, Rect::new(0.0, 0.0, 100.0, 100.0));
    r.tick(0.06);
    assert!(r.style(0).opacity > 0.0);
    assert_eq!(r.style(2).opacity, 0.0);
    assert_eq!(r.style(2).translate_y, 24.0);
}

#[test]
fn gallery_cards_toggle_with_visibility() {
    let mut g = GalleryFocus::new(2, Motion::tween(0.3, Ease::EaseInOut), 0.5);
    let cards = [Rect::new(0.0, 0.0, 100.0, 100.0), Rect::new(120.0, 0.0, 220.0, 100.0)];
    g.update(&cards, Rect::new(0.0, 0.0, 160.0, 100.0));
    assert!(g.in_view(0));
    assert!(!g.in_view(1));
    assert_eq!(g.style(1).opacity, 0.6);
    for _ in 0..30 {
        g.tick(1.0 / 60.0);
    }
    assert_eq!(g.style(0).opacity, 1.0);
    g.update(&cards, Rect::new(500.0, 0.0, 600.0, 100.0));
    assert!(!g.in_view(0));
}
