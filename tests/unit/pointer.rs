use super::*;

fn magnet() -> Magnet {
    Magnet::new(0.15, SpringSpec::new(200.0, 12.0, 1.0))
}

#[test]
fn move_targets_damped_vector_to_center() {
    let mut m = magnet();
    let bounds = Rect::new(100.0, 10.0, 220.0, 50.0);
    m.pointer_move(Point::new(200.0, 40.0), Some(bounds));
    let raw = Point::new(200.0, 40.0) - bounds.center();
    assert_eq!(m.target(), raw * 0.15);
    assert_eq!(m.target(), Vec2::new(40.0 * 0.15, 10.0 * 0.15));
}

#[test]
fn leave_resets_target_and_spring_returns_home() {
    let mut m = magnet();
    m.pointer_move(Point::new(0.0, 0.0), Some(Rect::new(0.0, 0.0, 100.0, 40.0)));
    for _ in 0..10 {
        m.tick(1.0 / 60.0);
    }
    assert_ne!(m.offset(), Vec2::ZERO);
    m.pointer_leave();
    assert_eq!(m.target(), Vec2::ZERO);
    for _ in 0..600 {
        m.tick(1.0 / 60.0);
    }
    assert_eq!(m.offset(), Vec2::ZERO);
}

#[test]
fn missing_control_is_a_no_op() {
    let mut m = magnet();
    m.pointer_move(Point::new(50.0, 50.0), None);
    assert_eq!(m.target(), Vec2::ZERO);
}

#[test]
fn offset_lags_target_right_after_move() {
    let mut m = magnet();
    m.pointer_move(Point::new(120.0, 20.0), Some(Rect::new(0.0, 0.0, 40.0, 40.0)));
    assert_eq!(m.offset(), Vec2::ZERO);
    m.tick(1.0 / 60.0);
    let o = m.offset();
    assert!(o.x > 0.0 && o.x < m.target().x);
}
