use super::*;

#[test]
fn progress_is_clamped_and_finite() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(1.7).get(), 1.0);
    assert_eq!(Progress::new(f64::NAN).get(), 0.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
}

#[test]
fn progress_through_degenerate_range_is_zero() {
    assert_eq!(Progress::through(10.0, 5.0, 5.0), Progress::ZERO);
    assert_eq!(Progress::through(10.0, 5.0, 0.0), Progress::ZERO);
    assert_eq!(Progress::through(7.5, 5.0, 10.0).get(), 0.5);
}

#[test]
fn breakpoints_follow_min_widths() {
    assert_eq!(Breakpoint::for_width(375.0), Breakpoint::Base);
    assert_eq!(Breakpoint::for_width(640.0), Breakpoint::Sm);
    assert_eq!(Breakpoint::for_width(800.0), Breakpoint::Md);
    assert_eq!(Breakpoint::for_width(1024.0), Breakpoint::Lg);
}

#[test]
fn viewport_rejects_non_positive_sides() {
    assert!(Viewport::new(0.0, 10.0).is_err());
    assert!(Viewport::new(10.0, f64::INFINITY).is_err());
    let v = Viewport::new(100.0, 50.0).unwrap();
    assert_eq!(v.rect_at(20.0), Rect::new(0.0, 20.0, 100.0, 70.0));
}

#[test]
fn progress_deserialize_clamps() {
    let p: Progress = serde_json::from_str("3.0").unwrap();
    assert_eq!(p, Progress::ONE);
}
