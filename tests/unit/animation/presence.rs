use super::*;

fn tick_for(p: &mut Presence, secs: f64) {
    let steps = (secs * 60.0).round() as usize;
    for _ in 0..steps {
        p.tick(1.0 / 60.0);
    }
}

#[test]
fn tween_reaches_target_after_duration() {
    let mut p = Presence::hidden(Motion::tween(0.6, Ease::Linear));
    p.set_shown(true);
    tick_for(&mut p, 0.3);
    assert!((p.value() - 0.5).abs() < 0.02);
    tick_for(&mut p, 0.35);
    assert_eq!(p.value(), 1.0);
    assert!(p.is_settled());
}

#[test]
fn delay_holds_value_before_starting() {
    let mut p = Presence::hidden(Motion::tween(0.2, Ease::Linear)).with_delay(0.25);
    p.set_shown(true);
    tick_for(&mut p, 0.2);
    assert_eq!(p.value(), 0.0);
    tick_for(&mut p, 0.5);
    assert_eq!(p.value(), 1.0);
}

#[test]
fn spring_presence_shows_and_hides() {
    let mut p = Presence::hidden(Motion::Spring(SpringSpec::new(180.0, 18.0, 1.0)));
    p.set_shown(true);
    tick_for(&mut p, 3.0);
    assert_eq!(p.value(), 1.0);
    p.set_shown(false);
    tick_for(&mut p, 3.0);
    assert_eq!(p.value(), 0.0);
    assert!(!p.is_shown());
}

#[test]
fn retarget_mid_tween_starts_from_current_value() {
    let mut p = Presence::hidden(Motion::tween(1.0, Ease::Linear));
    p.set_shown(true);
    tick_for(&mut p, 0.5);
    let mid = p.value();
    p.set_shown(false);
    p.tick(1.0 / 60.0);
    assert!(p.value() < mid);
    assert!(p.value() > 0.0);
}

#[test]
fn motion_json_is_tagged() {
    let m: Motion =
        serde_json::from_str(r#"{"type":"tween","duration_secs":0.3,"ease":"ease_in_out"}"#).unwrap();
    assert_eq!(m, Motion::tween(0.3, Ease::EaseInOut));
}
