use super::*;

fn run(state: &mut SpringState, spec: &SpringSpec, secs: f64) {
    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    while t < secs {
        state.step(spec, dt);
        t += dt;
    }
}

#[test]
fn converges_to_target_and_settles() {
    let spec = SpringSpec::new(140.0, 25.0, 0.3);
    let mut s = SpringState::at(0.0);
    s.set_target(1.0);
    run(&mut s, &spec, 3.0);
    assert_eq!(s.value, 1.0);
    assert!(s.is_at_rest());
}

#[test]
fn underdamped_spring_overshoots() {
    let spec = SpringSpec::new(200.0, 12.0, 1.0);
    assert!(spec.damping_ratio() < 1.0);
    let mut s = SpringState::at(0.0);
    s.set_target(10.0);
    let mut peak = f64::MIN;
    for _ in 0..120 {
        s.step(&spec, 1.0 / 60.0);
        peak = peak.max(s.value);
    }
    assert!(peak > 10.0);
}

#[test]
fn invalid_dt_does_not_move() {
    let spec = SpringSpec::new(100.0, 10.0, 1.0);
    let mut s = SpringState::at(0.0);
    s.set_target(5.0);
    assert!(!s.step(&spec, f64::NAN));
    assert!(!s.step(&spec, -1.0));
    assert_eq!(s.value, 0.0);
}

#[test]
fn non_finite_target_is_ignored() {
    let mut s = SpringState::at(2.0);
    s.set_target(f64::INFINITY);
    assert_eq!(s.target, 2.0);
}

#[test]
fn validate_rejects_bad_parameters() {
    assert!(SpringSpec::new(0.0, 1.0, 1.0).validate().is_err());
    assert!(SpringSpec::new(1.0, -1.0, 1.0).validate().is_err());
    assert!(SpringSpec::new(1.0, 1.0, 0.0).validate().is_err());
    assert!(SpringSpec::new(140.0, 25.0, 0.3).validate().is_ok());
}

#[test]
fn vec2_spring_returns_to_zero() {
    let spec = SpringSpec::new(200.0, 12.0, 1.0);
    let mut s = SpringVec2::default();
    s.set_target(Vec2::new(6.0, -3.0));
    for _ in 0..30 {
        s.step(&spec, 1.0 / 60.0);
    }
    assert!(s.value().x > 0.0);
    s.set_target(Vec2::ZERO);
    let mut settled = false;
    for _ in 0..600 {
        settled = s.step(&spec, 1.0 / 60.0);
        if settled {
            break;
        }
    }
    assert!(settled);
    assert_eq!(s.value(), Vec2::ZERO);
}

#[test]
fn spec_defaults_fill_from_json() {
    let spec: SpringSpec = serde_json::from_str(r#"{"stiffness":120,"damping":14}"#).unwrap();
    assert_eq!(spec.mass, 1.0);
    assert_eq!(spec.rest_delta, 0.001);
}
