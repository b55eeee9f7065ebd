use super::*;

#[test]
fn endpoints_are_exact() {
    let m = MapRange::unit(1.0, 0.6);
    assert_eq!(m.sample(0.0), 1.0);
    assert_eq!(m.sample(1.0), 0.6);
}

#[test]
fn interior_matches_linear_interpolation() {
    let m = MapRange::unit(-30.0, 20.0);
    for i in 0..=20 {
        let p = f64::from(i) / 20.0;
        let expected = -30.0 + 50.0 * p;
        assert!((m.sample(p) - expected).abs() < 1e-12, "p={p}");
    }
}

#[test]
fn clamp_holds_endpoints_outside_input() {
    let m = MapRange::unit(0.0, -30.0);
    assert_eq!(m.sample(-0.5), 0.0);
    assert_eq!(m.sample(1.5), -30.0);
}

#[test]
fn extrapolate_continues_the_line() {
    let m = MapRange::unit(0.0, 10.0).with_overflow(Overflow::Extrapolate);
    assert_eq!(m.sample(1.5), 15.0);
    assert_eq!(m.sample(-0.5), -5.0);
}

#[test]
fn custom_input_range_and_vec2_output() {
    let m = MapRange {
        input: [100.0, 300.0],
        output: [Vec2::new(0.0, 0.0), Vec2::new(10.0, -20.0)],
        overflow: Overflow::Clamp,
    };
    assert_eq!(m.sample(200.0), Vec2::new(5.0, -10.0));
}

#[test]
fn degenerate_input_range_returns_first_output() {
    let m = MapRange {
        input: [0.5, 0.5],
        output: [3.0, 4.0],
        overflow: Overflow::Clamp,
    };
    assert_eq!(m.sample(0.5), 3.0);
    assert_eq!(m.sample(f64::NAN), 3.0);
}

#[test]
fn overflow_deserializes_snake_case() {
    let o: Overflow = serde_json::from_str("\"extrapolate\"").unwrap();
    assert_eq!(o, Overflow::Extrapolate);
}
