use super::*;

const CURVES: [Ease; 5] = [
    Ease::Linear,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::CubicBezier([0.25, 0.1, 0.25, 1.0]),
];

#[test]
fn endpoints_are_exact() {
    for ease in CURVES {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in CURVES {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= last, "{ease:?} at {i}");
            last = v;
        }
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let e = Ease::EaseInOut;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
    for t in [0.1, 0.2, 0.3, 0.4] {
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-6);
    }
    assert!(e.apply(0.25) < 0.25);
}

#[test]
fn ease_in_lags_and_ease_out_leads() {
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
}

#[test]
fn bezier_matches_reference_values() {
    // CSS `ease`: y(0.5) is about 0.8024.
    let ease = Ease::CubicBezier([0.25, 0.1, 0.25, 1.0]);
    assert!((ease.apply(0.5) - 0.8024).abs() < 1e-3);
    // Diagonal controls reduce to linear.
    let diagonal = Ease::CubicBezier([0.3, 0.3, 0.7, 0.7]);
    assert_eq!(diagonal.apply(0.37), 0.37);
}

#[test]
fn out_of_range_time_is_clamped() {
    assert_eq!(Ease::EaseOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseOut.apply(3.0), 1.0);
    assert_eq!(Ease::EaseInOut.apply(f64::NAN), 0.0);
}

#[test]
fn default_is_ease_in_out_and_serializes_snake_case() {
    assert_eq!(Ease::default(), Ease::EaseInOut);
    assert_eq!(serde_json::to_string(&Ease::EaseOut).unwrap(), r#""ease_out""#);
    let custom: Ease = serde_json::from_str(r#"{"cubic_bezier":[0.4,0.0,0.2,1.0]}"#).unwrap();
    assert_eq!(custom, Ease::CubicBezier([0.4, 0.0, 0.2, 1.0]));
}
