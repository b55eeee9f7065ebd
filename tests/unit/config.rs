use super::*;

#[test]
fn defaults_are_valid_and_match_page_constants() {
    let cfg = PageConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.section_threshold, 0.5);
    assert_eq!(cfg.cart_threshold, 0.15);
    assert_eq!(cfg.magnet_factor, 0.15);
    assert_eq!(cfg.progress_spring, Some(SpringSpec::new(140.0, 25.0, 0.3)));
}

#[test]
fn partial_json_overrides_keep_other_defaults() {
    let cfg = PageConfig::from_json_str(
        r#"{ "viewport": { "width": 390, "height": 844 }, "progress_spring": null }"#,
    )
    .unwrap();
    assert_eq!(cfg.viewport.width, 390.0);
    assert!(cfg.progress_spring.is_none());
    assert_eq!(cfg.cart_threshold, 0.15);
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let err = PageConfig::from_json_str(r#"{ "cart_threshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
    assert!(err.to_string().contains("cart_threshold"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PageConfig::from_json_str(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(matches!(err, PageError::Serde(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = PageConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
