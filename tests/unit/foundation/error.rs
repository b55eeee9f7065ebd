use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PageError::config("x").to_string().contains("config error:"));
    assert!(PageError::render("x").to_string().contains("render error:"));
    assert!(
        PageError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: PageError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, PageError::Serde(_)));
}
