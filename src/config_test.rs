use super::*;

#[test]
fn defaults_when_unset() {
    let config = EngineConfig::from_values(None, None).unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.viewport, Viewport::Desktop);
    assert_eq!(config.highlight, "#3b82f6");
}

#[test]
fn parses_viewport_case_insensitively() {
    let config = EngineConfig::from_values(Some(" Tablet "), None).unwrap();
    assert_eq!(config.viewport, Viewport::Tablet);
}

#[test]
fn rejects_unknown_viewport() {
    let err = EngineConfig::from_values(Some("watch"), None).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: VIEWPORT_VAR, .. }));
    assert!(err.to_string().contains("watch"));
}

#[test]
fn accepts_short_hex_highlight() {
    let config = EngineConfig::from_values(None, Some("#f0f")).unwrap();
    assert_eq!(config.highlight, "#f0f");
}

#[test]
fn rejects_named_highlight() {
    let err = EngineConfig::from_values(None, Some("hotpink")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: HIGHLIGHT_VAR, .. }));
}
