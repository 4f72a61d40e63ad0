use super::*;

#[test]
fn partial_config_keeps_defaults() {
    let cfg = RulesConfig::from_json_str(
        r#"{"spacing": {"max_half_step_usage": 2}, "contrast": {}, "unknown": 1}"#,
    )
    .unwrap();
    assert_eq!(cfg.spacing.max_half_step_usage, 2);
    assert_eq!(cfg.contrast, ContrastConfig::default());
    assert_eq!(cfg.hierarchy.min_primary_cta_size, 120);
    assert!(cfg.enabled.is_none());
}

#[test]
fn enabled_list_and_errors() {
    let cfg = RulesConfig::from_json_str(r#"{"enabled": ["focus"]}"#).unwrap();
    assert_eq!(cfg.enabled, Some(vec!["focus".to_owned()]));
    let err = RulesConfig::from_json_str("{").unwrap_err();
    assert!(err.to_string().starts_with("serialization error: rules config"));
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(&path, r#"{"touch_targets": {"min_size": 48}}"#).unwrap();
    let cfg = RulesConfig::from_path(&path).unwrap();
    assert_eq!(cfg.touch_targets.min_size, 48);
    assert_eq!(cfg.touch_targets.min_spacing, 8);
    assert!(RulesConfig::from_path(&dir.path().join("missing.json")).is_err());
}
