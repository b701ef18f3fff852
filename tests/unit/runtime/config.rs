use super::*;

#[test]
fn defaults_validate() {
    let cfg = EngineConfig::default();
    cfg.validate().unwrap();
    assert!((cfg.step_secs() - 1.0 / 60.0).abs() < 1e-15);
}

#[test]
fn zero_update_rate_is_rejected() {
    let cfg = EngineConfig {
        updates_per_second: 0.0,
        ..EngineConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("updates_per_second"));
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = EngineConfig::from_json_str(r#"{ "updates_per_second": 30, "view_width": 320 }"#)
        .unwrap();
    assert_eq!(cfg.updates_per_second, 30.0);
    assert_eq!(cfg.view_width, 320.0);
    assert_eq!(cfg.view_height, EngineConfig::default().view_height);
}

#[test]
fn bad_json_and_bad_values_are_errors() {
    assert!(matches!(
        EngineConfig::from_json_str("{ not json"),
        Err(SceneError::Other(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "view_height": -1 }"#),
        Err(SceneError::Validation(_))
    ));
    assert!(EngineConfig::from_json_str(r#"{ "max_updates_per_frame": 0 }"#).is_err());
}
