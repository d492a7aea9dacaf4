//! Loading detector settings from configuration

use std::sync::Arc;

use rustsim_events::prelude::*;
use rustsim_events::utils::constants::{EVT_ITERATIONS_MAX, EVT_MAX_CHECK, EVT_THRESHOLD};

#[test]
fn test_settings_from_json() {
    let json = r#"{ "max_check_interval": 60.0, "threshold": 1e-3, "max_iteration_count": 20 }"#;
    let settings: DetectorSettings = serde_json::from_str(json).unwrap();

    assert_eq!(settings, DetectorSettings::new(60.0, 1e-3, 20).unwrap());
}

#[test]
fn test_missing_fields_use_defaults() {
    let settings: DetectorSettings = serde_json::from_str(r#"{ "threshold": 1e-9 }"#).unwrap();

    assert_eq!(settings.max_check_interval(), EVT_MAX_CHECK);
    assert_eq!(settings.threshold(), 1e-9);
    assert_eq!(settings.max_iteration_count(), EVT_ITERATIONS_MAX);

    let settings: DetectorSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.threshold(), EVT_THRESHOLD);
}

#[test]
fn test_invalid_settings_rejected_on_load() {
    let negative = serde_json::from_str::<DetectorSettings>(r#"{ "max_check_interval": -1.0 }"#);
    let err = negative.unwrap_err().to_string();
    assert!(err.contains("max_check_interval"), "{err}");

    let zero_iter = serde_json::from_str::<DetectorSettings>(r#"{ "max_iteration_count": 0 }"#);
    assert!(zero_iter.is_err());
}

#[test]
fn test_settings_roundtrip() {
    let settings = DetectorSettings::new(120.0, 1e-4, 50).unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let back: DetectorSettings = serde_json::from_str(&json).unwrap();

    assert_eq!(back, settings);
}

#[test]
fn test_configured_override_of_reconciled_settings() {
    // Composite settings come from the operands unless configuration says otherwise
    let a = AtomicDetector::new(ComponentThreshold::new(0, 0.0));
    let b = AtomicDetector::new(ComponentThreshold::new(1, 0.0))
        .with_max_check_interval(30.0)
        .unwrap();
    let and = and![a, b].unwrap();
    assert_eq!(and.max_check_interval(), 30.0);

    let configured: DetectorSettings = serde_json::from_str(r#"{ "max_check_interval": 300.0 }"#).unwrap();
    let handler = Arc::clone(and.handler());
    let and = and.with_settings(configured, handler);

    assert_eq!(and.max_check_interval(), 300.0);
    assert_eq!(and.operands().len(), 2);
}

#[test]
fn test_reducer_and_action_are_serializable() {
    assert_eq!(serde_json::to_string(&Reducer::Min).unwrap(), r#""Min""#);
    assert_eq!(serde_json::from_str::<Reducer>(r#""Max""#).unwrap(), Reducer::Max);
    assert_eq!(serde_json::to_string(&Action::Stop).unwrap(), r#""Stop""#);
    assert_eq!(serde_json::to_string(&Epoch::from_seconds(1.5)).unwrap(), "1.5");
}
