//! Tests for `evident.toml` loading and effective defaults.

use std::path::PathBuf;

use evident_core::config::EvidentConfig;
use evident_core::constants;
use evident_core::errors::ConfigError;

#[test]
fn test_defaults_when_empty() {
    let config = EvidentConfig::from_toml_str("", "inline").unwrap();
    assert_eq!(config.scoring.effective_covered_threshold(), 60);
    assert_eq!(config.scoring.effective_partial_threshold(), 30);
    assert_eq!(config.trace.effective_lookahead(), 5);
    assert_eq!(config.trace.effective_lookbehind(), 2);
    assert_eq!(config.gates.effective_confidence_baseline(), 25.0);
    assert_eq!(config.gates.effective_heavy_weight(), 4);
    assert!(config.gates.strict.is_empty());
    assert_eq!(
        config.output.effective_registry(),
        PathBuf::from(constants::DEFAULT_REGISTRY_PATH)
    );
    assert!(config
        .scan
        .effective_exclude_dirs()
        .contains(&"node_modules".to_string()));
}

#[test]
fn test_overrides_are_applied() {
    let text = r#"
[scan]
roots = ["app", "lib"]
extensions = ["ts"]

[scoring]
covered_threshold = 70
partial_threshold = 40

[trace]
export_keywords = ["export"]

[gates]
strict = ["G1", "g2"]

[output]
ledger = "out/ledger.json"
"#;
    let config = EvidentConfig::from_toml_str(text, "inline").unwrap();
    assert_eq!(
        config.scan.effective_roots(),
        vec![PathBuf::from("app"), PathBuf::from("lib")]
    );
    assert_eq!(config.scan.effective_extensions(), vec!["ts".to_string()]);
    assert_eq!(config.scoring.effective_covered_threshold(), 70);
    assert_eq!(config.scoring.effective_partial_threshold(), 40);
    assert_eq!(config.trace.effective_export_keywords(), vec!["export".to_string()]);
    assert!(config.gates.is_strict("G1"));
    assert!(config.gates.is_strict("G2"));
    assert!(!config.gates.is_strict("G3"));
    assert_eq!(config.output.effective_ledger(), PathBuf::from("out/ledger.json"));
}

#[test]
fn test_partial_above_covered_rejected() {
    let text = "[scoring]\ncovered_threshold = 50\npartial_threshold = 55\n";
    let err = EvidentConfig::from_toml_str(text, "inline").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "scoring.partial_threshold"));
}

#[test]
fn test_unknown_strict_gate_rejected() {
    let err = EvidentConfig::from_toml_str("[gates]\nstrict = [\"G9\"]\n", "inline").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "gates.strict"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = EvidentConfig::from_toml_str("[scan\nroots = 3", "evident.toml").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == "evident.toml"));
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = EvidentConfig::load_or_default(&dir.path().join("evident.toml")).unwrap();
    assert_eq!(config.scoring.effective_covered_threshold(), 60);

    let err = EvidentConfig::load(&dir.path().join("evident.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_load_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("evident.toml");
    std::fs::write(&path, "[gates]\nconfidence_baseline = 40.0\n").unwrap();
    let config = EvidentConfig::load_or_default(&path).unwrap();
    assert_eq!(config.gates.effective_confidence_baseline(), 40.0);
}
