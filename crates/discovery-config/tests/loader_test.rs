use discovery_config::loader::file::load_from_file;
use discovery_config::{Config, ConfigError, OutputFormat};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn load_toml_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".discovery.toml");
    fs::write(
        &path,
        r#"
[personas.learner]
popularity = 0.30
community = 0.30
velocity = 0.10
maturity = 0.25
risk = 0.05

[output]
top_n = 5
format = "json"
"#,
    )
    .unwrap();

    let config = load_from_file(&path).unwrap();
    assert_eq!(config.personas.learner.popularity, 0.30);
    assert_eq!(config.personas.learner.community, 0.30);
    assert_eq!(config.personas.contributor, Config::default().personas.contributor);
    assert_eq!(config.output.top_n, 5);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn load_yaml_and_json_agree() {
    let dir = tempdir().unwrap();
    let yaml_path = dir.path().join("config.yml");
    let json_path = dir.path().join("config.json");
    fs::write(&yaml_path, "cold_start:\n  enabled: false\n  window_days: 90\n").unwrap();
    fs::write(
        &json_path,
        r#"{"cold_start": {"enabled": false, "window_days": 90}}"#,
    )
    .unwrap();

    let from_yaml = load_from_file(&yaml_path).unwrap();
    let from_json = load_from_file(&json_path).unwrap();
    assert_eq!(from_yaml, from_json);
    assert!(!from_yaml.cold_start.enabled);
}

#[test]
fn weights_not_summing_to_one_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        r#"
[personas.contributor]
popularity = 0.5
community = 0.5
velocity = 0.5
maturity = 0.0
risk = 0.0
"#,
    )
    .unwrap();

    let err = load_from_file(&path).unwrap_err();
    match err {
        ConfigError::InvalidWeightSum { field, actual, .. } => {
            assert_eq!(field, "personas.contributor");
            assert!((actual - 1.5).abs() < 1e-9);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "top_n=3").unwrap();
    assert!(matches!(
        load_from_file(&path),
        Err(ConfigError::UnknownFormat { .. })
    ));
}

#[test]
fn toml_syntax_error_points_at_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[output]\ntop_n = = 3\n").unwrap();
    let err = load_from_file(&path).unwrap_err().to_string();
    assert!(err.contains("broken.toml"));
    assert!(err.contains("top_n = = 3"));
}
