//! Tests for the config module

use super::loader::*;
use super::types::*;
use crate::domain::value_objects::Track;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.deploy.track, Track::Internal);
    assert_eq!(config.api.base_url, "https://androidpublisher.googleapis.com");
    assert_eq!(config.api.token_uri, "https://oauth2.googleapis.com/token");
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
    assert!(config.output.github_annotations);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[deploy]
track = "beta"

[api]
base_url = "http://localhost:8080"

[output]
color = "never"
github_annotations = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.deploy.track, Track::Beta);
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.token_uri, "https://oauth2.googleapis.com/token");
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.github_annotations);
}

#[test]
fn test_config_rejects_unknown_track() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playdeploy.toml");
    fs::write(&path, "[deploy]\ntrack = \"staging\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("playdeploy.toml"));
}

#[test]
fn test_load_with_warnings_reports_unknown_keys_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playdeploy.toml");
    fs::write(&path, "[deploy]\ntrak = \"beta\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.deploy.track, Track::Internal);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "trak");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("track"));
    assert!(warnings[0].to_string().contains("did you mean 'track'?"));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_or_default(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_project_config_is_discovered_in_cwd() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[deploy]\ntrack = \"alpha\"\n").unwrap();

    assert_eq!(
        discover_config_path(None, dir.path()),
        Some(dir.path().join(PROJECT_CONFIG_FILE))
    );
    let (config, warnings) = load_with_warnings(&dir.path().join(PROJECT_CONFIG_FILE)).unwrap();
    assert_eq!(config.deploy.track, Track::Alpha);
    assert!(warnings.is_empty());
}

#[test]
fn test_env_override_track() {
    let config = with_env_overrides_from(Config::default(), env(&[("PLAYDEPLOY_TRACK", "Production")]));
    assert_eq!(config.deploy.track, Track::Production);
}

#[test]
fn test_env_override_invalid_track_is_ignored() {
    let mut base = Config::default();
    base.deploy.track = Track::Beta;

    let config = with_env_overrides_from(base, env(&[("PLAYDEPLOY_TRACK", "nightly")]));
    assert_eq!(config.deploy.track, Track::Beta);
}

#[test]
fn test_env_override_endpoints() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("PLAYDEPLOY_API_BASE_URL", "http://127.0.0.1:9000"),
            ("PLAYDEPLOY_TOKEN_URI", "http://127.0.0.1:9000/token"),
        ]),
    );
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.api.token_uri, "http://127.0.0.1:9000/token");
}

#[test]
fn test_env_override_output() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("PLAYDEPLOY_COLOR", "always"),
            ("PLAYDEPLOY_GITHUB_ANNOTATIONS", "0"),
        ]),
    );
    assert_eq!(config.output.color, ColorMode::Always);
    assert!(!config.output.github_annotations);
}
