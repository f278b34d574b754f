//! Integration tests for Settings loading.
//!
//! These tests exercise the explicit config file layer. The environment and
//! global config layers live in `config_env_test.rs`, its own test binary,
//! because they mutate process environment.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::Once;

use tempfile::TempDir;

use orgtree::config::{Settings, SettingsError};

static ISOLATE: Once = Once::new();

/// Hide the user's global config and ORGTREE_* variables from this binary.
fn isolate_from_host() {
    ISOLATE.call_once(|| {
        env::set_var(
            "XDG_CONFIG_HOME",
            env::temp_dir().join("orgtree-config-test-no-global"),
        );
        for (key, _) in env::vars().filter(|(key, _)| key.starts_with("ORGTREE_")) {
            env::remove_var(key);
        }
    });
}

#[test]
fn given_no_config_file_when_load_then_uses_defaults() {
    isolate_from_host();
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_when_load_then_overrides_specified_values() {
    isolate_from_host();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgtree.toml");
    fs::write(&path, "threshold = 250000.0\n").unwrap();

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert_eq!(settings.threshold, 250_000.0);
    assert_eq!(settings.focus, "Craig", "unspecified values keep defaults");
}

#[test]
fn given_config_file_with_focus_when_load_then_uses_it() {
    isolate_from_host();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgtree.toml");
    fs::write(&path, "focus = \"Phil\"\n").unwrap();

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert_eq!(settings.focus, "Phil");
    assert_eq!(settings.threshold, 1_000_000.0);
}

#[test]
fn given_missing_config_file_when_load_then_read_error() {
    isolate_from_host();
    let result = Settings::load(Some(Path::new("/nonexistent/orgtree.toml")));
    assert!(matches!(result, Err(SettingsError::Read { .. })));
}

#[test]
fn given_malformed_config_file_when_load_then_parse_error() {
    isolate_from_host();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgtree.toml");
    fs::write(&path, "threshold = [not toml").unwrap();

    let result = Settings::load(Some(path.as_path()));

    let err = result.expect_err("malformed toml must fail");
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("orgtree.toml"));
}
