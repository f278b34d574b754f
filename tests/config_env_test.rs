//! Integration tests for the global config and `ORGTREE_*` environment layers.
//!
//! Everything runs inside one test so that environment mutation is sequential;
//! this file is its own test binary and shares no process state with others.

use std::env;
use std::fs;

use tempfile::TempDir;

use orgtree::config::{global_config_path, Settings, SettingsError};

const VARS: [&str; 2] = ["ORGTREE_THRESHOLD", "ORGTREE_FOCUS"];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn given_global_file_and_env_vars_when_load_then_layers_apply_in_order() {
    clear_vars();
    let xdg = TempDir::new().unwrap();
    env::set_var("XDG_CONFIG_HOME", xdg.path());

    // XDG_CONFIG_HOME only steers the global path on Linux
    let global = global_config_path().expect("global config path");
    if global.starts_with(xdg.path()) {
        // no global file, no env: compiled defaults
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings, Settings::default());

        // global file overrides defaults
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(&global, "threshold = 10.0\nfocus = \"Phil\"\n").unwrap();

        let settings = Settings::load(None).expect("load global");
        assert_eq!(settings.threshold, 10.0);
        assert_eq!(settings.focus, "Phil");
    }

    // explicit file overrides the global file
    let local = xdg.path().join("local.toml");
    fs::write(&local, "threshold = 7.0\n").unwrap();
    let settings = Settings::load(Some(local.as_path())).expect("load local");
    assert_eq!(settings.threshold, 7.0);

    // env vars override every file
    env::set_var("ORGTREE_THRESHOLD", "42.5");
    env::set_var("ORGTREE_FOCUS", "Angela");
    let settings = Settings::load(Some(local.as_path())).expect("load env");
    assert_eq!(settings.threshold, 42.5);
    assert_eq!(settings.focus, "Angela");

    // integral values parse as floats too
    env::set_var("ORGTREE_THRESHOLD", "250000");
    let settings = Settings::load(None).expect("load integral env");
    assert_eq!(settings.threshold, 250_000.0);

    // a set but malformed threshold is an error, not a silent default
    env::set_var("ORGTREE_THRESHOLD", "abc");
    let result = Settings::load(None);
    assert!(
        matches!(result, Err(SettingsError::Env(_))),
        "malformed threshold must fail: {:?}",
        result
    );

    clear_vars();
    env::remove_var("XDG_CONFIG_HOME");
}
