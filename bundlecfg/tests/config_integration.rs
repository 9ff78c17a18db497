//! Integration tests for resolving where settings live.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so they must not run
//! concurrently with each other.

mod common;

use std::env;
use std::fs;

use bundlecfg::config::ConfigBuilder;
use bundlecfg::error::Error;
use bundlecfg::{FileSettings, SettingsStore};
use common::TestApp;
use serial_test::serial;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

#[test]
fn test_app_root_found_from_subdirectory() {
    let app = TestApp::new();
    let nested = app.app_dir().join("lib").join("tasks");
    fs::create_dir_all(&nested).unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .with_user_config(app.global_file())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.app_root, app.app_dir());
    assert_eq!(config.local_config_path, app.local_file());
}

#[test]
fn test_non_string_scalars_are_stringified() {
    let app = TestApp::new();
    app.write_file(
        &app.local_file(),
        "---\nBUNDLE_JOBS: 4\nBUNDLE_FROZEN: true\nBUNDLE_TIMEOUT: 2.5\n",
    );

    let store = app.store();
    assert_eq!(store.get("jobs").as_deref(), Some("4"));
    assert_eq!(store.get("frozen").as_deref(), Some("true"));
    assert_eq!(store.get("timeout").as_deref(), Some("2.5"));
}

#[test]
fn test_settings_file_must_be_a_map() {
    let app = TestApp::new();
    app.write_file(&app.global_file(), "- just\n- a list\n");

    let err = FileSettings::open(&app.config()).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_env_scope_precedes_global() {
    let app = TestApp::new().with_env("BUNDLE_JOBS", "3");
    app.write_file(&app.global_file(), "---\nBUNDLE_JOBS: \"8\"\n");

    let store = app.store();
    assert_eq!(store.get("jobs").as_deref(), Some("3"));
    assert_eq!(
        store.pretty_values_for("jobs"),
        vec![
            "Set via BUNDLE_JOBS: \"3\"".to_string(),
            format!("Set for the current user ({}): \"8\"", app.global_file().display()),
        ]
    );
}

#[test]
fn test_defaults_are_not_listed() {
    let app = TestApp::new();
    let store = app.store();
    assert_eq!(store.get("retry").as_deref(), Some("3"));
    assert!(store.all().is_empty());
}

#[test]
#[serial]
fn test_app_config_env_is_relative_to_app_root() {
    let app = TestApp::new();
    let _guard = EnvGuard::new("BUNDLE_APP_CONFIG", "settings");

    let config = ConfigBuilder::new()
        .with_working_dir(app.app_dir())
        .with_user_config(app.global_file())
        .build()
        .unwrap();

    assert_eq!(
        config.local_config_path,
        app.app_dir().join("settings").join("config")
    );
}

#[test]
#[serial]
fn test_user_config_env() {
    let app = TestApp::new();
    let custom = app.app_dir().join("user-settings.yml");
    let _guard = EnvGuard::new("BUNDLE_USER_CONFIG", custom.to_str().unwrap());

    let config = ConfigBuilder::new()
        .with_working_dir(app.app_dir())
        .build()
        .unwrap();

    assert_eq!(config.user_config_path, custom);
}

#[test]
#[serial]
fn test_prefer_local_env() {
    let app = TestApp::new();
    let _guard = EnvGuard::new("BUNDLECFG_PREFER_LOCAL", "yes");

    let config = ConfigBuilder::new()
        .with_working_dir(app.app_dir())
        .with_user_config(app.global_file())
        .build()
        .unwrap();
    assert!(config.prefer_local);

    let explicit = ConfigBuilder::new()
        .with_working_dir(app.app_dir())
        .with_user_config(app.global_file())
        .with_prefer_local(false)
        .build()
        .unwrap();
    assert!(!explicit.prefer_local);
}

#[test]
#[serial]
fn test_invalid_prefer_local_env() {
    let app = TestApp::new();
    let _guard = EnvGuard::new("BUNDLECFG_PREFER_LOCAL", "sometimes");

    let err = ConfigBuilder::new()
        .with_working_dir(app.app_dir())
        .with_user_config(app.global_file())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
#[serial]
fn test_process_env_feeds_env_scope() {
    let app = TestApp::new();
    let _guard = EnvGuard::new("BUNDLE_BUNDLECFG_TEST_MARKER", "on");

    let config = ConfigBuilder::new()
        .with_working_dir(app.app_dir())
        .with_user_config(app.global_file())
        .build()
        .unwrap();
    let store = FileSettings::open(&config).unwrap();

    assert_eq!(
        store.locations("bundlecfg_test_marker").env.as_deref(),
        Some("on")
    );
}
