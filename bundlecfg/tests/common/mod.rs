//! Common test utilities for integration tests.
//!
//! This module provides a throwaway application directory and user home so
//! that tests exercise the real file-backed store without touching the
//! machine's own settings.

use std::fs;
use std::path::{Path, PathBuf};

use bundlecfg::output::CapturedUi;
use bundlecfg::{ConfigBuilder, ConfigCommand, ConfigOutcome, FileSettings, Result, SettingsConfig};
use tempfile::TempDir;

/// An application directory (with a `Gemfile`) and a separate home.
pub struct TestApp {
    temp_dir: TempDir,
    env: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TestApp {
    /// Creates the fixture.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("app")).unwrap();
        fs::write(temp_dir.path().join("app").join("Gemfile"), "source \"https://rubygems.org\"\n")
            .unwrap();
        fs::create_dir_all(temp_dir.path().join("home")).unwrap();
        Self {
            temp_dir,
            env: Vec::new(),
        }
    }

    /// Adds a `BUNDLE_*` variable to the env scope.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// The application root.
    pub fn app_dir(&self) -> PathBuf {
        self.temp_dir.path().join("app")
    }

    /// The per-project settings file.
    pub fn local_file(&self) -> PathBuf {
        self.app_dir().join(".bundle").join("config")
    }

    /// The per-user settings file.
    pub fn global_file(&self) -> PathBuf {
        self.temp_dir.path().join("home").join(".bundle").join("config")
    }

    /// Resolved configuration, isolated from the process environment.
    pub fn config(&self) -> SettingsConfig {
        let mut builder = ConfigBuilder::new()
            .with_working_dir(self.app_dir())
            .with_user_config(self.global_file())
            .skip_env();
        for (key, value) in &self.env {
            builder = builder.with_env_var(key, value);
        }
        builder.build().unwrap()
    }

    /// Opens the file-backed store fresh from disk.
    pub fn store(&self) -> FileSettings {
        FileSettings::open(&self.config()).unwrap()
    }

    /// Runs `config` with `args` against a freshly opened store.
    pub fn config_command(&self, args: &[&str]) -> (Result<ConfigOutcome>, CapturedUi) {
        let mut store = self.store();
        let ui = CapturedUi::new();
        let outcome = ConfigCommand::new(&mut store, &ui, self.app_dir())
            .execute(args.iter().copied(), false);
        (outcome, ui)
    }

    /// Writes raw YAML to a settings file.
    pub fn write_file(&self, path: &Path, yaml: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, yaml).unwrap();
    }

    /// Raw contents of a settings file, empty if it does not exist.
    pub fn read_file(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }
}
