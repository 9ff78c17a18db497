//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated application directory and home so the
//! binary never reads or writes the real settings files.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated app and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Application root, containing a `Gemfile`
    pub app_dir: PathBuf,
    /// Home directory used for the per-user file
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let app_dir = temp_dir.path().join("app");
        let home_dir = temp_dir.path().join("home");
        fs::create_dir_all(&app_dir).expect("Failed to create app dir");
        fs::create_dir_all(&home_dir).expect("Failed to create home dir");
        fs::write(app_dir.join("Gemfile"), "source \"https://rubygems.org\"\n")
            .expect("Failed to write Gemfile");

        Self {
            temp_dir,
            app_dir,
            home_dir,
        }
    }

    /// Per-project settings file.
    pub fn local_file(&self) -> PathBuf {
        self.app_dir.join(".bundle").join("config")
    }

    /// Per-user settings file.
    pub fn global_file(&self) -> PathBuf {
        self.home_dir.join(".bundle").join("config")
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The process environment is cleared so stray `BUNDLE_*` variables on
    /// the test machine cannot leak into the env scope.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("bundlecfg").expect("Failed to find bundlecfg binary");
        cmd.env_clear()
            .env("HOME", &self.home_dir)
            .current_dir(&self.app_dir);
        cmd
    }

    /// Get a command builder running `bundlecfg config`.
    pub fn config(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("config");
        cmd
    }

    /// Write raw YAML to a settings file.
    pub fn write_settings(&self, path: &Path, yaml: &str) {
        fs::create_dir_all(path.parent().expect("settings file has a parent"))
            .expect("Failed to create settings dir");
        fs::write(path, yaml).expect("Failed to write settings file");
    }

    /// Parse a settings file into a map, empty if it does not exist.
    pub fn read_settings(&self, path: &Path) -> serde_yaml::Mapping {
        match fs::read_to_string(path) {
            Ok(contents) => serde_yaml::from_str(&contents).expect("settings file is YAML"),
            Err(_) => serde_yaml::Mapping::new(),
        }
    }

    /// Value of one storage key in a settings file.
    pub fn setting(&self, path: &Path, key: &str) -> Option<String> {
        self.read_settings(path)
            .get(key)
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}
