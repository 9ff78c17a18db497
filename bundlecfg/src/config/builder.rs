//! Builder for [`SettingsConfig`].

use crate::config::environment::{EnvironmentConfig, APP_CONFIG_ENV, USER_CONFIG_ENV};
use crate::config::loader::SettingsLoader;
use crate::config::schema::{SettingsConfig, APP_CONFIG_DIR, SETTINGS_FILE_NAME};
use crate::error::{Error, Result};
use crate::path::expand_path;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

/// Resolves where settings live and which environment is visible.
///
/// Precedence for each location is: explicit builder value, then the
/// environment, then the built-in layout.
///
/// # Examples
///
/// ```
/// use bundlecfg::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_working_dir("/srv/app")
///     .with_user_config("/srv/home/.bundle/config")
///     .skip_env()
///     .with_env_var("BUNDLE_PATH", "vendor/bundle")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.env.get("BUNDLE_PATH").map(String::as_str), Some("vendor/bundle"));
/// assert!(!config.prefer_local);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    app_config_dir: Option<PathBuf>,
    user_config_path: Option<PathBuf>,
    prefer_local: Option<bool>,
    skip_env: bool,
    env_vars: BTreeMap<String, String>,
}

impl ConfigBuilder {
    /// Creates a builder with nothing overridden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start the app root search from (default: current directory).
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Directory holding the per-project settings file.
    #[must_use]
    pub fn with_app_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.app_config_dir = Some(dir.into());
        self
    }

    /// Per-user settings file.
    #[must_use]
    pub fn with_user_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_config_path = Some(path.into());
        self
    }

    /// Write to the local scope when no scope marker is given.
    #[must_use]
    pub fn with_prefer_local(mut self, prefer_local: bool) -> Self {
        self.prefer_local = Some(prefer_local);
        self
    }

    /// Ignore the process environment entirely.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a variable to the visible environment, on top of the process one.
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(name.into(), value.into());
        self
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory or home directory cannot
    /// be determined, a path cannot be expanded, or
    /// `BUNDLECFG_PREFER_LOCAL` holds an invalid boolean.
    pub fn build(self) -> Result<SettingsConfig> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let mut env_vars = if self.skip_env {
            BTreeMap::new()
        } else {
            EnvironmentConfig::capture()
        };
        env_vars.extend(EnvironmentConfig::filter_settings(self.env_vars));

        let app_root = SettingsLoader::find_app_root(&working_dir);

        let app_config_dir = match (self.app_config_dir, env_vars.get(APP_CONFIG_ENV)) {
            (Some(dir), _) => expand_path(&dir, &working_dir)?,
            (None, Some(dir)) => expand_path(&PathBuf::from(dir), &app_root)?,
            (None, None) => app_root.join(APP_CONFIG_DIR),
        };

        let user_config_path = match (self.user_config_path, env_vars.get(USER_CONFIG_ENV)) {
            (Some(path), _) => expand_path(&path, &working_dir)?,
            (None, Some(path)) => expand_path(&PathBuf::from(path), &working_dir)?,
            (None, None) => home::home_dir()
                .ok_or(Error::HomeDirectoryNotFound)?
                .join(APP_CONFIG_DIR)
                .join(SETTINGS_FILE_NAME),
        };

        let prefer_local = match self.prefer_local {
            Some(prefer_local) => prefer_local,
            None if self.skip_env => false,
            None => EnvironmentConfig::prefer_local()?.unwrap_or(false),
        };

        let config = SettingsConfig {
            local_config_path: app_config_dir.join(SETTINGS_FILE_NAME),
            working_dir,
            app_root,
            user_config_path,
            env: env_vars,
            prefer_local,
        };
        log::debug!(
            "local settings at {}, user settings at {}",
            config.local_config_path.display(),
            config.user_config_path.display()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(temp_dir: &TempDir) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_user_config(temp_dir.path().join("home").join("config"))
            .skip_env()
    }

    #[test]
    fn test_default_layout() {
        let temp_dir = TempDir::new().unwrap();
        let config = isolated(&temp_dir).build().unwrap();

        assert_eq!(config.app_root, temp_dir.path());
        assert_eq!(
            config.local_config_path,
            temp_dir.path().join(".bundle").join("config")
        );
        assert!(config.env.is_empty());
        assert!(!config.prefer_local);
    }

    #[test]
    fn test_app_root_found_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Gemfile"), "").unwrap();
        let sub = temp_dir.path().join("app").join("models");
        fs::create_dir_all(&sub).unwrap();

        let config = isolated(&temp_dir).with_working_dir(&sub).build().unwrap();
        assert_eq!(config.app_root, temp_dir.path());
        assert_eq!(config.working_dir, sub);
    }

    #[test]
    fn test_app_config_env_is_relative_to_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = isolated(&temp_dir)
            .with_env_var(APP_CONFIG_ENV, "ci/settings")
            .build()
            .unwrap();

        assert_eq!(
            config.local_config_path,
            temp_dir.path().join("ci").join("settings").join("config")
        );
        // still visible as a setting in the env scope
        assert!(config.env.contains_key(APP_CONFIG_ENV));
    }

    #[test]
    fn test_explicit_app_config_beats_env() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("explicit");
        let config = isolated(&temp_dir)
            .with_app_config_dir(&explicit)
            .with_env_var(APP_CONFIG_ENV, "ignored")
            .build()
            .unwrap();

        assert_eq!(config.local_config_path, explicit.join("config"));
    }

    #[test]
    fn test_non_setting_env_vars_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let config = isolated(&temp_dir)
            .with_env_var("PATH", "/usr/bin")
            .with_env_var("BUNDLE_WITHOUT", "test")
            .build()
            .unwrap();

        assert_eq!(config.env.len(), 1);
        assert_eq!(config.env["BUNDLE_WITHOUT"], "test");
    }

    #[test]
    fn test_prefer_local_explicit() {
        let temp_dir = TempDir::new().unwrap();
        let config = isolated(&temp_dir).with_prefer_local(true).build().unwrap();
        assert!(config.prefer_local);
    }
}
