//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! loading of the settings configuration they describe.

use crate::error::CliError;
use bundlecfg::{ConfigBuilder, LogLevel, SettingsConfig};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Resolved output verbosity.
    pub log_level: LogLevel,

    /// Override the per-project settings directory.
    pub app_config: Option<PathBuf>,

    /// Override the per-user settings file.
    pub user_config: Option<PathBuf>,

    /// Force unqualified writes to the local scope.
    pub prefer_local: bool,
}

/// Resolve where settings live.
///
/// Flags take precedence over the environment, which takes precedence over
/// the built-in locations.
pub fn load_configuration(global: &GlobalOptions) -> Result<SettingsConfig, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.app_config {
        builder = builder.with_app_config_dir(dir);
    }
    if let Some(ref path) = global.user_config {
        builder = builder.with_user_config(path);
    }
    if global.prefer_local {
        builder = builder.with_prefer_local(true);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
