//! Configuration schema definitions.
//!
//! [`SettingsConfig`] is the resolved runtime configuration of the tool
//! itself (where the settings files live, which environment is visible).
//! [`SettingsFile`] is the on-disk shape of a settings file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// File name of a settings file inside its directory.
pub const SETTINGS_FILE_NAME: &str = "config";

/// Directory holding the per-project settings file, relative to the app root.
pub const APP_CONFIG_DIR: &str = ".bundle";

/// Resolved locations and environment for a settings store.
///
/// Built by [`ConfigBuilder`](super::ConfigBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsConfig {
    /// Directory relative paths are expanded against.
    pub working_dir: PathBuf,

    /// Project root the local settings belong to.
    pub app_root: PathBuf,

    /// Per-project settings file.
    pub local_config_path: PathBuf,

    /// Per-user settings file.
    pub user_config_path: PathBuf,

    /// Environment variables forming the env scope, keyed by storage key.
    pub env: BTreeMap<String, String>,

    /// Write to the local scope when no scope marker is given.
    pub prefer_local: bool,
}

/// A scalar as it may appear in a settings file.
///
/// Files written by hand or by other tools sometimes hold unquoted booleans
/// or numbers; they are read back as their string form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StoredValue {
    /// Quoted or plain string.
    Text(String),
    /// Unquoted `true`/`false`.
    Flag(bool),
    /// Unquoted integer.
    Integer(i64),
    /// Unquoted float.
    Float(f64),
}

impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// On-disk settings file: a flat map from storage key to value.
///
/// # Examples
///
/// ```
/// use bundlecfg::config::SettingsFile;
///
/// let file: SettingsFile = serde_yaml::from_str("BUNDLE_RETRY: 5\n").unwrap();
/// assert_eq!(file.into_strings().get("BUNDLE_RETRY").map(String::as_str), Some("5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SettingsFile(pub BTreeMap<String, StoredValue>);

impl SettingsFile {
    /// Values in their string form.
    #[must_use]
    pub fn into_strings(self) -> BTreeMap<String, String> {
        self.0
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect()
    }

    /// Wraps string values for writing.
    #[must_use]
    pub fn from_strings(values: &BTreeMap<String, String>) -> Self {
        Self(
            values
                .iter()
                .map(|(key, value)| (key.clone(), StoredValue::Text(value.clone())))
                .collect(),
        )
    }
}
