//! Settings file discovery, loading and saving.

use crate::config::schema::{SettingsFile, APP_CONFIG_DIR};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Files whose presence marks a project root.
const ROOT_MARKERS: [&str; 2] = ["Gemfile", "gems.rb"];

/// Finds, reads and writes settings files.
///
/// # Examples
///
/// ```no_run
/// use bundlecfg::config::SettingsLoader;
/// use std::path::Path;
///
/// let root = SettingsLoader::find_app_root(Path::new("."));
/// let values = SettingsLoader::load_file(&root.join(".bundle/config")).unwrap();
/// println!("{} local settings", values.len());
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Walk up from `start_dir` to the first directory that looks like a
    /// project root.
    ///
    /// A root holds a `Gemfile`, a `gems.rb` or a `.bundle` directory. If no
    /// ancestor qualifies, `start_dir` itself is the root.
    #[must_use]
    pub fn find_app_root(start_dir: &Path) -> PathBuf {
        let mut current = start_dir.to_path_buf();

        loop {
            if Self::is_app_root(&current) {
                log::debug!("found app root at {}", current.display());
                return current;
            }
            if !current.pop() {
                break;
            }
        }

        start_dir.to_path_buf()
    }

    fn is_app_root(dir: &Path) -> bool {
        ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file())
            || dir.join(APP_CONFIG_DIR).is_dir()
    }

    /// Load a settings file as storage key → value.
    ///
    /// A missing or empty file yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or is not a
    /// flat YAML map of scalars.
    pub fn load_file(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read settings file: {e}"),
        })?;

        let parsed: Option<SettingsFile> =
            serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
                field: format!("{}", path.display()),
                message: format!("Invalid YAML: {e}"),
            })?;

        Ok(parsed.map(SettingsFile::into_strings).unwrap_or_default())
    }

    /// Write a settings file, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_file(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&SettingsFile::from_strings(values))?;
        fs::write(path, yaml)?;
        log::debug!("wrote {} settings to {}", values.len(), path.display());
        Ok(())
    }
}
