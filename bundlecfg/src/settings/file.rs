//! Settings store backed by YAML files.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::config::{SettingsConfig, SettingsLoader};
use crate::error::Result;

use super::key;
use super::locations::Locations;
use super::scope::WriteScope;
use super::store::SettingsStore;

/// A [`SettingsStore`] persisted in the per-project and per-user files.
///
/// Files map storage keys (`BUNDLE_PATH`) to string values. Both files are
/// read once on open; every [`set`](SettingsStore::set) rewrites the file
/// of the scope it touched.
#[derive(Debug, Clone)]
pub struct FileSettings {
    local_path: PathBuf,
    global_path: PathBuf,
    local: BTreeMap<String, String>,
    global: BTreeMap<String, String>,
    env: BTreeMap<String, String>,
}

impl FileSettings {
    /// Load both settings files named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file exists but cannot be read or parsed.
    pub fn open(config: &SettingsConfig) -> Result<Self> {
        Ok(Self {
            local: SettingsLoader::load_file(&config.local_config_path)?,
            global: SettingsLoader::load_file(&config.user_config_path)?,
            local_path: config.local_config_path.clone(),
            global_path: config.user_config_path.clone(),
            env: config.env.clone(),
        })
    }

    /// Path of the file backing a scope.
    #[must_use]
    pub fn path(&self, scope: WriteScope) -> &Path {
        match scope {
            WriteScope::Local => &self.local_path,
            WriteScope::Global => &self.global_path,
        }
    }
}

impl SettingsStore for FileSettings {
    fn locations(&self, name: &str) -> Locations {
        let key = key::env_key(name);
        Locations {
            local: self.local.get(&key).cloned(),
            env: self.env.get(&key).cloned(),
            global: self.global.get(&key).cloned(),
        }
    }

    fn set(&mut self, scope: WriteScope, name: &str, value: Option<&str>) -> Result<()> {
        let key = key::env_key(name);
        let (map, path) = match scope {
            WriteScope::Local => (&mut self.local, &self.local_path),
            WriteScope::Global => (&mut self.global, &self.global_path),
        };

        let changed = match value {
            Some(value) => map.insert(key, value.to_string()).as_deref() != Some(value),
            None => map.remove(&key).is_some(),
        };
        if !changed {
            return Ok(());
        }

        log::debug!("{scope} {name} = {value:?}");
        SettingsLoader::save_file(path, map)
    }

    fn all(&self) -> Vec<String> {
        self.local
            .keys()
            .chain(self.env.keys())
            .chain(self.global.keys())
            .filter_map(|k| key::name_for_key(k))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn describe(&self, scope: WriteScope) -> String {
        match scope {
            WriteScope::Local => format!("your local app ({})", self.local_path.display()),
            WriteScope::Global => format!("the current user ({})", self.global_path.display()),
        }
    }
}
