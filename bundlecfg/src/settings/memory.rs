//! In-memory settings store.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;

use super::locations::Locations;
use super::scope::WriteScope;
use super::store::SettingsStore;

/// A [`SettingsStore`] kept entirely in memory.
///
/// Useful for embedding and for exercising conflict resolution without
/// touching the filesystem.
///
/// # Examples
///
/// ```
/// use bundlecfg::{MemorySettings, SettingsStore, WriteScope};
///
/// let mut store = MemorySettings::new().with_env("path", "vendor");
/// store.set(WriteScope::Global, "path", Some("/opt/gems")).unwrap();
///
/// assert_eq!(store.get("path").as_deref(), Some("vendor"));
/// assert_eq!(store.all(), vec!["path".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    local: BTreeMap<String, String>,
    env: BTreeMap<String, String>,
    global: BTreeMap<String, String>,
}

impl MemorySettings {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a local value.
    #[must_use]
    pub fn with_local(mut self, name: &str, value: &str) -> Self {
        self.local.insert(name.to_string(), value.to_string());
        self
    }

    /// Seeds an environment value.
    #[must_use]
    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    /// Seeds a global value.
    #[must_use]
    pub fn with_global(mut self, name: &str, value: &str) -> Self {
        self.global.insert(name.to_string(), value.to_string());
        self
    }
}

impl SettingsStore for MemorySettings {
    fn locations(&self, name: &str) -> Locations {
        Locations {
            local: self.local.get(name).cloned(),
            env: self.env.get(name).cloned(),
            global: self.global.get(name).cloned(),
        }
    }

    fn set(&mut self, scope: WriteScope, name: &str, value: Option<&str>) -> Result<()> {
        let map = match scope {
            WriteScope::Local => &mut self.local,
            WriteScope::Global => &mut self.global,
        };
        match value {
            Some(value) => {
                map.insert(name.to_string(), value.to_string());
            }
            None => {
                map.remove(name);
            }
        }
        Ok(())
    }

    fn all(&self) -> Vec<String> {
        self.local
            .keys()
            .chain(self.env.keys())
            .chain(self.global.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn describe(&self, scope: WriteScope) -> String {
        match scope {
            WriteScope::Local => "your local app".to_string(),
            WriteScope::Global => "the current user".to_string(),
        }
    }
}
