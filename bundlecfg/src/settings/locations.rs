//! Per-invocation snapshots of where a setting is defined.

use std::collections::BTreeMap;

use super::key;
use super::scope::{Scope, WriteScope};
use super::store::SettingsStore;

/// Values a setting holds in each non-default scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    /// Value in the per-project file.
    pub local: Option<String>,
    /// Value from the process environment.
    pub env: Option<String>,
    /// Value in the per-user file.
    pub global: Option<String>,
}

impl Locations {
    /// Value in one of the non-default scopes.
    #[must_use]
    pub fn get(&self, scope: Scope) -> Option<&str> {
        match scope {
            Scope::Local => self.local.as_deref(),
            Scope::Env => self.env.as_deref(),
            Scope::Global => self.global.as_deref(),
            Scope::Default => None,
        }
    }

    /// Value in a writable scope.
    #[must_use]
    pub fn written(&self, scope: WriteScope) -> Option<&str> {
        self.get(scope.into())
    }

    /// Highest-precedence configured value, ignoring defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlecfg::Locations;
    ///
    /// let locations = Locations {
    ///     local: None,
    ///     env: Some("vendor".to_string()),
    ///     global: Some("/opt/gems".to_string()),
    /// };
    /// assert_eq!(locations.effective(), Some("vendor"));
    /// ```
    #[must_use]
    pub fn effective(&self) -> Option<&str> {
        self.local
            .as_deref()
            .or(self.env.as_deref())
            .or(self.global.as_deref())
    }

    /// Whether any non-default scope holds a value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.effective().is_some()
    }
}

/// Settings whose state a write may need to consult.
const RELATED: [&str; 5] = [
    key::PATH,
    key::SYSTEM,
    key::PATH_SYSTEM,
    key::WITH,
    key::WITHOUT,
];

/// Locations of a setting and its related settings, read once before any
/// mutation.
///
/// Conflict checks read only from the snapshot, so repairs made earlier in
/// the same invocation are never observed.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: BTreeMap<String, Locations>,
}

impl Snapshot {
    /// Reads `name` and every related setting from the store.
    #[must_use]
    pub fn capture(store: &dyn SettingsStore, name: &str) -> Self {
        let mut entries = BTreeMap::new();
        for related in std::iter::once(name).chain(RELATED) {
            entries
                .entry(related.to_string())
                .or_insert_with(|| store.locations(related));
        }
        log::debug!("captured snapshot of {} settings for {name}", entries.len());
        Self { entries }
    }

    /// Builds a snapshot from explicit entries.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Locations)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, locations)| (name.into(), locations))
                .collect(),
        }
    }

    /// Locations of a setting; unknown settings are unset everywhere.
    #[must_use]
    pub fn locations(&self, name: &str) -> Locations {
        self.entries.get(name).cloned().unwrap_or_default()
    }

    /// Whether the setting has any configured value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(Locations::is_set)
    }
}
