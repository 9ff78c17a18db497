//! The settings store interface.

use crate::error::Result;

use super::key;
use super::locations::Locations;
use super::scope::{Scope, WriteScope};

/// Keyed, scoped storage for settings.
///
/// Implementations own the persistence format and the naming of environment
/// variables; everything above this trait only deals in setting names.
pub trait SettingsStore {
    /// Values the setting holds in the local, env and global scopes.
    fn locations(&self, name: &str) -> Locations;

    /// Writes (or with `None`, removes) a value in a writable scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn set(&mut self, scope: WriteScope, name: &str, value: Option<&str>) -> Result<()>;

    /// Names of every configured setting, sorted and unique.
    ///
    /// Built-in defaults are not included.
    fn all(&self) -> Vec<String>;

    /// Human description of where a writable scope is stored.
    fn describe(&self, scope: WriteScope) -> String;

    /// Built-in default for a setting.
    fn default_value(&self, name: &str) -> Option<String> {
        key::default_value(name).map(String::from)
    }

    /// Effective value including the built-in default.
    fn get(&self, name: &str) -> Option<String> {
        self.locations(name)
            .effective()
            .map(String::from)
            .or_else(|| self.default_value(name))
    }

    /// One display line per scope that holds a value, highest precedence first.
    fn pretty_values_for(&self, name: &str) -> Vec<String> {
        let locations = self.locations(name);
        let mut lines = Vec::new();

        for scope in Scope::PRECEDENCE {
            let line = match WriteScope::try_from(scope) {
                Ok(write_scope) => locations
                    .get(scope)
                    .map(|value| format!("Set for {}: {value:?}", self.describe(write_scope))),
                Err(Scope::Env) => locations
                    .env
                    .as_deref()
                    .map(|value| format!("Set via {}: {value:?}", key::env_key(name))),
                Err(_) => self
                    .default_value(name)
                    .map(|value| format!("Set by default: {value:?}")),
            };
            lines.extend(line);
        }

        if lines.is_empty() {
            lines.push(format!("You have not configured a value for `{name}`"));
        }
        lines
    }
}
