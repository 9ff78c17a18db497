//! Environment variables seen by the settings system.
//!
//! Every `BUNDLE_*` variable forms the env scope. A few of them, plus
//! `BUNDLECFG_PREFER_LOCAL`, also steer where the settings files live.

use crate::error::{Error, Result};
use crate::settings::key;
use std::collections::BTreeMap;
use std::env;

/// Overrides the per-project settings directory (relative to the app root).
pub const APP_CONFIG_ENV: &str = "BUNDLE_APP_CONFIG";

/// Overrides the per-user settings file.
pub const USER_CONFIG_ENV: &str = "BUNDLE_USER_CONFIG";

/// Makes unqualified writes go to the local scope.
pub const PREFER_LOCAL_ENV: &str = "BUNDLECFG_PREFER_LOCAL";

/// Reads the environment-backed parts of the configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Every `BUNDLE_*` variable in the process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn capture() -> BTreeMap<String, String> {
        Self::filter_settings(env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Keep only variables that name a setting.
    #[must_use]
    pub fn filter_settings<I>(vars: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        vars.into_iter()
            .filter(|(name, _)| key::name_for_key(name).is_some())
            .collect()
    }

    /// `BUNDLECFG_PREFER_LOCAL`, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a recognised boolean.
    pub fn prefer_local() -> Result<Option<bool>> {
        env::var(PREFER_LOCAL_ENV)
            .ok()
            .map(|val| Self::parse_bool(PREFER_LOCAL_ENV, &val))
            .transpose()
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error naming `field` for any other value.
    pub fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_bool_variants() {
        for val in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("test", val).unwrap());
        }
        for val in ["false", "0", "NO", "off"] {
            assert!(!EnvironmentConfig::parse_bool("test", val).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let err = EnvironmentConfig::parse_bool("FIELD", "maybe").unwrap_err();
        assert!(err.to_string().contains("FIELD"));
    }

    #[test]
    fn test_filter_settings_keeps_prefixed_names() {
        let vars = vec![
            ("BUNDLE_PATH".to_string(), "vendor".to_string()),
            ("BUNDLE_".to_string(), "ignored".to_string()),
            ("HOME".to_string(), "/home/me".to_string()),
        ];
        let filtered = EnvironmentConfig::filter_settings(vars);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered["BUNDLE_PATH"], "vendor");
    }

    #[test]
    #[serial]
    fn test_capture_reads_process_env() {
        env::set_var("BUNDLE_CAPTURE_PROBE", "1");
        let captured = EnvironmentConfig::capture();
        env::remove_var("BUNDLE_CAPTURE_PROBE");
        assert_eq!(
            captured.get("BUNDLE_CAPTURE_PROBE").map(String::as_str),
            Some("1")
        );
    }

    #[test]
    #[serial]
    fn test_prefer_local_from_env() {
        let saved = env::var(PREFER_LOCAL_ENV).ok();

        env::set_var(PREFER_LOCAL_ENV, "yes");
        assert_eq!(EnvironmentConfig::prefer_local().unwrap(), Some(true));

        env::set_var(PREFER_LOCAL_ENV, "sometimes");
        assert!(EnvironmentConfig::prefer_local().is_err());

        env::remove_var(PREFER_LOCAL_ENV);
        assert_eq!(EnvironmentConfig::prefer_local().unwrap(), None);

        if let Some(val) = saved {
            env::set_var(PREFER_LOCAL_ENV, val);
        }
    }
}
