//! Setting names, their environment keys, and built-in defaults.

/// Prefix shared by every settings key in files and the environment.
pub const ENV_PREFIX: &str = "BUNDLE_";

/// Groups to install.
pub const WITH: &str = "with";
/// Groups to skip.
pub const WITHOUT: &str = "without";
/// Custom install path.
pub const PATH: &str = "path";
/// Install into the system gem location.
pub const SYSTEM: &str = "system";
/// Namespaced refinement of [`SYSTEM`].
pub const PATH_SYSTEM: &str = "path.system";

/// Namespace for settings that point at local checkouts.
pub const LOCAL_NAMESPACE: &str = "local.";

/// Settings that have a value even when nobody configured them.
pub const DEFAULTS: &[(&str, &str)] = &[("redirect", "5"), ("retry", "3"), ("timeout", "10")];

/// Storage and environment key for a setting name.
///
/// # Examples
///
/// ```
/// use bundlecfg::settings::key::env_key;
///
/// assert_eq!(env_key("path"), "BUNDLE_PATH");
/// assert_eq!(env_key("path.system"), "BUNDLE_PATH__SYSTEM");
/// ```
#[must_use]
pub fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}{}", name.replace('.', "__").to_uppercase())
}

/// Setting name for a storage key, or `None` if the key is not a settings key.
///
/// # Examples
///
/// ```
/// use bundlecfg::settings::key::name_for_key;
///
/// assert_eq!(name_for_key("BUNDLE_PATH__SYSTEM").as_deref(), Some("path.system"));
/// assert_eq!(name_for_key("HOME"), None);
/// ```
#[must_use]
pub fn name_for_key(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.replace("__", ".").to_lowercase())
}

/// Whether the setting holds a colon-separated group list.
#[must_use]
pub fn is_group_setting(name: &str) -> bool {
    name == WITH || name == WITHOUT
}

/// The other half of a `with`/`without` pair.
#[must_use]
pub fn opposite_group_setting(name: &str) -> Option<&'static str> {
    match name {
        WITH => Some(WITHOUT),
        WITHOUT => Some(WITH),
        _ => None,
    }
}

/// Whether the setting lives in the `local.` namespace.
#[must_use]
pub fn is_local_override(name: &str) -> bool {
    name.starts_with(LOCAL_NAMESPACE)
}

/// Built-in default for a setting.
#[must_use]
pub fn default_value(name: &str) -> Option<&'static str> {
    DEFAULTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}
