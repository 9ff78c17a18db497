//! Lexical path expansion.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the home directory.
///
/// Handles `~` and `~/path`; `~user` is rejected.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8, the home directory
/// cannot be determined, or `~user` syntax is used.
///
/// # Examples
///
/// ```
/// use bundlecfg::path::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/gems")).unwrap();
/// assert!(expanded.ends_with("gems"));
///
/// assert_eq!(expand_tilde(Path::new("/srv/app")).unwrap(), Path::new("/srv/app"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix('~')) else {
        if path.to_str().is_none() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Path contains invalid UTF-8".to_string(),
            });
        }
        return Ok(path.to_path_buf());
    };

    let home = home::home_dir().ok_or(Error::HomeDirectoryNotFound)?;

    if rest.is_empty() {
        Ok(home)
    } else if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(home.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components of an absolute path.
///
/// `..` at the root stays at the root, as the shell does.
///
/// # Examples
///
/// ```
/// use bundlecfg::path::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/../etc")), PathBuf::from("/etc"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(component),
            Component::Normal(part) => result.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if result.parent().is_some() {
                    result.pop();
                }
            }
        }
    }

    result
}

/// Expand a user-supplied path to absolute form against `base`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails.
///
/// # Examples
///
/// ```
/// use bundlecfg::path::expand_path;
/// use std::path::{Path, PathBuf};
///
/// let expanded = expand_path(Path::new("../rack"), Path::new("/srv/app")).unwrap();
/// assert_eq!(expanded, PathBuf::from("/srv/rack"));
/// ```
pub fn expand_path(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };
    Ok(resolve_components(&absolute))
}
