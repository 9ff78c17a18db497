//! Path handling for settings files and `local.*` overrides.
//!
//! Paths are expanded lexically: `~` becomes the home directory, relative
//! paths are joined onto an explicit base, and `.`/`..` are resolved without
//! touching the filesystem or following symlinks.

pub mod normalize;

pub use normalize::{expand_path, expand_tilde, resolve_components};
