//! Runtime configuration of the settings system.
//!
//! This module decides *where* settings are read from and written to:
//! - the per-project file (`<app root>/.bundle/config`, or `BUNDLE_APP_CONFIG`)
//! - the per-user file (`~/.bundle/config`, or `BUNDLE_USER_CONFIG`)
//! - the env scope (every `BUNDLE_*` variable)
//! - whether unqualified writes prefer the local scope
//!
//! # Examples
//!
//! ```
//! use bundlecfg::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir("/srv/app")
//!     .with_user_config("/srv/home/.bundle/config")
//!     .with_prefer_local(true)
//!     .skip_env()
//!     .build()
//!     .unwrap();
//!
//! assert!(config.local_config_path.ends_with(".bundle/config"));
//! assert!(config.prefer_local);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::SettingsLoader;
pub use schema::{SettingsConfig, SettingsFile, StoredValue};
