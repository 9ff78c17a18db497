#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bundlecfg
//!
//! Layered settings for a bundler-compatible package manager.
//!
//! A setting may be defined in a per-project file, in a `BUNDLE_*`
//! environment variable, in a per-user file, or by a built-in default.
//! Reads resolve them in that order. Writes go to the project or user file
//! and automatically repair settings that would contradict the new value.
//!
//! ## Core Types
//!
//! - [`SettingsStore`], [`FileSettings`] and [`MemorySettings`]: scoped storage
//! - [`Scope`], [`WriteScope`], [`Locations`] and [`Snapshot`]: the data model
//! - [`GroupSet`]: decoded `with`/`without` group lists
//! - [`ConfigCommand`]: the `config` command, including conflict repair
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use bundlecfg::output::CapturedUi;
//! use bundlecfg::{ConfigCommand, MemorySettings, SettingsStore};
//!
//! let mut store = MemorySettings::new().with_global("path", "/opt/gems");
//! let ui = CapturedUi::new();
//!
//! ConfigCommand::new(&mut store, &ui, "/srv/app")
//!     .execute(["--global", "system", "true"], false)
//!     .unwrap();
//!
//! assert_eq!(store.get("path"), None);
//! assert!(ui.contains("`path` is already configured, so it will be unset."));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;
pub mod settings;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, SettingsConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    ConfigCommand, ConfigOutcome, ConfigRequest, ConflictResolver, ConflictVerdict,
    ExecutionResult, OperationPlan, PlanAction, PlanExecutor,
};
pub use output::{CapturedUi, Shell, Ui, UiLevel};
pub use settings::{
    FileSettings, GroupSet, Locations, MemorySettings, Scope, SettingsStore, Snapshot, WriteScope,
};
