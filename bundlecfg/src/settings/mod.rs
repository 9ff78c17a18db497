//! Scoped settings: names, scopes, snapshots and stores.
//!
//! A setting can hold a value in several scopes. Reads resolve them in
//! precedence order (highest first):
//!
//! 1. Local: the per-project settings file
//! 2. Env: a `BUNDLE_*` environment variable
//! 3. Global: the per-user settings file
//! 4. Default: a built-in fallback
//!
//! Only Local and Global are writable.

pub mod file;
pub mod groups;
pub mod key;
pub mod locations;
pub mod memory;
pub mod scope;
pub mod store;

#[cfg(test)]
mod proptests;

pub use file::FileSettings;
pub use groups::GroupSet;
pub use locations::{Locations, Snapshot};
pub use memory::MemorySettings;
pub use scope::{Scope, WriteScope};
pub use store::SettingsStore;
