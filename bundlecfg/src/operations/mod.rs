//! Settings operations using the plan-execute pattern.
//!
//! A `config` invocation is split into two phases:
//! 1. **Planning**: parse the request, snapshot the affected settings, and
//!    collect advisories, conflict repairs and the write into an
//!    [`OperationPlan`]
//! 2. **Execution**: the [`PlanExecutor`] prints the notices and applies the
//!    actions to the store
//!
//! Conflict decisions live in [`ConflictResolver`], which only reads the
//! pre-write [`Snapshot`](crate::settings::Snapshot).
//!
//! # Examples
//!
//! ```
//! use bundlecfg::operations::{ConfigCommand, ConfigOutcome};
//! use bundlecfg::output::CapturedUi;
//! use bundlecfg::{MemorySettings, SettingsStore};
//!
//! let mut store = MemorySettings::new().with_local("without", "dev:test");
//! let ui = CapturedUi::new();
//!
//! ConfigCommand::new(&mut store, &ui, "/srv/app")
//!     .execute(["--local", "with", "dev", "ci"], false)
//!     .unwrap();
//!
//! assert_eq!(store.locations("without").local.as_deref(), Some("test"));
//! assert_eq!(store.locations("with").local.as_deref(), Some("dev:ci"));
//! ```

pub mod command;
pub mod conflicts;
pub mod executor;
pub mod plan;
pub mod request;

#[cfg(test)]
mod proptests;

pub use command::{ConfigCommand, ConfigOutcome};
pub use conflicts::{ConflictResolver, ConflictVerdict, Resolution};
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{Notice, OperationPlan, PlanAction};
pub use request::{ConfigRequest, ScopeFlag, WriteRequest};
