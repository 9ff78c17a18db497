//! Plan execution engine.
//!
//! The executor takes an [`OperationPlan`], writes its notices to the output
//! sink and applies its actions to the settings store.

use crate::error::Result;
use crate::output::Ui;
use crate::settings::SettingsStore;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no store changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
        }
    }
}

/// Executes operation plans against a settings store.
///
/// # Examples
///
/// ```
/// use bundlecfg::operations::{Notice, OperationPlan, PlanAction, PlanExecutor};
/// use bundlecfg::output::CapturedUi;
/// use bundlecfg::{MemorySettings, SettingsStore, WriteScope};
///
/// let mut store = MemorySettings::new().with_global("path", "/opt/gems");
/// let ui = CapturedUi::new();
/// let plan = OperationPlan::new("Set global system")
///     .add_notice(Notice::warn("`path` is already configured, so it will be unset."))
///     .add_action(PlanAction::unset(WriteScope::Global, "path"))
///     .add_action(PlanAction::set(WriteScope::Global, "system", "true"));
///
/// let result = PlanExecutor::new(&mut store, &ui).execute(&plan).unwrap();
/// assert_eq!(result.actions_taken.len(), 2);
/// assert_eq!(store.get("path"), None);
/// assert!(ui.contains("`path` is already configured"));
/// ```
pub struct PlanExecutor<'a> {
    store: &'a mut dyn SettingsStore,
    ui: &'a dyn Ui,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(store: &'a mut dyn SettingsStore, ui: &'a dyn Ui) -> Self {
        Self {
            store,
            ui,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode notices are still shown but the store is left alone.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// All notices are written before the first action runs.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to persist. Actions before the
    /// failing one stay applied.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        for notice in &plan.notices {
            self.ui.line(notice.level, &notice.message);
        }

        if self.dry_run {
            return Ok(ExecutionResult::from_plan(plan, true));
        }

        log::debug!("executing plan: {}", plan.description);
        for action in &plan.actions {
            self.execute_action(action)?;
        }

        Ok(ExecutionResult::from_plan(plan, false))
    }

    fn execute_action(&mut self, action: &PlanAction) -> Result<()> {
        log::debug!("{action}");
        match action {
            PlanAction::Set { scope, name, value } => {
                self.store.set(*scope, name, Some(value.as_str()))
            }
            PlanAction::Unset { scope, name } => self.store.set(*scope, name, None),
        }
    }
}
