//! The `config` command.
//!
//! [`ConfigCommand`] parses the raw arguments, prints settings, and for
//! writes builds a single [`OperationPlan`] out of the shadowing advisories,
//! the conflict repairs and the write itself before handing it to the
//! [`PlanExecutor`].

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::output::{Ui, PADDING};
use crate::path::expand_path;
use crate::settings::{key, Locations, SettingsStore, Snapshot, WriteScope};

use super::conflicts::ConflictResolver;
use super::executor::PlanExecutor;
use super::plan::{Notice, OperationPlan, PlanAction};
use super::request::{ConfigRequest, WriteRequest};

const LIST_HEADER: &str = "Settings are listed in order of priority. The top value will be used.";

/// What a `config` invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// Every configured setting was printed.
    Listed {
        /// Number of settings printed.
        count: usize,
    },
    /// One setting was printed.
    Shown {
        /// Setting name.
        name: String,
    },
    /// A setting was removed.
    Deleted {
        /// Setting name.
        name: String,
    },
    /// A value was stored.
    Written {
        /// Setting name.
        name: String,
        /// Scope written to.
        scope: WriteScope,
        /// Stored value.
        value: String,
    },
    /// An empty group list removed the setting from both scopes.
    Cleared {
        /// Setting name.
        name: String,
    },
    /// A conflict repair cancelled the write.
    Aborted {
        /// Setting name.
        name: String,
    },
}

/// Orchestrates a single `config` invocation.
///
/// # Examples
///
/// ```
/// use bundlecfg::operations::{ConfigCommand, ConfigOutcome};
/// use bundlecfg::output::CapturedUi;
/// use bundlecfg::{MemorySettings, SettingsStore};
///
/// let mut store = MemorySettings::new().with_global("path", "/opt/gems");
/// let ui = CapturedUi::new();
///
/// let outcome = ConfigCommand::new(&mut store, &ui, "/srv/app")
///     .execute(["--global", "system", "true"], false)
///     .unwrap();
///
/// assert!(matches!(outcome, ConfigOutcome::Written { .. }));
/// assert_eq!(store.get("path"), None);
/// assert_eq!(store.get("system").as_deref(), Some("true"));
/// ```
pub struct ConfigCommand<'a> {
    store: &'a mut dyn SettingsStore,
    ui: &'a dyn Ui,
    working_dir: PathBuf,
    dry_run: bool,
}

impl<'a> ConfigCommand<'a> {
    /// Creates a command over `store`, reporting to `ui`.
    ///
    /// `working_dir` is the base for relative `local.*` paths.
    #[must_use]
    pub fn new(
        store: &'a mut dyn SettingsStore,
        ui: &'a dyn Ui,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            ui,
            working_dir: working_dir.into(),
            dry_run: false,
        }
    }

    /// Show notices but leave the store untouched.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Parse `args` and run the resulting request.
    ///
    /// # Errors
    ///
    /// An invalid scope marker is written to the output sink as an error and
    /// then returned. Store failures are returned unreported.
    pub fn execute<I, S>(&mut self, args: I, prefer_local: bool) -> Result<ConfigOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = match ConfigRequest::parse(args, prefer_local) {
            Ok(request) => request,
            Err(err) => {
                if err.is_usage_error() {
                    self.ui.error(&err.to_string());
                }
                return Err(err);
            }
        };
        self.run(request)
    }

    /// Run an already parsed request.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist a change.
    pub fn run(&mut self, request: ConfigRequest) -> Result<ConfigOutcome> {
        log::debug!("config request: {request:?}");
        match request {
            ConfigRequest::ListAll => Ok(self.list_all()),
            ConfigRequest::Show { name } => Ok(self.show(name)),
            ConfigRequest::Delete { name, scope } => self.delete(name, scope),
            ConfigRequest::Write(request) => self.write(request),
        }
    }

    fn list_all(&self) -> ConfigOutcome {
        self.ui.confirm(LIST_HEADER);
        let names = self.store.all();
        for name in &names {
            self.ui.confirm(name);
            self.print_values(name);
            self.ui.confirm("");
        }
        ConfigOutcome::Listed { count: names.len() }
    }

    fn show(&self, name: String) -> ConfigOutcome {
        self.ui.confirm(&format!(
            "Settings for `{name}` in order of priority. The top value will be used"
        ));
        self.print_values(&name);
        ConfigOutcome::Shown { name }
    }

    fn print_values(&self, name: &str) {
        for line in self.store.pretty_values_for(name) {
            self.ui.info(&format!("{PADDING}{line}"));
        }
    }

    fn delete(&mut self, name: String, scope: Option<WriteScope>) -> Result<ConfigOutcome> {
        let actions = match scope {
            Some(scope) => vec![PlanAction::unset(scope, &name)],
            None => PlanAction::unset_everywhere(&name),
        };
        let mut plan = OperationPlan::new(format!("Delete {name}"));
        plan.extend(actions, Vec::new());

        self.apply(&plan)?;
        Ok(ConfigOutcome::Deleted { name })
    }

    fn write(&mut self, request: WriteRequest) -> Result<ConfigOutcome> {
        let WriteRequest {
            name,
            scope,
            value,
            raw,
        } = request;

        let snapshot = Snapshot::capture(&*self.store, &name);
        let mut plan = OperationPlan::new(format!("Set {scope} {name}"));
        plan.extend(
            Vec::new(),
            Self::advisories(&name, scope, &value, &snapshot.locations(&name)),
        );

        let resolver = ConflictResolver::new(&snapshot);

        let exclusivity = resolver.resolve_system_path(&name, &value);
        let aborted = exclusivity.blocks_write();
        plan.extend(exclusivity.actions, exclusivity.notices);
        if aborted {
            self.apply(&plan)?;
            return Ok(ConfigOutcome::Aborted { name });
        }

        let overlap = resolver.resolve_groups(&name, &value);
        plan.extend(overlap.actions, overlap.notices);

        if key::is_group_setting(&name) && value.is_empty() {
            plan.extend(PlanAction::unset_everywhere(&name), Vec::new());
            self.apply(&plan)?;
            return Ok(ConfigOutcome::Cleared { name });
        }

        let value = if key::is_local_override(&name) {
            self.local_checkout(&raw).unwrap_or(value)
        } else {
            value
        };

        plan.actions.push(PlanAction::set(scope, &name, value.as_str()));
        self.apply(&plan)?;
        Ok(ConfigOutcome::Written { name, scope, value })
    }

    /// Notices about values that shadow, or are replaced by, the new one.
    fn advisories(name: &str, scope: WriteScope, value: &str, existing: &Locations) -> Vec<Notice> {
        let mut notices = Vec::new();

        match scope {
            WriteScope::Global => {
                if let Some(local) = &existing.local {
                    notices.push(Notice::info(format!(
                        "Your application has set {name} to {local:?}. This will override \
                         the global value you are currently setting"
                    )));
                }
                if let Some(env) = &existing.env {
                    notices.push(Notice::info(format!(
                        "You have a bundler environment variable for {name} set to {env:?}. \
                         This will take precedence over the global value you are setting"
                    )));
                }
                if let Some(global) = existing.global.as_deref().filter(|g| *g != value) {
                    notices.push(Notice::info(format!(
                        "You are replacing the current global value of {name}, which is \
                         currently {global:?}"
                    )));
                }
            }
            WriteScope::Local => {
                if let Some(local) = existing.local.as_deref().filter(|l| *l != value) {
                    notices.push(Notice::info(format!(
                        "You are replacing the current local value of {name}, which is \
                         currently {local:?}"
                    )));
                }
            }
        }

        notices
    }

    /// Absolute form of `raw` if it names an existing directory.
    fn local_checkout(&self, raw: &str) -> Option<String> {
        let expanded = expand_path(Path::new(raw), &self.working_dir).ok()?;
        if !expanded.is_dir() {
            return None;
        }
        log::debug!("expanded local checkout {raw} to {}", expanded.display());
        Some(expanded.display().to_string())
    }

    fn apply(&mut self, plan: &OperationPlan) -> Result<()> {
        let executor = PlanExecutor::new(&mut *self.store, self.ui);
        let mut executor = if self.dry_run {
            executor.dry_run()
        } else {
            executor
        };
        executor.execute(plan)?;
        Ok(())
    }
}
